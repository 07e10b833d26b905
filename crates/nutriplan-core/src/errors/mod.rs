// ABOUTME: Unified error handling with standard error codes for the meal planner
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the planner returns [`AppResult`]. A planning
//! run either completes (possibly with absent slots) or fails with exactly one
//! [`AppError`]; there is no partial-week-on-error mode.

/// Configuration error types
pub mod config;

pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    InvalidInput = 3000,
    /// A numeric value is outside its allowed range
    ValueOutOfRange = 3003,
    /// The meal catalog contains no meals
    EmptyCatalog = 3010,

    // Resource Management (4000-4999)
    /// Referenced resource does not exist
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// A collaborator (feedback oracle, store) failed
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    ConfigError = 6000,
    /// Configuration is present but invalid
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Persistence failed
    StorageError = 9002,
    /// Data serialization/deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::EmptyCatalog => "The meal catalog is empty",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external collaborator encountered an error",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this code represents a caller-side validation failure
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::ValueOutOfRange
                | Self::EmptyCatalog
        )
    }
}

/// Unified error type for the planner
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside of its permitted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Profile age below the supported minimum
    #[must_use]
    pub fn age_below_minimum(age: u32, minimum: u32) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("Meal planning is only available for users aged {minimum} and older (got {age})"),
        )
    }

    /// Catalog has no meals to plan from
    #[must_use]
    pub fn empty_catalog() -> Self {
        Self::new(
            ErrorCode::EmptyCatalog,
            "The meal catalog is empty; load meals before planning",
        )
    }

    /// A catalog record failed validation
    pub fn malformed_meal(meal_id: i64, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Meal {meal_id} is malformed: {}", reason.into()),
        )
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// External collaborator error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
            _ => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
