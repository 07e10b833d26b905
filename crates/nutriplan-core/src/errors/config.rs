// ABOUTME: Configuration error types for environment-driven planner settings
// ABOUTME: Defines error variants for invalid ranges, parse failures, and env access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., rating threshold not between 1-5)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access or parse error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
