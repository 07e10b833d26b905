// ABOUTME: Environment-driven planner configuration (catalog path, seed, liked-meal query defaults)
// ABOUTME: Parses NUTRIPLAN_* variables and validates ranges with ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration
//!
//! | variable                   | default | meaning                                   |
//! |----------------------------|---------|-------------------------------------------|
//! | `NUTRIPLAN_CATALOG_PATH`   | unset   | JSON meal catalog to load                 |
//! | `NUTRIPLAN_SEED`           | unset   | RNG seed for reproducible plans           |
//! | `NUTRIPLAN_LIKE_THRESHOLD` | 4.0     | minimum rating listed as a liked meal     |
//! | `NUTRIPLAN_LIKED_LIMIT`    | 20      | maximum liked meals returned              |
//!
//! Slot budget fractions and the sampling epsilon are fixed constants and
//! are deliberately not configurable here.

use nutriplan_core::constants::feedback::{
    DEFAULT_LIKED_LIMIT, DEFAULT_LIKED_MIN_RATING, MAX_RATING, MIN_RATING,
};
use nutriplan_core::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Catalog file location
pub const CATALOG_PATH_ENV: &str = "NUTRIPLAN_CATALOG_PATH";
/// RNG seed
pub const SEED_ENV: &str = "NUTRIPLAN_SEED";
/// Liked-meal rating threshold
pub const LIKE_THRESHOLD_ENV: &str = "NUTRIPLAN_LIKE_THRESHOLD";
/// Liked-meal result limit
pub const LIKED_LIMIT_ENV: &str = "NUTRIPLAN_LIKED_LIMIT";

/// Planner settings resolved from the environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// JSON catalog file, if configured
    pub catalog_path: Option<PathBuf>,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Minimum rating for a meal to count as liked
    pub like_threshold: f64,
    /// Maximum number of liked meals to report
    pub liked_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            seed: None,
            like_threshold: DEFAULT_LIKED_MIN_RATING,
            liked_limit: DEFAULT_LIKED_LIMIT,
        }
    }
}

impl PlannerConfig {
    /// Load and validate configuration from `NUTRIPLAN_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for unparsable values, `InvalidRange`
    /// for a like threshold outside 1..=5 and `ValueOutOfRange` for a zero
    /// liked-meal limit.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            catalog_path: optional_var(CATALOG_PATH_ENV)?.map(PathBuf::from),
            seed: parse_optional(SEED_ENV)?,
            like_threshold: parse_optional(LIKE_THRESHOLD_ENV)?
                .unwrap_or(defaults.like_threshold),
            liked_limit: parse_optional(LIKED_LIMIT_ENV)?.unwrap_or(defaults.liked_limit),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` or `ValueOutOfRange` for bad values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.like_threshold) {
            return Err(ConfigError::InvalidRange(
                "like_threshold must be between 1 and 5",
            ));
        }
        if self.liked_limit == 0 {
            return Err(ConfigError::ValueOutOfRange("liked_limit must be at least 1"));
        }
        Ok(())
    }
}

fn optional_var(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

fn parse_optional<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    optional_var(key)?
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}")))
        })
        .transpose()
}
