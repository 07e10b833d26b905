// ABOUTME: User profile consumed by a planning run
// ABOUTME: Defines Sex, Goal, ActivityLevel, and UserProfile with its age precondition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::planning::MIN_USER_AGE;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Biological sex used for target lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male targets
    Male,
    /// Female targets
    Female,
    /// Any other value; uses the generic target row
    #[serde(other)]
    Other,
}

impl FromStr for Sex {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        })
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        })
    }
}

/// Fitness goal driving calorie targets and suitability scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Hold current body weight
    Maintain,
    /// Caloric surplus
    Bulk,
    /// Moderate deficit with high protein
    CutMuscleGain,
    /// Unrecognized goal; uses the fixed fallback targets
    #[serde(other)]
    Other,
}

impl FromStr for Goal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "maintain" => Self::Maintain,
            "bulk" => Self::Bulk,
            "cut_muscle_gain" => Self::CutMuscleGain,
            _ => Self::Other,
        })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Maintain => "maintain",
            Self::Bulk => "bulk",
            Self::CutMuscleGain => "cut_muscle_gain",
            Self::Other => "other",
        })
    }
}

/// Activity level recorded on the profile
///
/// Carried for completeness; the current target table does not consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    #[default]
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" => Ok(Self::LightlyActive),
            "moderately_active" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extra_active" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level '{other}'"
            ))),
        }
    }
}

/// Fully resolved profile for one planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years; must be at least 13
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Fitness goal
    pub goal: Goal,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Tags every selected meal must carry (e.g. `vegan`)
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Tags no selected meal may carry
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Categories the user refuses (e.g. `seafood`)
    #[serde(default)]
    pub disliked_categories: Vec<String>,
}

impl UserProfile {
    /// Create a profile with no tag constraints
    #[must_use]
    pub const fn new(age: u32, sex: Sex, goal: Goal, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            age,
            sex,
            goal,
            weight_kg,
            height_cm,
            activity_level: ActivityLevel::ModeratelyActive,
            dietary_preferences: Vec::new(),
            allergies: Vec::new(),
            disliked_categories: Vec::new(),
        }
    }

    /// Set the activity level
    #[must_use]
    pub const fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set required dietary-preference tags
    #[must_use]
    pub fn with_dietary_preferences<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_preferences = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set forbidden allergy tags
    #[must_use]
    pub fn with_allergies<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set disliked category tags
    #[must_use]
    pub fn with_disliked_categories<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disliked_categories = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check the planning preconditions
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the age is below 13, and `InvalidInput`
    /// when weight or height is not a positive number.
    pub fn validate(&self) -> AppResult<()> {
        if self.age < MIN_USER_AGE {
            return Err(AppError::age_below_minimum(self.age, MIN_USER_AGE));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(AppError::invalid_input("Weight must be positive"));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(AppError::invalid_input("Height must be positive"));
        }
        Ok(())
    }
}
