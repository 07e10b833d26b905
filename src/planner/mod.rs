// ABOUTME: Meal planning engine bound to one user, profile, and set of daily targets
// ABOUTME: Checks preconditions, queries rated dislikes, and computes targets once per run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning engine
//!
//! A [`MealPlanner`] is built once per run. Construction checks the age
//! precondition, queries the preference oracle for the user's rated dislikes
//! and draws the daily targets. Those values stay fixed while
//! [`MealPlanner::generate_weekly_plan`] fills seven days.
//!
//! The planner holds no per-run mutable state, so one instance can plan
//! several weeks; each call owns its own de-duplication set and totals.

/// Single-day slot state machine
pub mod day;
/// Seven-day orchestration
pub mod week;

use crate::oracle::PreferenceOracle;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{DailyTargets, MealId, UserProfile};
use nutriplan_intelligence::{calculate_daily_targets, CandidateFilter, SlotBudgets};
use rand::Rng;
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

/// Weekly meal planner for one user
#[derive(Debug, Clone)]
pub struct MealPlanner {
    user_id: Uuid,
    profile: UserProfile,
    disliked_meal_ids: HashSet<MealId>,
    targets: DailyTargets,
}

impl MealPlanner {
    /// Build the engine for `user_id` with targets drawn from the profile
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for users under 13, `InvalidInput` for a
    /// non-positive weight or height, and `ExternalServiceError` if the
    /// oracle cannot supply the user's dislikes.
    pub fn new<O, R>(user_id: Uuid, profile: UserProfile, oracle: &O, rng: &mut R) -> AppResult<Self>
    where
        O: PreferenceOracle + ?Sized,
        R: Rng + ?Sized,
    {
        profile.validate()?;
        let targets = calculate_daily_targets(profile.sex, profile.goal, rng);
        Self::with_targets(user_id, profile, oracle, targets)
    }

    /// Build the engine for `user_id` against known daily targets
    ///
    /// # Errors
    ///
    /// Same preconditions as [`MealPlanner::new`].
    pub fn with_targets<O>(
        user_id: Uuid,
        profile: UserProfile,
        oracle: &O,
        targets: DailyTargets,
    ) -> AppResult<Self>
    where
        O: PreferenceOracle + ?Sized,
    {
        profile.validate()?;

        let disliked_meal_ids = oracle.disliked_meal_ids(user_id).map_err(|e| {
            AppError::external_service("preference oracle", format!("dislike lookup failed: {}", e.message))
                .with_source(e)
        })?;

        info!(
            user_id = %user_id,
            sex = %profile.sex,
            goal = %profile.goal,
            calories = targets.calories,
            protein = targets.protein,
            fat = targets.fat,
            carbs = targets.carbs,
            disliked = disliked_meal_ids.len(),
            "meal planner initialized"
        );

        Ok(Self {
            user_id,
            profile,
            disliked_meal_ids,
            targets,
        })
    }

    /// User this planner plans for
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Profile used for filtering and scoring
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Daily targets shared by every day of the week
    #[must_use]
    pub const fn targets(&self) -> &DailyTargets {
        &self.targets
    }

    /// Meal ids excluded because the user rated them 2 or lower
    #[must_use]
    pub const fn disliked_meal_ids(&self) -> &HashSet<MealId> {
        &self.disliked_meal_ids
    }

    /// Per-slot calorie budgets derived from the targets
    #[must_use]
    pub fn slot_budgets(&self) -> SlotBudgets {
        SlotBudgets::from_targets(&self.targets)
    }

    fn candidate_filter(&self) -> CandidateFilter<'_> {
        CandidateFilter::new(&self.profile, &self.disliked_meal_ids)
    }
}
