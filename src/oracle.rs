// ABOUTME: Preference oracle seam queried by the planner for a user's rated dislikes
// ABOUTME: Synchronous trait so the engine stays free of any storage or model concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::constants::feedback::NEUTRAL_LIKE_SCORE;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{Meal, MealId};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Source of per-user feedback signals for planning
///
/// Implementations surface their own failures as errors; the planner never
/// substitutes an empty dislike set for a failed lookup.
pub trait PreferenceOracle {
    /// Meal ids the user rated 2 or lower
    ///
    /// # Errors
    ///
    /// Returns an error if the feedback source cannot be queried
    fn disliked_meal_ids(&self, user_id: Uuid) -> AppResult<HashSet<MealId>>;

    /// Probability in `[0, 1]` that the user likes `meal`
    ///
    /// Not consumed by the suitability scorer yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference model cannot be queried
    fn like_score(&self, user_id: Uuid, meal: &Meal) -> AppResult<f64> {
        let _ = (user_id, meal);
        Ok(NEUTRAL_LIKE_SCORE)
    }
}

impl<T: PreferenceOracle + ?Sized> PreferenceOracle for &T {
    fn disliked_meal_ids(&self, user_id: Uuid) -> AppResult<HashSet<MealId>> {
        (**self).disliked_meal_ids(user_id)
    }

    fn like_score(&self, user_id: Uuid, meal: &Meal) -> AppResult<f64> {
        (**self).like_score(user_id, meal)
    }
}

impl<T: PreferenceOracle + ?Sized> PreferenceOracle for Arc<T> {
    fn disliked_meal_ids(&self, user_id: Uuid) -> AppResult<HashSet<MealId>> {
        (**self).disliked_meal_ids(user_id)
    }

    fn like_score(&self, user_id: Uuid, meal: &Meal) -> AppResult<f64> {
        (**self).like_score(user_id, meal)
    }
}
