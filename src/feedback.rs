// ABOUTME: In-memory meal feedback ledger with rating validation and liked-meal queries
// ABOUTME: Serves as the planner's preference oracle and trains per-user preference models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback ledger
//!
//! Ratings are floats in `[1, 5]`. A rating of 2 or lower makes the meal a
//! hard exclusion for future plans; ratings of 4 and up show in the liked
//! list by default. Each record keeps a snapshot of the rated meal so the
//! preference model can be retrained without re-reading the catalog.

use crate::catalog::MealCatalog;
use crate::oracle::PreferenceOracle;
use dashmap::DashMap;
use nutriplan_core::constants::feedback::{DISLIKE_RATING_MAX, MAX_RATING, MIN_RATING};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{Meal, MealId};
use nutriplan_intelligence::PreferenceModelCache;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// A rating to record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackInput {
    /// Rating user
    pub user_id: Uuid,
    /// Rated meal
    pub meal_id: MealId,
    /// Plan the meal was served in, if known
    #[serde(default)]
    pub plan_id: Option<i64>,
    /// Rating from 1 to 5
    pub rating: f64,
    /// Free-text comment
    #[serde(default)]
    pub comment: Option<String>,
}

impl FeedbackInput {
    /// Rating without plan or comment
    #[must_use]
    pub const fn new(user_id: Uuid, meal_id: MealId, rating: f64) -> Self {
        Self {
            user_id,
            meal_id,
            plan_id: None,
            rating,
            comment: None,
        }
    }

    /// Attach a comment
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach the plan the meal came from
    #[must_use]
    pub const fn with_plan(mut self, plan_id: i64) -> Self {
        self.plan_id = Some(plan_id);
        self
    }
}

/// A stored rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Ledger id, increasing in submission order
    pub id: u64,
    /// Rating user
    pub user_id: Uuid,
    /// Rated meal
    pub meal_id: MealId,
    /// Plan the meal was served in
    pub plan_id: Option<i64>,
    /// Rating from 1 to 5
    pub rating: f64,
    /// Free-text comment
    pub comment: Option<String>,
}

/// One entry of the liked-meals list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedMeal {
    /// Catalog id
    pub id: MealId,
    /// Meal name at rating time
    pub title: String,
    /// Rating given
    pub rating: f64,
}

#[derive(Debug, Clone)]
struct StoredFeedback {
    record: FeedbackRecord,
    meal: Meal,
}

fn check_rating(rating: f64, what: &str) -> AppResult<()> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "{what} must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Thread-safe feedback ledger keyed by user
#[derive(Debug, Default)]
pub struct FeedbackStore {
    entries: DashMap<Uuid, Vec<StoredFeedback>>,
    next_id: AtomicU64,
    models: Arc<PreferenceModelCache>,
}

impl FeedbackStore {
    /// Empty ledger with its own model cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record a rating
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a rating outside `[1, 5]` and
    /// `ResourceNotFound` if the meal is not in `catalog`
    pub fn submit(&self, input: FeedbackInput, catalog: &impl MealCatalog) -> AppResult<FeedbackRecord> {
        check_rating(input.rating, "rating")?;
        let meal = catalog
            .find(input.meal_id)?
            .ok_or_else(|| AppError::not_found(format!("Meal {}", input.meal_id)))?;

        let record = FeedbackRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            user_id: input.user_id,
            meal_id: input.meal_id,
            plan_id: input.plan_id,
            rating: input.rating,
            comment: input.comment,
        };
        debug!(
            user_id = %record.user_id,
            meal_id = record.meal_id,
            rating = record.rating,
            "feedback recorded"
        );

        self.entries
            .entry(record.user_id)
            .or_default()
            .push(StoredFeedback {
                record: record.clone(),
                meal,
            });
        Ok(record)
    }

    /// Every rating the user has given, oldest first
    #[must_use]
    pub fn feedback_for(&self, user_id: Uuid) -> Vec<FeedbackRecord> {
        self.entries
            .get(&user_id)
            .map(|entries| entries.iter().map(|stored| stored.record.clone()).collect())
            .unwrap_or_default()
    }

    /// Meals rated at least `min_rating`, best rated and most recent first
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `min_rating` is outside `[1, 5]`
    pub fn liked_meals(&self, user_id: Uuid, min_rating: f64, limit: usize) -> AppResult<Vec<LikedMeal>> {
        check_rating(min_rating, "min_rating")?;

        let mut liked: Vec<(u64, LikedMeal)> = self
            .entries
            .get(&user_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|stored| stored.record.rating >= min_rating)
                    .map(|stored| {
                        (
                            stored.record.id,
                            LikedMeal {
                                id: stored.meal.id,
                                title: stored.meal.name.clone(),
                                rating: stored.record.rating,
                            },
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        liked.sort_by(|(a_id, a), (b_id, b)| {
            b.rating.total_cmp(&a.rating).then_with(|| b_id.cmp(a_id))
        });
        liked.truncate(limit);
        Ok(liked.into_iter().map(|(_, meal)| meal).collect())
    }

    /// Retrain the user's preference model on everything they rated
    ///
    /// Returns whether the model is fitted afterwards on this data.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the model lock is poisoned
    pub fn retrain(&self, user_id: Uuid) -> AppResult<bool> {
        let examples: Vec<(Meal, f64)> = self
            .entries
            .get(&user_id)
            .map(|entries| {
                entries
                    .iter()
                    .map(|stored| (stored.meal.clone(), stored.record.rating))
                    .collect()
            })
            .unwrap_or_default();

        self.models
            .train(user_id, examples.iter().map(|(meal, rating)| (meal, *rating)))
    }

    /// Words the user's model associates most with liked meals
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the model lock is poisoned
    pub fn top_features(&self, user_id: Uuid, n: usize) -> AppResult<Option<Vec<(String, f64)>>> {
        self.models.top_features(user_id, n)
    }

    /// Forget every rating and the trained model for a user
    pub fn clear_user(&self, user_id: Uuid) {
        let removed = self
            .entries
            .remove(&user_id)
            .map_or(0, |(_, entries)| entries.len());
        self.models.evict(user_id);
        info!(user_id = %user_id, removed, "cleared user feedback");
    }
}

impl PreferenceOracle for FeedbackStore {
    fn disliked_meal_ids(&self, user_id: Uuid) -> AppResult<HashSet<MealId>> {
        Ok(self
            .entries
            .get(&user_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|stored| stored.record.rating <= DISLIKE_RATING_MAX)
                    .map(|stored| stored.record.meal_id)
                    .collect()
            })
            .unwrap_or_default())
    }

    fn like_score(&self, user_id: Uuid, meal: &Meal) -> AppResult<f64> {
        self.models.predict(user_id, meal)
    }
}
