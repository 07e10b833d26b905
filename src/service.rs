// ABOUTME: Plan service wiring catalog, feedback ledger, planner, and plan store together
// ABOUTME: Creates and saves weekly plans and runs the feedback before/after demonstration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan service
//!
//! One full planning cycle is: retrain the user's preference model, build a
//! [`MealPlanner`] (age check, dislike lookup, targets), load the catalog,
//! plan the week and persist it.

use crate::catalog::MealCatalog;
use crate::config::PlannerConfig;
use crate::feedback::{FeedbackInput, FeedbackRecord, FeedbackStore, LikedMeal};
use crate::planner::MealPlanner;
use crate::store::{PlanEntry, PlanStore};
use chrono::NaiveDate;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{DailyTargets, Meal, MealId, UserProfile, WeeklyPlan};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Meals rated per keyword in the demonstration
pub const DEMO_MEALS_PER_KEYWORD: usize = 5;
/// Rating given to meals matching the like keyword
pub const DEMO_LIKE_RATING: f64 = 5.0;
/// Rating given to meals matching the dislike keyword
pub const DEMO_DISLIKE_RATING: f64 = 1.0;

/// A generated plan together with what was persisted for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    /// Targets the plan was built against
    pub targets: DailyTargets,
    /// The week
    pub plan: WeeklyPlan,
    /// Rows written to the plan store
    pub entries: Vec<PlanEntry>,
}

/// Result of the feedback before/after demonstration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoPlans {
    /// Plan generated with no feedback
    pub before_plan: WeeklyPlan,
    /// Plan generated after the demo ratings
    pub after_plan: WeeklyPlan,
    /// Meals rated 5
    pub liked_meal_ids: Vec<MealId>,
    /// Meals rated 1
    pub disliked_meal_ids: Vec<MealId>,
}

/// Orchestrates planning runs over a catalog, feedback ledger and plan store
#[derive(Debug)]
pub struct PlanService<C, S> {
    catalog: C,
    feedback: Arc<FeedbackStore>,
    store: S,
    config: PlannerConfig,
}

impl<C: MealCatalog, S: PlanStore> PlanService<C, S> {
    /// Wire a service from its collaborators
    pub fn new(catalog: C, feedback: Arc<FeedbackStore>, store: S, config: PlannerConfig) -> Self {
        Self {
            catalog,
            feedback,
            store,
            config,
        }
    }

    /// Feedback ledger
    #[must_use]
    pub const fn feedback(&self) -> &Arc<FeedbackStore> {
        &self.feedback
    }

    /// Plan store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Catalog
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Record a rating for a catalog meal
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a bad rating and `ResourceNotFound`
    /// for an unknown meal
    pub fn submit_feedback(&self, input: FeedbackInput) -> AppResult<FeedbackRecord> {
        self.feedback.submit(input, &self.catalog)
    }

    /// Liked meals using the configured threshold and limit
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the configured threshold is invalid
    pub fn liked_meals(&self, user_id: Uuid) -> AppResult<Vec<LikedMeal>> {
        self.feedback
            .liked_meals(user_id, self.config.like_threshold, self.config.liked_limit)
    }

    /// Run a full planning cycle and persist the result
    ///
    /// # Errors
    ///
    /// Propagates precondition, catalog, oracle and storage failures; no
    /// plan is saved when any step fails.
    pub fn create_and_save_weekly_plan<R: Rng + ?Sized>(
        &self,
        user_id: Uuid,
        profile: UserProfile,
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<SavedPlan> {
        self.feedback.retrain(user_id)?;

        let planner = MealPlanner::new(user_id, profile, self.feedback.as_ref(), rng)?;
        let meals = self.catalog.all_meals()?;
        let plan = planner.generate_weekly_plan(&meals, rng)?;
        let entries = self.store.save(&plan, user_id, today)?;

        Ok(SavedPlan {
            targets: *planner.targets(),
            plan,
            entries,
        })
    }

    /// Plan, rate meals by keyword, then plan again
    ///
    /// Clears the user's feedback first. Up to five meals whose name
    /// contains `like_keyword` are rated 5 and up to five containing
    /// `dislike_keyword` are rated 1 (case-insensitive).
    ///
    /// # Errors
    ///
    /// Propagates any failure from either planning cycle or from recording
    /// the ratings
    pub fn demo_before_after<R: Rng + ?Sized>(
        &self,
        user_id: Uuid,
        profile: &UserProfile,
        like_keyword: &str,
        dislike_keyword: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<DemoPlans> {
        self.feedback.clear_user(user_id);

        let before = self.create_and_save_weekly_plan(user_id, profile.clone(), today, rng)?;

        let meals = self.catalog.all_meals()?;
        let liked_meal_ids = meals_matching(&meals, like_keyword);
        let disliked_meal_ids = meals_matching(&meals, dislike_keyword);
        for &meal_id in &liked_meal_ids {
            self.submit_feedback(FeedbackInput::new(user_id, meal_id, DEMO_LIKE_RATING))?;
        }
        for &meal_id in &disliked_meal_ids {
            self.submit_feedback(FeedbackInput::new(user_id, meal_id, DEMO_DISLIKE_RATING))?;
        }
        info!(
            user_id = %user_id,
            liked = liked_meal_ids.len(),
            disliked = disliked_meal_ids.len(),
            "recorded demo feedback"
        );

        let after = self.create_and_save_weekly_plan(user_id, profile.clone(), today, rng)?;

        Ok(DemoPlans {
            before_plan: before.plan,
            after_plan: after.plan,
            liked_meal_ids,
            disliked_meal_ids,
        })
    }
}

fn meals_matching(meals: &[Meal], keyword: &str) -> Vec<MealId> {
    let needle = keyword.to_lowercase();
    meals
        .iter()
        .filter(|meal| meal.name.to_lowercase().contains(&needle))
        .take(DEMO_MEALS_PER_KEYWORD)
        .map(|meal| meal.id)
        .collect()
}
