// ABOUTME: Seven-day orchestration sharing targets and week-level title de-duplication
// ABOUTME: Validates the catalog up front and plans Monday through Sunday in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MealPlanner;
use crate::catalog::validate_catalog;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{Meal, WeeklyPlan};
use nutriplan_intelligence::UsedTitles;
use rand::Rng;
use tracing::{info, info_span};

impl MealPlanner {
    /// Plan a full week from `catalog`
    ///
    /// Every day shares the same targets; running totals reset per day
    /// while the used-title set grows across the whole week.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCatalog` for an empty catalog and `InvalidInput` for a
    /// malformed meal, both before any day is planned.
    pub fn generate_weekly_plan<R: Rng + ?Sized>(
        &self,
        catalog: &[Meal],
        rng: &mut R,
    ) -> AppResult<WeeklyPlan> {
        validate_catalog(catalog)?;
        info!(
            user_id = %self.user_id,
            meals = catalog.len(),
            target_calories = self.targets.calories,
            "generating weekly plan"
        );

        let mut used = UsedTitles::new();
        let mut plan = WeeklyPlan::default();
        for day in WeeklyPlan::DAYS {
            let _span = info_span!("plan_day", day = %day).entered();
            *plan.day_mut(day) = self.plan_day(catalog, &mut used, rng)?;
        }

        info!(
            user_id = %self.user_id,
            meals_planned = plan.meals().count(),
            distinct_titles = used.len(),
            "weekly plan generated"
        );
        Ok(plan)
    }
}
