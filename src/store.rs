// ABOUTME: Plan persistence seam and in-memory store of dated meal plan entries
// ABOUTME: Saves each filled slot of a weekly plan as one row, continuing after the last saved date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use dashmap::DashMap;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{MealId, MealSlot, WeeklyPlan};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;
use uuid::Uuid;

/// One saved meal on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Row id, increasing in save order
    pub id: u64,
    /// Plan owner
    pub user_id: Uuid,
    /// Catalog id (the main's id for paired dinners)
    pub meal_id: MealId,
    /// Date the meal is planned for
    pub plan_date: NaiveDate,
    /// Slot within the day
    pub slot: MealSlot,
}

/// Where generated plans are persisted
pub trait PlanStore {
    /// Persist `plan` as dated entries and return them
    ///
    /// Monday lands on the day after the user's latest saved entry, or on
    /// `today` when the user has none; later weekdays follow consecutively.
    /// Absent slots produce no entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    fn save(&self, plan: &WeeklyPlan, user_id: Uuid, today: NaiveDate) -> AppResult<Vec<PlanEntry>>;

    /// Latest `plan_date` saved for the user
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    fn last_plan_date(&self, user_id: Uuid) -> AppResult<Option<NaiveDate>>;

    /// Every entry saved for the user, in save order
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    fn entries_for(&self, user_id: Uuid) -> AppResult<Vec<PlanEntry>>;
}

fn date_after(date: NaiveDate, days: u64) -> AppResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| AppError::storage(format!("plan date overflow after {date}")))
}

/// Plan store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryPlanStore {
    entries: DashMap<Uuid, Vec<PlanEntry>>,
    next_id: AtomicU64,
}

impl InMemoryPlanStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanStore for InMemoryPlanStore {
    fn save(&self, plan: &WeeklyPlan, user_id: Uuid, today: NaiveDate) -> AppResult<Vec<PlanEntry>> {
        // holding the user's entry keeps the start date and the appends consistent
        let mut saved = self.entries.entry(user_id).or_default();

        let start = match saved.iter().map(|entry| entry.plan_date).max() {
            Some(last) => date_after(last, 1)?,
            None => today,
        };

        let mut created = Vec::new();
        for (offset, (_, day)) in (0_u64..).zip(plan.days()) {
            let plan_date = date_after(start, offset)?;
            for (slot, meal) in day.meals() {
                created.push(PlanEntry {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
                    user_id,
                    meal_id: meal.id,
                    plan_date,
                    slot,
                });
            }
        }
        saved.extend(created.iter().cloned());
        drop(saved);

        info!(
            user_id = %user_id,
            start_date = %start,
            entries = created.len(),
            "saved weekly plan"
        );
        Ok(created)
    }

    fn last_plan_date(&self, user_id: Uuid) -> AppResult<Option<NaiveDate>> {
        Ok(self
            .entries
            .get(&user_id)
            .and_then(|entries| entries.iter().map(|entry| entry.plan_date).max()))
    }

    fn entries_for(&self, user_id: Uuid) -> AppResult<Vec<PlanEntry>> {
        Ok(self
            .entries
            .get(&user_id)
            .map(|entries| entries.value().clone())
            .unwrap_or_default())
    }
}

impl<T: PlanStore + ?Sized> PlanStore for &T {
    fn save(&self, plan: &WeeklyPlan, user_id: Uuid, today: NaiveDate) -> AppResult<Vec<PlanEntry>> {
        (**self).save(plan, user_id, today)
    }

    fn last_plan_date(&self, user_id: Uuid) -> AppResult<Option<NaiveDate>> {
        (**self).last_plan_date(user_id)
    }

    fn entries_for(&self, user_id: Uuid) -> AppResult<Vec<PlanEntry>> {
        (**self).entries_for(user_id)
    }
}
