// ABOUTME: Single-day planning as a state machine over breakfast, lunch, dinner main, and dinner side
// ABOUTME: Runs filter, score, and select per slot while accumulating running day totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MealPlanner;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{DailyPlan, DayTotals, Meal, PlannedMeal, SlotType};
use nutriplan_intelligence::{pair_dinner, score_candidates, select_meal, SlotContext, UsedTitles};
use rand::Rng;
use tracing::{debug, info};

/// Slots in planning order; the side state carries the chosen main
#[derive(Debug)]
enum SlotState {
    Breakfast,
    Lunch,
    DinnerMain,
    DinnerSide(PlannedMeal),
    Done,
}

impl MealPlanner {
    /// Plan one day against the shared week-level `used` titles
    ///
    /// Slots with no eligible candidate stay `None`. Dinner tries a main
    /// against the full dinner budget, then a side against what the main
    /// left over; a found side is merged into a composite dinner.
    ///
    /// # Errors
    ///
    /// Returns an error only if weighted sampling fails
    pub fn plan_day<R: Rng + ?Sized>(
        &self,
        catalog: &[Meal],
        used: &mut UsedTitles,
        rng: &mut R,
    ) -> AppResult<DailyPlan> {
        let budgets = self.slot_budgets();
        let mut plan = DailyPlan::default();
        let mut totals = DayTotals::default();
        let mut state = SlotState::Breakfast;

        loop {
            state = match state {
                SlotState::Breakfast => {
                    plan.breakfast = self.fill_slot(
                        SlotType::Breakfast,
                        budgets.breakfast,
                        catalog,
                        &mut totals,
                        used,
                        rng,
                    )?;
                    SlotState::Lunch
                }
                SlotState::Lunch => {
                    plan.lunch = self.fill_slot(
                        SlotType::Lunch,
                        budgets.lunch,
                        catalog,
                        &mut totals,
                        used,
                        rng,
                    )?;
                    SlotState::DinnerMain
                }
                SlotState::DinnerMain => self
                    .fill_slot(SlotType::Dinner, budgets.dinner, catalog, &mut totals, used, rng)?
                    .map_or(SlotState::Done, SlotState::DinnerSide),
                SlotState::DinnerSide(main) => {
                    let side_budget = budgets.side_budget(main.calories);
                    let side =
                        self.fill_slot(SlotType::Side, side_budget, catalog, &mut totals, used, rng)?;
                    plan.dinner = Some(match side {
                        Some(side) => {
                            debug!(main = %main.title, side = %side.title, "paired side with dinner");
                            pair_dinner(&main, side)
                        }
                        None => main,
                    });
                    SlotState::Done
                }
                SlotState::Done => break,
            };
        }

        info!(
            calories = totals.calories,
            target_calories = self.targets.calories,
            protein = totals.macros.protein,
            fat = totals.macros.fat,
            carbs = totals.macros.carbs,
            "day planned"
        );
        Ok(plan)
    }

    /// Filter, score and select one slot, folding the pick into `totals`
    fn fill_slot<R: Rng + ?Sized>(
        &self,
        slot: SlotType,
        budget: f64,
        catalog: &[Meal],
        totals: &mut DayTotals,
        used: &mut UsedTitles,
        rng: &mut R,
    ) -> AppResult<Option<PlannedMeal>> {
        let context = SlotContext::new(slot, *totals, budget);
        let candidates = self.candidate_filter().apply(catalog, &context);
        let scored = score_candidates(self.profile.goal, &candidates, &context);

        let selected = select_meal(&scored, used, rng)?;
        match &selected {
            Some(meal) => {
                used.insert(meal.title.clone());
                totals.add_meal(meal);
                debug!(slot = %slot, meal_id = meal.id, title = %meal.title, budget, "slot filled");
            }
            None => info!(slot = %slot, "no suitable meal found"),
        }
        Ok(selected)
    }
}
