// ABOUTME: Domain models for catalog meals, user profiles, and generated plans
// ABOUTME: Re-exports meal, profile, and plan types for convenient imports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Catalog meals and slot classification
pub mod meal;
/// Weekly plan output and nutrient totals
pub mod plan;
/// User profile for a planning run
pub mod profile;

pub use meal::{Meal, MealId, SlotType};
pub use plan::{
    round2, DailyPlan, DailyTargets, DayTotals, MacroTotals, MealSlot, PlannedMeal, WeeklyPlan,
};
pub use profile::{ActivityLevel, Goal, Sex, UserProfile};
