// ABOUTME: Daily calorie/macro target lookup and per-slot calorie budgets
// ABOUTME: Maps (sex, goal) to a calorie base and macro split, then splits calories across slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target Calculator
//!
//! Targets come from a fixed lookup keyed by `(sex, goal)`. Each row either
//! fixes the calorie base or draws it uniformly from an inclusive integer
//! range, then derives macro grams as `calories * share / kcal_per_gram`.
//! Rows for unknown goals (and for any non-binary sex) use fixed gram targets.
//!
//! | sex    | goal              | calories      | P / F / C        |
//! |--------|-------------------|---------------|------------------|
//! | male   | maintain          | 2000..=3000   | 25% / 30% / 45%  |
//! | male   | bulk              | 4000          | 25% / 35% / 40%  |
//! | male   | `cut_muscle_gain` | 2200..=2500   | 40% / 20% / 40%  |
//! | male   | other             | 2500          | 150g / 70g / 200g|
//! | female | maintain          | 1500..=2000   | 25% / 30% / 45%  |
//! | female | bulk              | 2500          | 25% / 35% / 40%  |
//! | female | `cut_muscle_gain` | 1700..=2000   | 35% / 20% / 45%  |
//! | female | other             | 1800          | 100g / 60g / 180g|
//! | other  | any               | 2000          | 120g / 60g / 180g|

use nutriplan_core::constants::energy::{
    CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use nutriplan_core::constants::planning::{
    BREAKFAST_BUDGET_FRACTION, DINNER_BUDGET_FRACTION, LUNCH_BUDGET_FRACTION,
};
use nutriplan_core::models::{round2, DailyTargets, Goal, Sex};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a target row chooses its calorie base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieBase {
    /// Always this many kcal
    Fixed(u32),
    /// Uniform integer draw from the inclusive range
    Range(u32, u32),
}

impl CalorieBase {
    fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        match self {
            Self::Fixed(calories) => calories,
            Self::Range(low, high) => rng.gen_range(low..=high),
        }
    }
}

/// How a target row derives macro grams
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MacroRule {
    /// Calorie shares (fractions of 1.0) converted with kcal/g densities
    Split {
        /// Protein share
        protein: f64,
        /// Fat share
        fat: f64,
        /// Carbohydrate share
        carbs: f64,
    },
    /// Fixed gram targets independent of calories
    Grams {
        /// Protein (g)
        protein: f64,
        /// Fat (g)
        fat: f64,
        /// Carbohydrates (g)
        carbs: f64,
    },
}

/// One row of the target table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRule {
    /// Calorie base for the row
    pub calories: CalorieBase,
    /// Macro derivation for the row
    pub macros: MacroRule,
}

fn split(protein: f64, fat: f64, carbs: f64) -> MacroRule {
    MacroRule::Split {
        protein,
        fat,
        carbs,
    }
}

fn grams(protein: f64, fat: f64, carbs: f64) -> MacroRule {
    MacroRule::Grams {
        protein,
        fat,
        carbs,
    }
}

/// Look up the target row for a profile
#[must_use]
pub fn target_rule(sex: Sex, goal: Goal) -> TargetRule {
    let (calories, macros) = match (sex, goal) {
        (Sex::Male, Goal::Maintain) => (CalorieBase::Range(2000, 3000), split(0.25, 0.30, 0.45)),
        (Sex::Male, Goal::Bulk) => (CalorieBase::Fixed(4000), split(0.25, 0.35, 0.40)),
        (Sex::Male, Goal::CutMuscleGain) => {
            (CalorieBase::Range(2200, 2500), split(0.40, 0.20, 0.40))
        }
        (Sex::Male, Goal::Other) => (CalorieBase::Fixed(2500), grams(150.0, 70.0, 200.0)),
        (Sex::Female, Goal::Maintain) => {
            (CalorieBase::Range(1500, 2000), split(0.25, 0.30, 0.45))
        }
        (Sex::Female, Goal::Bulk) => (CalorieBase::Fixed(2500), split(0.25, 0.35, 0.40)),
        (Sex::Female, Goal::CutMuscleGain) => {
            (CalorieBase::Range(1700, 2000), split(0.35, 0.20, 0.45))
        }
        (Sex::Female, Goal::Other) => (CalorieBase::Fixed(1800), grams(100.0, 60.0, 180.0)),
        (Sex::Other, _) => (CalorieBase::Fixed(2000), grams(120.0, 60.0, 180.0)),
    };
    TargetRule { calories, macros }
}

/// Compute daily targets for a profile
///
/// Randomized rows draw from `rng`; pass a seeded generator for reproducible
/// targets. Gram values are floored at zero and rounded to two decimals.
pub fn calculate_daily_targets<R: Rng + ?Sized>(sex: Sex, goal: Goal, rng: &mut R) -> DailyTargets {
    let rule = target_rule(sex, goal);
    let calories = f64::from(rule.calories.resolve(rng));

    let (protein, fat, carbs) = match rule.macros {
        MacroRule::Split {
            protein,
            fat,
            carbs,
        } => (
            calories * protein / PROTEIN_KCAL_PER_GRAM,
            calories * fat / FAT_KCAL_PER_GRAM,
            calories * carbs / CARBS_KCAL_PER_GRAM,
        ),
        MacroRule::Grams {
            protein,
            fat,
            carbs,
        } => (protein, fat, carbs),
    };

    DailyTargets {
        calories,
        protein: round2(protein.max(0.0)),
        fat: round2(fat.max(0.0)),
        carbs: round2(carbs.max(0.0)),
    }
}

/// Calorie budget for each slot of a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotBudgets {
    /// Breakfast budget (20%)
    pub breakfast: f64,
    /// Lunch budget (35%)
    pub lunch: f64,
    /// Dinner main + side budget (45%)
    pub dinner: f64,
}

impl SlotBudgets {
    /// Split the daily calorie target across slots
    #[must_use]
    pub fn from_targets(targets: &DailyTargets) -> Self {
        Self {
            breakfast: targets.calories * BREAKFAST_BUDGET_FRACTION,
            lunch: targets.calories * LUNCH_BUDGET_FRACTION,
            dinner: targets.calories * DINNER_BUDGET_FRACTION,
        }
    }

    /// Budget left for a side after the dinner main, never negative
    #[must_use]
    pub fn side_budget(&self, main_calories: f64) -> f64 {
        (self.dinner - main_calories).max(0.0)
    }
}
