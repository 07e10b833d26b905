// ABOUTME: Macro-suitability scoring of filtered candidates
// ABOUTME: Wraps each meal in a ScoredCandidate instead of mutating catalog records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suitability Scorer
//!
//! Every candidate starts at weight 1.0. Only the `cut_muscle_gain` goal
//! adjusts weights, using per-kcal macro densities:
//!
//! - protein density > 0.15 g/kcal: +0.5
//! - fat density > 0.05 g/kcal: -0.3
//! - carb density > 0.20 g/kcal: -0.2
//!
//! Other goals keep exactly 1.0; goal intent beyond cutting is undefined, so
//! the asymmetry is kept as is. Weights are not clamped here; the selector
//! floors them before sampling.

use crate::context::SlotContext;
use nutriplan_core::constants::planning::BASE_SUITABILITY_WEIGHT;
use nutriplan_core::constants::scoring::{
    CUT_CARBS_DENSITY_THRESHOLD, CUT_CARBS_PENALTY, CUT_FAT_DENSITY_THRESHOLD, CUT_FAT_PENALTY,
    CUT_PROTEIN_BONUS, CUT_PROTEIN_DENSITY_THRESHOLD,
};
use nutriplan_core::models::{Goal, Meal};

/// A candidate meal paired with its sampling weight for one selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'m> {
    /// Catalog meal
    pub meal: &'m Meal,
    /// Suitability weight (may be zero or negative before clamping)
    pub weight: f64,
}

impl<'m> ScoredCandidate<'m> {
    /// Candidate with an explicit weight
    #[must_use]
    pub const fn new(meal: &'m Meal, weight: f64) -> Self {
        Self { meal, weight }
    }
}

/// Suitability weight of one meal for `goal`
#[must_use]
pub fn macro_suitability(goal: Goal, meal: &Meal) -> f64 {
    let mut weight = BASE_SUITABILITY_WEIGHT;

    if goal == Goal::CutMuscleGain {
        if meal.density(meal.protein) > CUT_PROTEIN_DENSITY_THRESHOLD {
            weight += CUT_PROTEIN_BONUS;
        }
        if meal.density(meal.fat) > CUT_FAT_DENSITY_THRESHOLD {
            weight -= CUT_FAT_PENALTY;
        }
        if meal.density(meal.carbs) > CUT_CARBS_DENSITY_THRESHOLD {
            weight -= CUT_CARBS_PENALTY;
        }
    }

    weight
}

/// Score every surviving candidate for the slot described by `context`
#[must_use]
pub fn score_candidates<'m>(
    goal: Goal,
    candidates: &[&'m Meal],
    context: &SlotContext,
) -> Vec<ScoredCandidate<'m>> {
    tracing::trace!(
        goal = %goal,
        candidates = candidates.len(),
        slot_budget = context.slot_calorie_budget,
        day_calories = context.day_totals.calories,
        "scoring candidates"
    );

    candidates
        .iter()
        .map(|&meal| ScoredCandidate::new(meal, macro_suitability(goal, meal)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::SlotType;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_non_cut_goals_score_neutral() {
        let meal = Meal::new(1, "Burger", SlotType::Lunch, 800.0, 40.0, 45.0, 60.0);
        for goal in [Goal::Maintain, Goal::Bulk, Goal::Other] {
            assert!(approx(macro_suitability(goal, &meal), 1.0));
        }
    }

    #[test]
    fn test_cut_rewards_protein_density() {
        // protein 0.2 g/kcal, fat 0.02, carbs 0.1
        let lean = Meal::new(1, "Egg Whites", SlotType::Breakfast, 100.0, 20.0, 2.0, 10.0);
        assert!(approx(macro_suitability(Goal::CutMuscleGain, &lean), 1.5));
    }

    #[test]
    fn test_cut_penalizes_fat_and_carbs() {
        // protein 0.01, fat 0.06, carbs 0.25
        let dense = Meal::new(2, "Donut", SlotType::Dessert, 100.0, 1.0, 6.0, 25.0);
        assert!(approx(macro_suitability(Goal::CutMuscleGain, &dense), 0.5));

        // all three thresholds crossed
        let mixed = Meal::new(3, "Protein Bar", SlotType::Side, 100.0, 16.0, 6.0, 21.0);
        assert!(approx(macro_suitability(Goal::CutMuscleGain, &mixed), 1.0));
    }

    #[test]
    fn test_zero_calorie_meal_has_zero_density() {
        let water = Meal::new(4, "Sparkling Water", SlotType::Side, 0.0, 0.0, 0.0, 0.0);
        assert!(approx(macro_suitability(Goal::CutMuscleGain, &water), 1.0));
    }

    #[test]
    fn test_score_candidates_wraps_without_mutation() {
        let meals = vec![
            Meal::new(1, "Chicken", SlotType::Dinner, 300.0, 60.0, 5.0, 0.0),
            Meal::new(2, "Pasta", SlotType::Dinner, 600.0, 20.0, 10.0, 150.0),
        ];
        let refs: Vec<&Meal> = meals.iter().collect();
        let context = SlotContext::any_slot();

        let scored = score_candidates(Goal::CutMuscleGain, &refs, &context);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].meal.id, 1);
        assert!(approx(scored[0].weight, 1.5));
        assert!(approx(scored[1].weight, 0.8));
    }
}
