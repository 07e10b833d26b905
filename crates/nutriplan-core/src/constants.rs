// ABOUTME: Nutrition and planning constants shared by the planner crates
// ABOUTME: Energy densities, slot budget fractions, selection epsilon, and rating thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of macronutrients
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
}

/// Slot calorie budgets and selection parameters
pub mod planning {
    /// Minimum supported user age
    pub const MIN_USER_AGE: u32 = 13;

    /// Breakfast share of daily calories
    pub const BREAKFAST_BUDGET_FRACTION: f64 = 0.20;
    /// Lunch share of daily calories
    pub const LUNCH_BUDGET_FRACTION: f64 = 0.35;
    /// Dinner (main + side) share of daily calories
    pub const DINNER_BUDGET_FRACTION: f64 = 0.45;

    /// Floor applied to suitability weights before sampling
    pub const SELECTION_WEIGHT_EPSILON: f64 = 0.001;

    /// Neutral suitability weight every candidate starts from
    pub const BASE_SUITABILITY_WEIGHT: f64 = 1.0;
}

/// Macro-density thresholds used by the `cut_muscle_gain` scorer
pub mod scoring {
    /// Protein grams per kcal above which a candidate is rewarded
    pub const CUT_PROTEIN_DENSITY_THRESHOLD: f64 = 0.15;
    /// Weight bonus for protein-dense candidates
    pub const CUT_PROTEIN_BONUS: f64 = 0.5;
    /// Fat grams per kcal above which a candidate is penalized
    pub const CUT_FAT_DENSITY_THRESHOLD: f64 = 0.05;
    /// Weight penalty for fat-dense candidates
    pub const CUT_FAT_PENALTY: f64 = 0.3;
    /// Carb grams per kcal above which a candidate is penalized
    pub const CUT_CARBS_DENSITY_THRESHOLD: f64 = 0.20;
    /// Weight penalty for carb-dense candidates
    pub const CUT_CARBS_PENALTY: f64 = 0.2;
}

/// Feedback rating thresholds (ratings are on a 1-5 scale)
pub mod feedback {
    /// Lowest accepted rating
    pub const MIN_RATING: f64 = 1.0;
    /// Highest accepted rating
    pub const MAX_RATING: f64 = 5.0;
    /// Ratings at or below this exclude the meal from future plans
    pub const DISLIKE_RATING_MAX: f64 = 2.0;
    /// Ratings above this count as "liked" when training the preference model
    pub const MODEL_LIKE_RATING_FLOOR: f64 = 3.0;
    /// Default minimum rating for the liked-meals listing
    pub const DEFAULT_LIKED_MIN_RATING: f64 = 4.0;
    /// Default number of liked meals returned
    pub const DEFAULT_LIKED_LIMIT: usize = 20;
    /// Like probability reported when no model is fitted
    pub const NEUTRAL_LIKE_SCORE: f64 = 0.5;
}
