// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a sample meal catalog, profiles, seeded RNGs, and stub oracles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_lines
)]
//! Shared test utilities for `nutriplan`

use nutriplan::oracle::PreferenceOracle;
use nutriplan::{AppError, AppResult};
use nutriplan_core::models::{Goal, Meal, MealId, Sex, SlotType, UserProfile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deterministic generator for reproducible plans
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A catalog with enough variety to fill every slot of a week
///
/// Ids: 1xx breakfast, 2xx lunch, 3xx dinner, 4xx lunch/dinner, 5xx side,
/// 6xx dessert.
pub fn sample_catalog() -> Vec<Meal> {
    vec![
        Meal::new(101, "Overnight Oats", SlotType::Breakfast, 380.0, 14.0, 9.0, 60.0)
            .with_tags(["vegetarian", "dairy"]),
        Meal::new(102, "Tofu Scramble", SlotType::Breakfast, 320.0, 22.0, 16.0, 12.0)
            .with_tags(["vegetarian", "vegan", "soy"]),
        Meal::new(103, "Greek Yogurt Parfait", SlotType::Breakfast, 300.0, 20.0, 8.0, 38.0)
            .with_tags(["vegetarian", "dairy"]),
        Meal::new(104, "Peanut Butter Toast", SlotType::Breakfast, 410.0, 15.0, 18.0, 45.0)
            .with_tags(["vegetarian", "vegan", "peanuts", "gluten"]),
        Meal::new(105, "Egg White Omelette", SlotType::Breakfast, 250.0, 28.0, 6.0, 8.0)
            .with_tags(["vegetarian", "eggs"]),
        Meal::new(106, "Chicken Sausage Hash", SlotType::Breakfast, 450.0, 30.0, 20.0, 35.0),
        Meal::new(201, "Chicken Caesar Wrap", SlotType::Lunch, 560.0, 38.0, 20.0, 50.0)
            .with_tags(["gluten", "dairy"]),
        Meal::new(202, "Lentil Soup", SlotType::Lunch, 420.0, 24.0, 6.0, 62.0)
            .with_tags(["vegetarian", "vegan"]),
        Meal::new(203, "Caprese Sandwich", SlotType::Lunch, 520.0, 22.0, 22.0, 55.0)
            .with_tags(["vegetarian", "dairy", "gluten"]),
        Meal::new(204, "Tuna Salad", SlotType::Lunch, 450.0, 36.0, 18.0, 20.0)
            .with_tags(["fish"]),
        Meal::new(301, "Grilled Salmon", SlotType::Dinner, 620.0, 45.0, 30.0, 20.0)
            .with_tags(["fish"])
            .with_ingredients(["salmon fillet", "lemon"])
            .with_recipe("Grill the salmon."),
        Meal::new(302, "Chicken Stir Fry", SlotType::Dinner, 580.0, 42.0, 16.0, 55.0)
            .with_tags(["soy"]),
        Meal::new(303, "Vegetable Curry", SlotType::Dinner, 540.0, 16.0, 20.0, 70.0)
            .with_tags(["vegetarian", "vegan"]),
        Meal::new(304, "Beef Chili", SlotType::Dinner, 650.0, 44.0, 24.0, 52.0),
        Meal::new(305, "Salmon Teriyaki", SlotType::Dinner, 600.0, 40.0, 22.0, 48.0)
            .with_tags(["fish", "soy"]),
        Meal::new(401, "Quinoa Buddha Bowl", SlotType::LunchDinner, 500.0, 18.0, 16.0, 68.0)
            .with_tags(["vegetarian", "vegan"]),
        Meal::new(402, "Chicken Burrito Bowl", SlotType::LunchDinner, 640.0, 40.0, 20.0, 70.0),
        Meal::new(403, "Mushroom Risotto", SlotType::LunchDinner, 580.0, 14.0, 18.0, 85.0)
            .with_tags(["vegetarian", "dairy"]),
        Meal::new(501, "Side Salad", SlotType::Side, 120.0, 3.0, 8.0, 9.0)
            .with_tags(["vegetarian", "vegan"]),
        Meal::new(502, "Roasted Broccoli", SlotType::Side, 90.0, 5.0, 5.0, 8.0)
            .with_tags(["vegetarian", "vegan"]),
        Meal::new(503, "Garlic Bread", SlotType::Side, 180.0, 5.0, 8.0, 22.0)
            .with_tags(["vegetarian", "gluten", "dairy"]),
        Meal::new(504, "Steamed Rice", SlotType::Side, 200.0, 4.0, 1.0, 44.0)
            .with_tags(["vegetarian", "vegan"]),
        Meal::new(601, "Chocolate Mousse", SlotType::Dessert, 350.0, 6.0, 22.0, 32.0)
            .with_tags(["vegetarian", "dairy"]),
    ]
}

/// Catalog with only desserts, so no slot can be filled
pub fn dessert_only_catalog() -> Vec<Meal> {
    vec![
        Meal::new(601, "Chocolate Mousse", SlotType::Dessert, 350.0, 6.0, 22.0, 32.0),
        Meal::new(602, "Apple Pie", SlotType::Dessert, 410.0, 4.0, 19.0, 58.0),
    ]
}

/// Adult woman maintaining weight, no restrictions
pub fn female_maintainer() -> UserProfile {
    UserProfile::new(30, Sex::Female, Goal::Maintain, 62.0, 168.0)
}

/// Adult man cutting, no restrictions
pub fn male_cutter() -> UserProfile {
    UserProfile::new(35, Sex::Male, Goal::CutMuscleGain, 82.0, 180.0)
}

/// Catalog serialized the way catalog files store it
pub fn catalog_json(meals: &[Meal]) -> String {
    serde_json::to_string_pretty(meals).unwrap_or_default()
}

/// Oracle with a fixed dislike set
#[derive(Debug, Default)]
pub struct StaticOracle {
    pub disliked: HashSet<MealId>,
}

impl StaticOracle {
    pub fn disliking(ids: impl IntoIterator<Item = MealId>) -> Self {
        Self {
            disliked: ids.into_iter().collect(),
        }
    }
}

impl PreferenceOracle for StaticOracle {
    fn disliked_meal_ids(&self, _user_id: Uuid) -> AppResult<HashSet<MealId>> {
        Ok(self.disliked.clone())
    }
}

/// Oracle whose backing store is unreachable
#[derive(Debug, Default)]
pub struct FailingOracle;

impl PreferenceOracle for FailingOracle {
    fn disliked_meal_ids(&self, _user_id: Uuid) -> AppResult<HashSet<MealId>> {
        Err(AppError::storage("feedback table unavailable"))
    }
}
