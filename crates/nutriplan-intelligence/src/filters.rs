// ABOUTME: Ordered candidate filter pipeline reducing the catalog to eligible meals for a slot
// ABOUTME: Applies slot type, allergy, rated-dislike, disliked-category, and dietary filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate Filter Pipeline
//!
//! Stages run in a fixed order, each on the survivors of the previous one:
//!
//! 1. slot type
//! 2. allergies (hard exclusion)
//! 3. meals the user rated 2 or lower (hard exclusion)
//! 4. disliked categories (hard exclusion)
//! 5. dietary preferences (every required tag must be present)
//!
//! No stage is ever relaxed. An empty result is a valid outcome and is
//! handled by the selector.

use crate::context::SlotContext;
use nutriplan_core::models::{Meal, MealId, SlotType, UserProfile};
use std::collections::HashSet;
use tracing::debug;

/// Keep meals whose slot type fits the request; `None` keeps everything
#[must_use]
pub fn filter_by_slot_type(mut meals: Vec<&Meal>, requested: Option<SlotType>) -> Vec<&Meal> {
    if let Some(requested) = requested {
        meals.retain(|meal| {
            meal.slot_type
                .is_some_and(|meal_type| requested.accepts(meal_type))
        });
    }
    meals
}

/// Drop meals tagged with any of the user's allergies
#[must_use]
pub fn filter_by_allergies<'m>(mut meals: Vec<&'m Meal>, allergies: &[String]) -> Vec<&'m Meal> {
    if !allergies.is_empty() {
        meals.retain(|meal| !meal.has_any_tag(allergies));
    }
    meals
}

/// Drop meals the user previously rated poorly
#[must_use]
pub fn filter_by_feedback_ratings<'m>(
    mut meals: Vec<&'m Meal>,
    disliked_meal_ids: &HashSet<MealId>,
) -> Vec<&'m Meal> {
    if !disliked_meal_ids.is_empty() {
        meals.retain(|meal| !disliked_meal_ids.contains(&meal.id));
    }
    meals
}

/// Drop meals in a category the user dislikes
#[must_use]
pub fn filter_by_disliked_categories<'m>(
    mut meals: Vec<&'m Meal>,
    disliked_categories: &[String],
) -> Vec<&'m Meal> {
    if !disliked_categories.is_empty() {
        meals.retain(|meal| !meal.has_any_tag(disliked_categories));
    }
    meals
}

/// Keep meals carrying every required dietary tag
#[must_use]
pub fn filter_by_dietary_preferences<'m>(
    mut meals: Vec<&'m Meal>,
    required: &[String],
) -> Vec<&'m Meal> {
    if !required.is_empty() {
        meals.retain(|meal| meal.has_all_tags(required));
    }
    meals
}

/// The full pipeline bound to one user's profile and rated dislikes
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    profile: &'a UserProfile,
    disliked_meal_ids: &'a HashSet<MealId>,
}

impl<'a> CandidateFilter<'a> {
    /// Bind the pipeline to a profile and the user's rated dislikes
    #[must_use]
    pub const fn new(profile: &'a UserProfile, disliked_meal_ids: &'a HashSet<MealId>) -> Self {
        Self {
            profile,
            disliked_meal_ids,
        }
    }

    /// Run every stage over `catalog` for the slot in `context`
    #[must_use]
    pub fn apply<'m>(&self, catalog: &'m [Meal], context: &SlotContext) -> Vec<&'m Meal> {
        let slot_label = context.slot.map_or("any", SlotType::as_str);
        debug!(slot = slot_label, catalog = catalog.len(), "filtering candidates");

        let typed = filter_by_slot_type(catalog.iter().collect(), context.slot);
        debug!(slot = slot_label, remaining = typed.len(), "after slot type filter");

        let safe = filter_by_allergies(typed, &self.profile.allergies);
        let without_rated_dislikes = filter_by_feedback_ratings(safe, self.disliked_meal_ids);
        let without_disliked_categories = filter_by_disliked_categories(
            without_rated_dislikes,
            &self.profile.disliked_categories,
        );
        let preferred = filter_by_dietary_preferences(
            without_disliked_categories,
            &self.profile.dietary_preferences,
        );
        debug!(
            slot = slot_label,
            remaining = preferred.len(),
            "after profile filters"
        );

        preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{DayTotals, Goal, Sex};

    fn catalog() -> Vec<Meal> {
        vec![
            Meal::new(1, "Pancakes", SlotType::Breakfast, 400.0, 10.0, 12.0, 60.0)
                .with_tags(["vegetarian", "gluten"]),
            Meal::new(2, "Tofu Scramble", SlotType::Breakfast, 300.0, 20.0, 15.0, 10.0)
                .with_tags(["vegan", "vegetarian", "gluten_free", "soy"]),
            Meal::new(3, "Chicken Wrap", SlotType::Lunch, 550.0, 35.0, 18.0, 50.0),
            Meal::new(4, "Salmon Bowl", SlotType::LunchDinner, 600.0, 40.0, 22.0, 45.0)
                .with_tags(["seafood", "gluten_free"]),
            Meal::new(5, "Steak", SlotType::Dinner, 700.0, 50.0, 35.0, 5.0),
            Meal::new(6, "Green Salad", SlotType::Side, 120.0, 3.0, 7.0, 10.0)
                .with_tags(["vegan", "vegetarian", "gluten_free"]),
            Meal::new(7, "Brownie", SlotType::Dessert, 350.0, 4.0, 18.0, 45.0),
        ]
    }

    fn ids(meals: &[&Meal]) -> Vec<MealId> {
        meals.iter().map(|meal| meal.id).collect()
    }

    #[test]
    fn test_slot_type_mapping() {
        let meals = catalog();
        let all: Vec<&Meal> = meals.iter().collect();

        let by = |slot| ids(&filter_by_slot_type(all.clone(), Some(slot)));
        assert_eq!(by(SlotType::Breakfast), vec![1, 2]);
        assert_eq!(by(SlotType::Lunch), vec![3, 4]);
        assert_eq!(by(SlotType::Dinner), vec![4, 5]);
        assert_eq!(by(SlotType::Side), vec![6]);
        assert_eq!(by(SlotType::Dessert), vec![7]);
        assert_eq!(filter_by_slot_type(all.clone(), None).len(), meals.len());
    }

    #[test]
    fn test_pipeline_applies_every_exclusion() {
        let meals = catalog();
        let profile = UserProfile::new(30, Sex::Female, Goal::Maintain, 60.0, 165.0)
            .with_allergies(["soy"])
            .with_disliked_categories(["seafood"]);
        let disliked: HashSet<MealId> = [5].into_iter().collect();
        let filter = CandidateFilter::new(&profile, &disliked);

        let survivors_any_slot = filter.apply(&meals, &SlotContext::any_slot());
        let survivors = ids(&survivors_any_slot);

        assert!(!survivors.contains(&2), "soy allergy must exclude tofu");
        assert!(!survivors.contains(&4), "seafood category must exclude salmon");
        assert!(!survivors.contains(&5), "rated dislike must exclude steak");
        assert_eq!(survivors, vec![1, 3, 6, 7]);
    }

    #[test]
    fn test_dietary_preferences_require_superset() {
        let meals = catalog();
        let profile = UserProfile::new(30, Sex::Male, Goal::Bulk, 80.0, 180.0)
            .with_dietary_preferences(["vegan", "gluten_free"]);
        let disliked = HashSet::new();
        let filter = CandidateFilter::new(&profile, &disliked);

        let survivors = ids(&filter.apply(&meals, &SlotContext::any_slot()));
        assert_eq!(survivors, vec![2, 6]);
    }

    #[test]
    fn test_preferences_can_empty_the_pool() {
        let meals = catalog();
        let profile = UserProfile::new(30, Sex::Male, Goal::Bulk, 80.0, 180.0)
            .with_dietary_preferences(["vegan"]);
        let disliked = HashSet::new();
        let filter = CandidateFilter::new(&profile, &disliked);

        let context = SlotContext::new(SlotType::Dinner, DayTotals::default(), 900.0);
        assert!(filter.apply(&meals, &context).is_empty());
    }
}
