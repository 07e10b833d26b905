// ABOUTME: Dinner main + side pairing into a single composite planned meal
// ABOUTME: Builds a new value from both halves instead of mutating the main
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::PlannedMeal;

/// Merge a dinner main and its side into one composite meal
///
/// Calories are summed as is and macros are summed then rounded to two
/// decimals. The composite keeps the main's id, joins the titles with
/// `" with "`, concatenates ingredients, appends the side recipe under a
/// `[Side Dish: ...]` marker, and keeps the side as `paired_side_meal`.
#[must_use]
pub fn pair_dinner(main: &PlannedMeal, side: PlannedMeal) -> PlannedMeal {
    let recipe = format!(
        "{}\n\n[Side Dish: {}]\n{}",
        main.recipe.as_deref().unwrap_or_default(),
        side.title,
        side.recipe.as_deref().unwrap_or_default()
    );

    let mut ingredients = Vec::with_capacity(main.ingredients.len() + side.ingredients.len());
    ingredients.extend(main.ingredients.iter().cloned());
    ingredients.extend(side.ingredients.iter().cloned());

    PlannedMeal {
        id: main.id,
        title: format!("{} with {}", main.title, side.title),
        calories: main.calories + side.calories,
        macros: (main.macros + side.macros).rounded(),
        ingredients,
        recipe: Some(recipe),
        paired_side_meal: Some(Box::new(side)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{Meal, SlotType};

    #[test]
    fn test_pairing_sums_nutrients() {
        let main = PlannedMeal::from(
            &Meal::new(10, "Grilled Chicken", SlotType::Dinner, 300.0, 20.0, 8.0, 2.0)
                .with_ingredients(["chicken breast", "olive oil"])
                .with_recipe("Grill the chicken."),
        );
        let side = PlannedMeal::from(
            &Meal::new(20, "Steamed Broccoli", SlotType::Side, 100.0, 5.0, 0.5, 12.0)
                .with_ingredients(["broccoli"])
                .with_recipe("Steam for 5 minutes."),
        );

        let dinner = pair_dinner(&main, side.clone());

        assert_eq!(dinner.id, 10);
        assert!((dinner.calories - 400.0).abs() < f64::EPSILON);
        assert!((dinner.macros.protein - 25.0).abs() < f64::EPSILON);
        assert!((dinner.macros.fat - 8.5).abs() < f64::EPSILON);
        assert_eq!(dinner.title, "Grilled Chicken with Steamed Broccoli");
        assert_eq!(
            dinner.ingredients,
            vec!["chicken breast", "olive oil", "broccoli"]
        );
        assert_eq!(
            dinner.recipe.as_deref(),
            Some("Grill the chicken.\n\n[Side Dish: Steamed Broccoli]\nSteam for 5 minutes.")
        );
        assert_eq!(dinner.paired_side_meal.as_deref(), Some(&side));
    }

    #[test]
    fn test_pairing_leaves_main_untouched() {
        let main = PlannedMeal::from(&Meal::new(
            1, "Tofu Stir Fry", SlotType::Dinner, 450.0, 22.0, 15.0, 40.0,
        ));
        let before = main.clone();
        let side = PlannedMeal::from(&Meal::new(2, "Rice", SlotType::Side, 200.0, 4.0, 0.4, 45.0));

        let dinner = pair_dinner(&main, side);

        assert_eq!(main, before);
        assert!(main.paired_side_meal.is_none());
        // recipes missing on both halves still produce the marker
        assert_eq!(dinner.recipe.as_deref(), Some("\n\n[Side Dish: Rice]\n"));
    }

    #[test]
    fn test_pairing_rounds_macros() {
        let main = PlannedMeal::from(&Meal::new(1, "A", SlotType::Dinner, 1.0, 0.111, 0.0, 0.0));
        let side = PlannedMeal::from(&Meal::new(2, "B", SlotType::Side, 1.0, 0.222, 0.0, 0.0));

        let dinner = pair_dinner(&main, side);
        assert!((dinner.macros.protein - 0.33).abs() < f64::EPSILON);
    }
}
