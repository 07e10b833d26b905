// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// ABOUTME: Terminal output for weekly plans, daily targets, and liked meals
// ABOUTME: Fixed-width rows, one per slot, with per-day calorie totals

use nutriplan::feedback::LikedMeal;
use nutriplan::models::{DailyPlan, DailyTargets, MealSlot, PlannedMeal, WeeklyPlan};

pub fn display_targets(targets: &DailyTargets) {
    println!("  calories  {:>8.0} kcal", targets.calories);
    println!("  protein   {:>8.0} g", targets.protein);
    println!("  fat       {:>8.0} g", targets.fat);
    println!("  carbs     {:>8.0} g", targets.carbs);
}

pub fn display_weekly_plan(plan: &WeeklyPlan) {
    for (day, daily) in plan.days() {
        println!("{day}");
        display_day(daily);
    }
}

fn display_day(daily: &DailyPlan) {
    for slot in MealSlot::ALL {
        match daily.slot(slot) {
            Some(meal) => println!("  {:<10} {}", slot.as_str(), format_meal(meal)),
            None => println!("  {:<10} -", slot.as_str()),
        }
    }
    let totals = daily.totals();
    println!(
        "  {:<10} {:.0} kcal  P {:.0}g  F {:.0}g  C {:.0}g",
        "total", totals.calories, totals.macros.protein, totals.macros.fat, totals.macros.carbs
    );
}

fn format_meal(meal: &PlannedMeal) -> String {
    format!(
        "{} ({:.0} kcal, P {:.0}g F {:.0}g C {:.0}g)",
        meal.title, meal.calories, meal.macros.protein, meal.macros.fat, meal.macros.carbs
    )
}

pub fn display_liked_meals(liked: &[LikedMeal]) {
    if liked.is_empty() {
        println!("  no liked meals");
        return;
    }
    for meal in liked {
        println!("  {:>5}  {:<40} {:.1}", meal.id, meal.title, meal.rating);
    }
}
