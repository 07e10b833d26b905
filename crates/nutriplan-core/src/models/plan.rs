// ABOUTME: Targets, running totals, and weekly plan output types
// ABOUTME: Defines DailyTargets, MacroTotals, DayTotals, PlannedMeal, DailyPlan, and WeeklyPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::{Meal, MealId};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Daily calorie and macro targets, fixed for a whole planning run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

/// Protein/fat/carb gram totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

impl MacroTotals {
    /// Macro totals with the given gram values
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    /// Each macro rounded to two decimals
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            protein: round2(self.protein),
            fat: round2(self.fat),
            carbs: round2(self.carbs),
        }
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Running calorie/macro totals for the day being planned
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    /// Energy consumed so far (kcal)
    pub calories: f64,
    /// Macros consumed so far (g)
    pub macros: MacroTotals,
}

impl DayTotals {
    /// Fold a selected meal into the totals
    pub fn add_meal(&mut self, meal: &PlannedMeal) {
        self.calories += meal.calories;
        self.macros += meal.macros;
    }
}

/// One filled slot in a plan
///
/// After dinner pairing this is a composite of main and side rather than a
/// catalog row; `id` stays the main's catalog id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Catalog id (the main's id for composites)
    pub id: MealId,
    /// Display title
    pub title: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Macro grams
    pub macros: MacroTotals,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Recipe text
    #[serde(default)]
    pub recipe: Option<String>,
    /// Side dish folded into this composite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paired_side_meal: Option<Box<PlannedMeal>>,
}

impl From<&Meal> for PlannedMeal {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id,
            title: meal.name.clone(),
            calories: meal.calories,
            macros: MacroTotals::new(meal.protein, meal.fat, meal.carbs),
            ingredients: meal.ingredients.clone(),
            recipe: meal.recipe.clone(),
            paired_side_meal: None,
        }
    }
}

/// Named meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal (main plus optional side)
    Dinner,
}

impl MealSlot {
    /// Slots in the order they are planned
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Lowercase slot name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the plan; a slot is `None` when no candidate was eligible
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Breakfast slot
    pub breakfast: Option<PlannedMeal>,
    /// Lunch slot
    pub lunch: Option<PlannedMeal>,
    /// Dinner slot (possibly a main + side composite)
    pub dinner: Option<PlannedMeal>,
}

impl DailyPlan {
    /// Meal planned for `slot`, if any
    #[must_use]
    pub const fn slot(&self, slot: MealSlot) -> Option<&PlannedMeal> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    /// Filled slots in planning order
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &PlannedMeal)> {
        MealSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.slot(slot).map(|meal| (slot, meal)))
    }

    /// Sum of every filled slot
    #[must_use]
    pub fn totals(&self) -> DayTotals {
        let mut totals = DayTotals::default();
        for (_, meal) in self.meals() {
            totals.add_meal(meal);
        }
        totals
    }
}

/// Seven daily plans, Monday through Sunday
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Monday
    pub monday: DailyPlan,
    /// Tuesday
    pub tuesday: DailyPlan,
    /// Wednesday
    pub wednesday: DailyPlan,
    /// Thursday
    pub thursday: DailyPlan,
    /// Friday
    pub friday: DailyPlan,
    /// Saturday
    pub saturday: DailyPlan,
    /// Sunday
    pub sunday: DailyPlan,
}

impl WeeklyPlan {
    /// Planning order of the week
    pub const DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Plan for `day`
    #[must_use]
    pub const fn day(&self, day: Weekday) -> &DailyPlan {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Mutable plan for `day`
    pub fn day_mut(&mut self, day: Weekday) -> &mut DailyPlan {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Days in Monday→Sunday order
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DailyPlan)> {
        Self::DAYS.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Every filled slot of the week
    pub fn meals(&self) -> impl Iterator<Item = (Weekday, MealSlot, &PlannedMeal)> {
        self.days()
            .flat_map(|(day, plan)| plan.meals().map(move |(slot, meal)| (day, slot, meal)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meal::SlotType;

    #[test]
    fn test_round2() {
        assert!((round2(41.666_666) - 41.67).abs() < f64::EPSILON);
        assert!((round2(12.344_9) - 12.34).abs() < f64::EPSILON);
    }

    #[test]
    fn test_planned_meal_projection_copies_catalog_fields() {
        let meal = Meal::new(7, "Oat Bowl", SlotType::Breakfast, 350.0, 12.0, 8.0, 55.0)
            .with_ingredients(["oats", "milk"])
            .with_recipe("Simmer oats in milk.");

        let planned = PlannedMeal::from(&meal);

        assert_eq!(planned.id, 7);
        assert_eq!(planned.title, "Oat Bowl");
        assert_eq!(planned.macros, MacroTotals::new(12.0, 8.0, 55.0));
        assert_eq!(planned.ingredients, vec!["oats", "milk"]);
        assert_eq!(planned.recipe.as_deref(), Some("Simmer oats in milk."));
        assert!(planned.paired_side_meal.is_none());
    }

    #[test]
    fn test_weekly_plan_days_are_monday_first() {
        let plan = WeeklyPlan::default();
        let order: Vec<Weekday> = plan.days().map(|(day, _)| day).collect();
        assert_eq!(order.first(), Some(&Weekday::Mon));
        assert_eq!(order.last(), Some(&Weekday::Sun));
        assert_eq!(order.len(), 7);
    }
}
