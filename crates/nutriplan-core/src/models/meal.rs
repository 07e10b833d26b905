// ABOUTME: Catalog meal records and slot-type classification
// ABOUTME: Defines Meal, MealId, SlotType, and macro density helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Catalog row identifier
pub type MealId = i64;

/// Slot-type classifier carried by catalog meals and used for slot requests
///
/// `LunchDinner` meals are eligible for both lunch and dinner slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotType {
    /// Breakfast-only meal
    #[serde(rename = "breakfast")]
    Breakfast,
    /// Lunch-only meal
    #[serde(rename = "lunch")]
    Lunch,
    /// Dinner-only meal
    #[serde(rename = "dinner")]
    Dinner,
    /// Meal suitable for lunch or dinner
    #[serde(rename = "lunch/dinner")]
    LunchDinner,
    /// Side dish paired with a dinner main
    #[serde(rename = "side")]
    Side,
    /// Dessert
    #[serde(rename = "dessert")]
    Dessert,
}

impl SlotType {
    /// Whether a meal classified as `meal_type` may fill a slot requested as `self`
    ///
    /// The planner never requests `LunchDinner`; as a request it accepts any
    /// lunch or dinner meal, and still rejects breakfast, side, and dessert.
    #[must_use]
    pub const fn accepts(self, meal_type: Self) -> bool {
        match self {
            Self::Breakfast => matches!(meal_type, Self::Breakfast),
            Self::Lunch => matches!(meal_type, Self::Lunch | Self::LunchDinner),
            Self::Dinner => matches!(meal_type, Self::Dinner | Self::LunchDinner),
            Self::LunchDinner => {
                matches!(meal_type, Self::Lunch | Self::Dinner | Self::LunchDinner)
            }
            Self::Side => matches!(meal_type, Self::Side),
            Self::Dessert => matches!(meal_type, Self::Dessert),
        }
    }

    /// Canonical catalog string for this slot type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::LunchDinner => "lunch/dinner",
            Self::Side => "side",
            Self::Dessert => "dessert",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "lunch/dinner" => Ok(Self::LunchDinner),
            "side" => Ok(Self::Side),
            "dessert" => Ok(Self::Dessert),
            other => Err(AppError::invalid_input(format!(
                "Unknown meal slot type '{other}'"
            ))),
        }
    }
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A catalog meal, read-only to the planner
///
/// Nutrient fields default to zero and collections to empty when a catalog
/// record omits them or stores `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Catalog identifier
    pub id: MealId,
    /// Display name; unique key for week-level de-duplication
    pub name: String,
    /// Energy (kcal)
    #[serde(default, deserialize_with = "null_as_default")]
    pub calories: f64,
    /// Protein (g)
    #[serde(default, deserialize_with = "null_as_default")]
    pub protein: f64,
    /// Fat (g)
    #[serde(default, deserialize_with = "null_as_default")]
    pub fat: f64,
    /// Carbohydrates (g)
    #[serde(default, deserialize_with = "null_as_default")]
    pub carbs: f64,
    /// Free-form tags (allergens, categories, dietary labels)
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeSet<String>,
    /// Ingredient lines
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    /// Recipe text
    #[serde(default)]
    pub recipe: Option<String>,
    /// Slot-type classifier; untyped meals never match a typed slot request
    #[serde(rename = "type", default)]
    pub slot_type: Option<SlotType>,
}

impl Meal {
    /// Create a meal with the given identity, slot type, and nutrients
    pub fn new(
        id: MealId,
        name: impl Into<String>,
        slot_type: SlotType,
        calories: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
            protein,
            fat,
            carbs,
            tags: BTreeSet::new(),
            ingredients: Vec::new(),
            recipe: None,
            slot_type: Some(slot_type),
        }
    }

    /// Add tags to this meal
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the ingredient list
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the recipe text
    #[must_use]
    pub fn with_recipe(mut self, recipe: impl Into<String>) -> Self {
        self.recipe = Some(recipe.into());
        self
    }

    /// Whether any of this meal's tags appear in `tags`
    #[must_use]
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag))
    }

    /// Whether this meal carries every tag in `tags`
    #[must_use]
    pub fn has_all_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }

    /// Grams of `grams` per kcal of this meal, zero for calorie-free records
    #[must_use]
    pub fn density(&self, grams: f64) -> f64 {
        if self.calories > 0.0 {
            grams / self.calories
        } else {
            0.0
        }
    }

    /// Reject records that would silently distort planning totals
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the name is blank or any nutrient is
    /// negative or non-finite.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::malformed_meal(self.id, "name is empty"));
        }
        let nutrients = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("fat", self.fat),
            ("carbs", self.carbs),
        ];
        for (field, value) in nutrients {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::malformed_meal(
                    self.id,
                    format!("{field} must be a non-negative number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_lunch_dinner_fills_both_main_slots() {
        assert!(SlotType::Lunch.accepts(SlotType::LunchDinner));
        assert!(SlotType::Dinner.accepts(SlotType::LunchDinner));
        assert!(!SlotType::Breakfast.accepts(SlotType::LunchDinner));
        assert!(!SlotType::Side.accepts(SlotType::Dinner));
        assert!(!SlotType::Dinner.accepts(SlotType::Side));
    }

    #[test]
    fn test_lunch_dinner_request_keeps_main_meals_only() {
        let request = SlotType::LunchDinner;
        for main in [SlotType::Lunch, SlotType::Dinner, SlotType::LunchDinner] {
            assert!(request.accepts(main), "{main}");
        }
        for other in [SlotType::Breakfast, SlotType::Side, SlotType::Dessert] {
            assert!(!request.accepts(other), "{other}");
        }
    }

    #[test]
    fn test_slot_type_strings() {
        assert_eq!("Lunch/Dinner".parse::<SlotType>().unwrap(), SlotType::LunchDinner);
        assert_eq!(
            serde_json::to_string(&SlotType::LunchDinner).unwrap(),
            "\"lunch/dinner\""
        );
        let err = "brunch".parse::<SlotType>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_validate_rejects_bad_nutrients() {
        let good = Meal::new(1, "Soup", SlotType::Lunch, 300.0, 10.0, 5.0, 40.0);
        assert!(good.validate().is_ok());

        let mut nan = good.clone();
        nan.carbs = f64::NAN;
        assert_eq!(nan.validate().unwrap_err().code, ErrorCode::InvalidInput);

        let mut blank = good;
        blank.name = " ".to_owned();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_density_of_calorie_free_meal_is_zero() {
        let water = Meal::new(2, "Water", SlotType::Side, 0.0, 0.0, 0.0, 0.0);
        assert!(water.density(10.0).abs() < f64::EPSILON);
        let meal = Meal::new(3, "Steak", SlotType::Dinner, 400.0, 80.0, 20.0, 0.0);
        assert!((meal.density(meal.protein) - 0.2).abs() < 1e-12);
    }
}
