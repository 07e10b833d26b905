// ABOUTME: Meal catalog sources for planning runs (in-memory lists and JSON files)
// ABOUTME: Loads the catalog once per run and validates records before planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal catalogs
//!
//! A JSON catalog is an array of meal records:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Overnight Oats",
//!     "type": "breakfast",
//!     "calories": 380,
//!     "protein": 18,
//!     "fat": 9,
//!     "carbs": 55,
//!     "tags": ["vegetarian"],
//!     "ingredients": ["oats", "milk", "chia"],
//!     "recipe": "Soak overnight."
//!   }
//! ]
//! ```
//!
//! Nutrients, tags, ingredients, recipe and type may be omitted. An unknown
//! `type` string is rejected.

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{Meal, MealId};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Anything that can hand the planner its meal catalog
pub trait MealCatalog {
    /// Every meal available for planning
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read
    fn all_meals(&self) -> AppResult<Vec<Meal>>;

    /// Look up one meal by id
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read
    fn find(&self, meal_id: MealId) -> AppResult<Option<Meal>> {
        Ok(self.all_meals()?.into_iter().find(|meal| meal.id == meal_id))
    }
}

impl MealCatalog for Vec<Meal> {
    fn all_meals(&self) -> AppResult<Vec<Meal>> {
        Ok(self.clone())
    }

    fn find(&self, meal_id: MealId) -> AppResult<Option<Meal>> {
        Ok(self.iter().find(|meal| meal.id == meal_id).cloned())
    }
}

impl<T: MealCatalog + ?Sized> MealCatalog for &T {
    fn all_meals(&self) -> AppResult<Vec<Meal>> {
        (**self).all_meals()
    }

    fn find(&self, meal_id: MealId) -> AppResult<Option<Meal>> {
        (**self).find(meal_id)
    }
}

/// Catalog loaded from a JSON file
#[derive(Debug, Clone, PartialEq)]
pub struct JsonCatalog {
    path: Option<PathBuf>,
    meals: Vec<Meal>,
}

impl JsonCatalog {
    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be opened and
    /// `SerializationError` if it is not a valid meal array
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::storage(format!("cannot open catalog {}: {e}", path.display())).with_source(e)
        })?;
        let mut catalog = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), meals = catalog.meals.len(), "loaded meal catalog");
        catalog.path = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Parse a catalog from any reader
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the input is not a valid meal array
    pub fn from_reader(reader: impl Read) -> AppResult<Self> {
        let meals: Vec<Meal> = serde_json::from_reader(reader)?;
        Ok(Self { path: None, meals })
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the input is not a valid meal array
    pub fn from_json(json: &str) -> AppResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// File this catalog was loaded from
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Meals in file order
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Number of meals
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the catalog has no meals
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl MealCatalog for JsonCatalog {
    fn all_meals(&self) -> AppResult<Vec<Meal>> {
        Ok(self.meals.clone())
    }

    fn find(&self, meal_id: MealId) -> AppResult<Option<Meal>> {
        Ok(self.meals.iter().find(|meal| meal.id == meal_id).cloned())
    }
}

/// Reject an empty catalog or any malformed record
///
/// # Errors
///
/// Returns `EmptyCatalog` for no meals and `InvalidInput` for the first
/// malformed meal
pub fn validate_catalog(meals: &[Meal]) -> AppResult<()> {
    if meals.is_empty() {
        return Err(AppError::empty_catalog());
    }
    meals.iter().try_for_each(Meal::validate)
}
