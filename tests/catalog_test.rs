// ABOUTME: Integration tests for JSON catalog loading and catalog validation
// ABOUTME: Uses temporary files to exercise the file path, parse errors, and record defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{catalog_json, init_test_logging, sample_catalog};
use nutriplan::catalog::{validate_catalog, JsonCatalog, MealCatalog};
use nutriplan::ErrorCode;
use nutriplan_core::models::SlotType;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_file() {
    init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(catalog_json(&sample_catalog()).as_bytes())
        .unwrap();

    let catalog = JsonCatalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), sample_catalog().len());
    assert_eq!(catalog.path(), Some(file.path()));
    assert_eq!(catalog.meals(), sample_catalog().as_slice());
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = tempdir().unwrap();
    let err = JsonCatalog::load(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_invalid_json_is_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("meals.json");
    fs::write(&path, "{ not a list").unwrap();

    let err = JsonCatalog::load(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = JsonCatalog::from_json(r#"[{"id": 1, "name": "Brunch Board", "type": "brunch"}]"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_optional_fields_default() {
    let catalog = JsonCatalog::from_json(
        r#"[
            {"id": 1, "name": "Plain Rice"},
            {"id": 2, "name": "Bean Bowl", "type": "lunch/dinner", "calories": 510,
             "protein": 21.5, "tags": ["vegan", "vegetarian"]}
        ]"#,
    )
    .unwrap();

    let rice = &catalog.meals()[0];
    assert_eq!(rice.slot_type, None);
    assert!(rice.tags.is_empty());
    assert!(rice.recipe.is_none());
    assert!(rice.calories.abs() < f64::EPSILON);

    let bowl = &catalog.meals()[1];
    assert_eq!(bowl.slot_type, Some(SlotType::LunchDinner));
    assert!(bowl.tags.contains("vegan"));
    assert!(catalog.path().is_none());
}

#[test]
fn test_null_columns_read_as_defaults() {
    let catalog = JsonCatalog::from_json(
        r#"[{"id": 1, "name": "Soup", "type": "lunch", "calories": null, "protein": null,
             "fat": null, "carbs": null, "tags": null, "ingredients": null, "recipe": null}]"#,
    )
    .unwrap();

    let soup = &catalog.meals()[0];
    assert_eq!(soup.slot_type, Some(SlotType::Lunch));
    assert!(soup.calories.abs() < f64::EPSILON);
    assert!(soup.protein.abs() < f64::EPSILON);
    assert!(soup.fat.abs() < f64::EPSILON);
    assert!(soup.carbs.abs() < f64::EPSILON);
    assert!(soup.tags.is_empty());
    assert!(soup.ingredients.is_empty());
    assert!(soup.recipe.is_none());
    assert!(validate_catalog(catalog.meals()).is_ok());
}

#[test]
fn test_find_by_id() {
    let catalog = JsonCatalog::from_json(&catalog_json(&sample_catalog())).unwrap();
    assert_eq!(catalog.find(303).unwrap().unwrap().name, "Vegetable Curry");
    assert!(catalog.find(9999).unwrap().is_none());
    assert_eq!(catalog.all_meals().unwrap().len(), catalog.len());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_catalog() {
    assert!(validate_catalog(&sample_catalog()).is_ok());
    assert_eq!(
        validate_catalog(&[]).unwrap_err().code,
        ErrorCode::EmptyCatalog
    );

    let blank_name = JsonCatalog::from_json(r#"[{"id": 5, "name": "  "}]"#).unwrap();
    let err = validate_catalog(blank_name.meals()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let negative = JsonCatalog::from_json(r#"[{"id": 6, "name": "Odd", "fat": -1}]"#).unwrap();
    assert_eq!(
        validate_catalog(negative.meals()).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}
