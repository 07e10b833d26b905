// ABOUTME: Integration tests for the feedback ledger and its role as the planner's preference oracle
// ABOUTME: Validates rating bounds, liked-meal ordering, dislike exclusion, and model retraining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{female_maintainer, init_test_logging, sample_catalog, seeded_rng};
use nutriplan::feedback::{FeedbackInput, FeedbackStore};
use nutriplan::oracle::PreferenceOracle;
use nutriplan::planner::MealPlanner;
use nutriplan::ErrorCode;
use nutriplan_core::models::{Meal, SlotType};
use uuid::Uuid;

fn meal_named(catalog: &[Meal], name: &str) -> Meal {
    catalog
        .iter()
        .find(|meal| meal.name == name)
        .cloned()
        .unwrap()
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_assigns_increasing_ids() {
    init_test_logging();
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();

    let first = store
        .submit(FeedbackInput::new(user, 101, 4.0), &catalog)
        .unwrap();
    let second = store
        .submit(
            FeedbackInput::new(user, 202, 2.5)
                .with_comment("a bit bland")
                .with_plan(7),
            &catalog,
        )
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.comment.as_deref(), Some("a bit bland"));
    assert_eq!(second.plan_id, Some(7));
    assert_eq!(store.feedback_for(user), vec![first, second]);
}

#[test]
fn test_ratings_outside_bounds_are_rejected() {
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();

    for rating in [0.0, 0.99, 5.01, 10.0, f64::NAN] {
        let err = store
            .submit(FeedbackInput::new(user, 101, rating), &catalog)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "rating {rating}");
    }
    for rating in [1.0, 3.3, 5.0] {
        assert!(store
            .submit(FeedbackInput::new(user, 101, rating), &catalog)
            .is_ok());
    }
    assert_eq!(store.feedback_for(user).len(), 3);
}

#[test]
fn test_unknown_meal_is_not_found() {
    let store = FeedbackStore::new();
    let err = store
        .submit(FeedbackInput::new(Uuid::new_v4(), 4242, 3.0), &sample_catalog())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Liked meals
// ============================================================================

#[test]
fn test_liked_meals_ordering_and_limit() {
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();

    for (meal_id, rating) in [(101, 4.0), (202, 5.0), (303, 4.5), (304, 3.0), (401, 5.0)] {
        store
            .submit(FeedbackInput::new(user, meal_id, rating), &catalog)
            .unwrap();
    }

    let liked = store.liked_meals(user, 4.0, 20).unwrap();
    let ids: Vec<_> = liked.iter().map(|meal| meal.id).collect();
    // ties on rating put the newer rating first
    assert_eq!(ids, vec![401, 202, 303, 101]);
    assert_eq!(liked[0].title, "Quinoa Buddha Bowl");

    let top_two = store.liked_meals(user, 4.0, 2).unwrap();
    assert_eq!(top_two.len(), 2);

    assert!(store.liked_meals(Uuid::new_v4(), 4.0, 20).unwrap().is_empty());
}

#[test]
fn test_liked_meals_rejects_bad_threshold() {
    let store = FeedbackStore::new();
    let err = store.liked_meals(Uuid::new_v4(), 6.0, 10).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

// ============================================================================
// Oracle behavior
// ============================================================================

#[test]
fn test_low_ratings_become_dislikes() {
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();

    for (meal_id, rating) in [(301, 1.0), (305, 2.0), (302, 2.5), (303, 5.0)] {
        store
            .submit(FeedbackInput::new(user, meal_id, rating), &catalog)
            .unwrap();
    }

    let disliked = store.disliked_meal_ids(user).unwrap();
    assert_eq!(disliked.len(), 2);
    assert!(disliked.contains(&301) && disliked.contains(&305));
    assert!(store.disliked_meal_ids(Uuid::new_v4()).unwrap().is_empty());
}

#[test]
fn test_planner_reads_dislikes_from_store() {
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();
    store
        .submit(FeedbackInput::new(user, 301, 1.0), &catalog)
        .unwrap();

    let planner =
        MealPlanner::new(user, female_maintainer(), &store, &mut seeded_rng(1)).unwrap();
    assert!(planner.disliked_meal_ids().contains(&301));
}

#[test]
fn test_like_score_neutral_until_trained() {
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();
    let chicken = meal_named(&catalog, "Chicken Stir Fry");

    assert!((store.like_score(user, &chicken).unwrap() - 0.5).abs() < f64::EPSILON);

    // a single class cannot be fitted
    store
        .submit(FeedbackInput::new(user, 302, 5.0), &catalog)
        .unwrap();
    assert!(!store.retrain(user).unwrap());
    assert!((store.like_score(user, &chicken).unwrap() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_retrained_model_prefers_liked_words() {
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();

    for meal_id in [106, 201, 302, 402] {
        store
            .submit(FeedbackInput::new(user, meal_id, 5.0), &catalog)
            .unwrap();
    }
    for meal_id in [301, 305, 204] {
        store
            .submit(FeedbackInput::new(user, meal_id, 1.0), &catalog)
            .unwrap();
    }
    assert!(store.retrain(user).unwrap());

    let probe_liked = Meal::new(
        900,
        "Chicken Noodle Soup",
        SlotType::Lunch,
        400.0,
        30.0,
        10.0,
        40.0,
    );
    let probe_disliked = Meal::new(
        901,
        "Salmon Poke",
        SlotType::Lunch,
        400.0,
        30.0,
        10.0,
        40.0,
    )
    .with_tags(["fish"]);

    let liked_score = store.like_score(user, &probe_liked).unwrap();
    let disliked_score = store.like_score(user, &probe_disliked).unwrap();
    assert!(liked_score > 0.5, "liked score {liked_score}");
    assert!(disliked_score < 0.5, "disliked score {disliked_score}");

    let features = store.top_features(user, 3).unwrap().unwrap();
    assert_eq!(features.len(), 3);
    assert!(features.iter().any(|(word, _)| word == "chicken"));
}

#[test]
fn test_clear_user_forgets_ratings_and_model() {
    let catalog = sample_catalog();
    let store = FeedbackStore::new();
    let user = Uuid::new_v4();
    store
        .submit(FeedbackInput::new(user, 302, 5.0), &catalog)
        .unwrap();
    store
        .submit(FeedbackInput::new(user, 301, 1.0), &catalog)
        .unwrap();
    assert!(store.retrain(user).unwrap());

    store.clear_user(user);

    assert!(store.feedback_for(user).is_empty());
    assert!(store.disliked_meal_ids(user).unwrap().is_empty());
    assert!(store.top_features(user, 5).unwrap().is_none());
}
