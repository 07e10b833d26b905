// ABOUTME: Meal planning algorithms for the NutriPlan weekly planner
// ABOUTME: Targets, candidate filtering, suitability scoring, weighted selection, and preference learning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriPlan` Intelligence
//!
//! Pure planning algorithms with no I/O. Every random draw goes through an
//! explicit `&mut impl Rng` so callers can substitute a seeded generator.
//!
//! ## Modules
//!
//! - **targets**: daily calorie/macro targets and per-slot calorie budgets
//! - **filters**: the ordered candidate filter pipeline
//! - **scoring**: goal-gated macro suitability weights
//! - **selector**: weighted random selection with week-level de-duplication
//! - **pairing**: dinner main + side composites
//! - **preference**: per-user like-probability model and its keyed cache

/// Per-slot planning context
pub mod context;
/// Candidate filter pipeline
pub mod filters;
/// Dinner main + side composition
pub mod pairing;
/// Per-user preference learning from ratings
pub mod preference;
/// Macro suitability scoring
pub mod scoring;
/// Weighted slot selection
pub mod selector;
/// Daily targets and slot budgets
pub mod targets;

pub use context::SlotContext;
pub use filters::CandidateFilter;
pub use pairing::pair_dinner;
pub use preference::{PreferenceModel, PreferenceModelCache};
pub use scoring::{score_candidates, ScoredCandidate};
pub use selector::{select_meal, UsedTitles};
pub use targets::{calculate_daily_targets, SlotBudgets};
