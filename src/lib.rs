// ABOUTME: Main library entry point for the NutriPlan weekly meal planner
// ABOUTME: Wires planning algorithms to catalogs, feedback, persistence, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriPlan`
//!
//! Generates a seven-day meal plan (breakfast, lunch, dinner with an optional
//! paired side) from a meal catalog and a user profile.
//!
//! ## Architecture
//!
//! - **`nutriplan-core`**: errors, constants, and domain models
//! - **`nutriplan-intelligence`**: targets, filters, scoring, selection,
//!   pairing, and the preference model
//! - **planner**: the per-run engine (day state machine, week orchestration)
//! - **oracle / catalog / store**: collaborator seams and in-memory
//!   implementations
//! - **service**: full plan/save cycles and the feedback demonstration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::catalog::JsonCatalog;
//! use nutriplan::feedback::FeedbackStore;
//! use nutriplan::planner::MealPlanner;
//! use nutriplan_core::errors::AppResult;
//! use nutriplan_core::models::{Goal, Sex, UserProfile};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use uuid::Uuid;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = JsonCatalog::load("meals.json")?;
//!     let feedback = FeedbackStore::new();
//!     let profile = UserProfile::new(30, Sex::Female, Goal::Maintain, 62.0, 168.0);
//!     let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//!     let planner = MealPlanner::new(Uuid::new_v4(), profile, &feedback, &mut rng)?;
//!     let plan = planner.generate_weekly_plan(catalog.meals(), &mut rng)?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!     Ok(())
//! }
//! ```

/// Meal catalog sources and catalog validation
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// In-memory feedback ledger and preference oracle
pub mod feedback;

/// Structured logging setup
pub mod logging;

/// Preference oracle seam
pub mod oracle;

/// Per-run planning engine
pub mod planner;

/// Plan/save orchestration and the feedback demonstration
pub mod service;

/// Plan persistence seam and in-memory store
pub mod store;

pub use nutriplan_core::errors::{AppError, AppResult, ErrorCode};
pub use nutriplan_core::models;
