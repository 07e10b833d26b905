// ABOUTME: Core types and constants for the NutriPlan meal planning engine
// ABOUTME: Foundation crate with error handling, domain models, and planning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriPlan` Core
//!
//! Foundation crate providing the shared types for the weekly meal planner.
//! It changes rarely so the algorithm and orchestration crates can compile
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ConfigError`
//! - **constants**: Nutrition and planning constants (kcal/g, slot budgets, thresholds)
//! - **models**: Catalog meals, user profiles, targets, and plan output types

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition and planning constants
pub mod constants;

/// Domain models (meals, profiles, targets, plans)
pub mod models;
