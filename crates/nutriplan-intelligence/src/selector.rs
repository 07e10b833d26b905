// ABOUTME: Weighted random selection of one meal from scored candidates
// ABOUTME: Prefers titles unused this week and floors weights before sampling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weighted Slot Selector
//!
//! Selection runs in five steps:
//!
//! 1. an empty pool yields `None`
//! 2. candidates whose title is already in [`UsedTitles`] are set aside,
//!    unless every candidate is used, in which case the full pool is kept
//! 3. weights are floored at [`SELECTION_WEIGHT_EPSILON`]
//! 4. one candidate is drawn with probability `weight / sum(weights)`
//! 5. the chosen catalog meal is projected into a [`PlannedMeal`]

use crate::scoring::ScoredCandidate;
use nutriplan_core::constants::planning::SELECTION_WEIGHT_EPSILON;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::PlannedMeal;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashSet;

/// Titles already placed in the week being planned
///
/// Scoped to a single planning run; never shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedTitles(HashSet<String>);

impl UsedTitles {
    /// Empty set for a new week
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `title` has been used this week
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    /// Record `title`; returns false if it was already present
    pub fn insert(&mut self, title: impl Into<String>) -> bool {
        self.0.insert(title.into())
    }

    /// Number of distinct titles used
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been used yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Floor a raw suitability weight so every candidate stays drawable
#[must_use]
pub fn sampling_weight(weight: f64) -> f64 {
    // NaN.max(eps) is eps
    weight.max(SELECTION_WEIGHT_EPSILON)
}

/// Draw one meal from `candidates`, avoiding titles in `used` when possible
///
/// # Errors
///
/// Returns `InternalError` if the sampling distribution cannot be built,
/// which only happens if floored weights overflow to infinity.
pub fn select_meal<R: Rng + ?Sized>(
    candidates: &[ScoredCandidate<'_>],
    used: &UsedTitles,
    rng: &mut R,
) -> AppResult<Option<PlannedMeal>> {
    if candidates.is_empty() {
        return Ok(None);
    }

    let unused: Vec<&ScoredCandidate<'_>> = candidates
        .iter()
        .filter(|candidate| !used.contains(&candidate.meal.name))
        .collect();
    let pool: Vec<&ScoredCandidate<'_>> = if unused.is_empty() {
        tracing::debug!(
            candidates = candidates.len(),
            "every candidate already used this week, reusing"
        );
        candidates.iter().collect()
    } else {
        unused
    };

    let distribution = WeightedIndex::new(pool.iter().map(|c| sampling_weight(c.weight)))
        .map_err(|e| {
            AppError::internal(format!("cannot sample from {} candidates", pool.len()))
                .with_source(e)
        })?;

    let chosen = pool[distribution.sample(rng)];
    tracing::trace!(meal_id = chosen.meal.id, title = %chosen.meal.name, "selected meal");
    Ok(Some(PlannedMeal::from(chosen.meal)))
}
