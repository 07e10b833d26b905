// ABOUTME: Per-slot planning context threaded through filtering and scoring
// ABOUTME: Carries the requested slot, running day totals, and the slot calorie budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{DayTotals, SlotType};
use serde::{Deserialize, Serialize};

/// What the day planner knows when it asks for candidates for one slot
///
/// `day_totals` and `slot_calorie_budget` are part of the contract for
/// macro-aware scoring; the current filters and scorer only read `slot`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotContext {
    /// Requested slot type; `None` passes the catalog through the type filter
    pub slot: Option<SlotType>,
    /// Calories and macros already planned for this day
    pub day_totals: DayTotals,
    /// Calories available to this slot
    pub slot_calorie_budget: f64,
}

impl SlotContext {
    /// Context for `slot` with the given running totals and budget
    #[must_use]
    pub const fn new(slot: SlotType, day_totals: DayTotals, slot_calorie_budget: f64) -> Self {
        Self {
            slot: Some(slot),
            day_totals,
            slot_calorie_budget,
        }
    }

    /// Context that applies no slot-type restriction
    #[must_use]
    pub fn any_slot() -> Self {
        Self {
            slot: None,
            day_totals: DayTotals::default(),
            slot_calorie_budget: 0.0,
        }
    }
}
