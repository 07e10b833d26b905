// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// ABOUTME: Targets command printing daily calorie and macro targets for a sex and goal
// ABOUTME: Ranged rules draw from the supplied RNG so a seed makes output reproducible

use crate::helpers::display::display_targets;
use anyhow::Result;
use nutriplan::models::{Goal, Sex};
use nutriplan_intelligence::calculate_daily_targets;
use rand::Rng;

pub fn targets<R: Rng + ?Sized>(sex: Sex, goal: Goal, json: bool, rng: &mut R) -> Result<()> {
    let targets = calculate_daily_targets(sex, goal, rng);
    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else {
        println!("Daily targets for {sex} / {goal}");
        display_targets(&targets);
    }
    Ok(())
}
