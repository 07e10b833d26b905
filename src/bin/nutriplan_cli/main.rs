// ABOUTME: NutriPlan CLI - generate weekly meal plans and daily targets from the command line
// ABOUTME: Parses profile flags, loads the catalog, and prints plans as tables or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan a week for a vegetarian woman maintaining weight
//! nutriplan-cli plan --catalog meals.json --sex female --goal maintain --prefer vegetarian
//!
//! # Same plan, reproducible and as JSON
//! nutriplan-cli plan --catalog meals.json --sex female --goal maintain --seed 42 --json
//!
//! # Show the daily targets for a profile
//! nutriplan-cli targets --sex male --goal cut_muscle_gain
//!
//! # Plan before and after rating chicken up and salmon down
//! nutriplan-cli demo --catalog meals.json --like chicken --dislike salmon
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nutriplan::config::PlannerConfig;
use nutriplan::logging::LoggingConfig;
use nutriplan::models::{ActivityLevel, Goal, Sex, UserProfile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "NutriPlan weekly meal planner",
    long_about = "Generate goal-aware weekly meal plans from a JSON meal catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a seven-day meal plan
    Plan {
        /// JSON meal catalog (defaults to `NUTRIPLAN_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        profile: ProfileArgs,

        /// RNG seed for a reproducible plan (defaults to `NUTRIPLAN_SEED`)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the daily calorie and macro targets for a profile
    Targets {
        /// Biological sex (male, female, other)
        #[arg(long)]
        sex: Sex,

        /// Goal (maintain, bulk, `cut_muscle_gain`, other)
        #[arg(long)]
        goal: Goal,

        /// RNG seed for ranged targets
        #[arg(long)]
        seed: Option<u64>,

        /// Print the targets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Plan, rate meals by keyword, and plan again
    Demo {
        /// JSON meal catalog (defaults to `NUTRIPLAN_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Meals whose name contains this are rated 5
        #[arg(long, default_value = "chicken")]
        like: String,

        /// Meals whose name contains this are rated 1
        #[arg(long, default_value = "salmon")]
        dislike: String,

        /// RNG seed (defaults to `NUTRIPLAN_SEED`)
        #[arg(long)]
        seed: Option<u64>,

        /// Print both plans as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// Biological sex (male, female, other)
    #[arg(long)]
    sex: Sex,

    /// Goal (maintain, bulk, `cut_muscle_gain`, other)
    #[arg(long)]
    goal: Goal,

    /// Age in years (13 or older)
    #[arg(long, default_value = "30")]
    age: u32,

    /// Body weight in kg
    #[arg(long, default_value = "70")]
    weight: f64,

    /// Height in cm
    #[arg(long, default_value = "175")]
    height: f64,

    /// Activity level (sedentary, `lightly_active`, `moderately_active`, ...)
    #[arg(long, default_value = "moderately_active")]
    activity: ActivityLevel,

    /// Tag every meal must carry (repeatable)
    #[arg(long = "prefer")]
    preferences: Vec<String>,

    /// Allergy tag to exclude (repeatable)
    #[arg(long = "allergy")]
    allergies: Vec<String>,

    /// Category tag to exclude (repeatable)
    #[arg(long = "dislike-category")]
    disliked_categories: Vec<String>,
}

impl ProfileArgs {
    fn into_profile(self) -> UserProfile {
        UserProfile::new(self.age, self.sex, self.goal, self.weight, self.height)
            .with_activity_level(self.activity)
            .with_dietary_preferences(self.preferences)
            .with_allergies(self.allergies)
            .with_disliked_categories(self.disliked_categories)
    }
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = PlannerConfig::from_env()?;

    match cli.command {
        Command::Plan {
            catalog,
            profile,
            seed,
            json,
        } => {
            let mut rng = rng_from(seed.or(config.seed));
            let catalog = commands::plan::resolve_catalog(catalog, &config)?;
            commands::plan::plan(&catalog, profile.into_profile(), json, &mut rng)?;
        }
        Command::Targets {
            sex,
            goal,
            seed,
            json,
        } => {
            let mut rng = rng_from(seed.or(config.seed));
            commands::targets::targets(sex, goal, json, &mut rng)?;
        }
        Command::Demo {
            catalog,
            profile,
            like,
            dislike,
            seed,
            json,
        } => {
            let mut rng = rng_from(seed.or(config.seed));
            let catalog = commands::plan::resolve_catalog(catalog, &config)?;
            commands::plan::demo(
                catalog,
                &profile.into_profile(),
                &like,
                &dislike,
                config,
                json,
                &mut rng,
            )?;
        }
    }

    Ok(())
}
