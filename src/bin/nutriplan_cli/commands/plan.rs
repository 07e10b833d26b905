// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// ABOUTME: Plan and demo commands driving the planner against a JSON catalog
// ABOUTME: Resolves the catalog path from flags or config and renders results

use crate::helpers::display::{display_liked_meals, display_targets, display_weekly_plan};
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use nutriplan::catalog::JsonCatalog;
use nutriplan::config::{PlannerConfig, CATALOG_PATH_ENV};
use nutriplan::feedback::FeedbackStore;
use nutriplan::models::UserProfile;
use nutriplan::planner::MealPlanner;
use nutriplan::service::PlanService;
use nutriplan::store::InMemoryPlanStore;
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Load the catalog from `--catalog`, falling back to the configured path
pub fn resolve_catalog(flag: Option<PathBuf>, config: &PlannerConfig) -> Result<JsonCatalog> {
    let path = flag
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| anyhow!("no catalog given: pass --catalog or set {CATALOG_PATH_ENV}"))?;
    JsonCatalog::load(&path).with_context(|| format!("loading catalog {}", path.display()))
}

pub fn plan<R: Rng + ?Sized>(
    catalog: &JsonCatalog,
    profile: UserProfile,
    json: bool,
    rng: &mut R,
) -> Result<()> {
    let feedback = FeedbackStore::new();
    let planner = MealPlanner::new(Uuid::new_v4(), profile, &feedback, rng)?;
    let plan = planner.generate_weekly_plan(catalog.meals(), rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Targets");
    display_targets(planner.targets());
    println!();
    display_weekly_plan(&plan);
    Ok(())
}

pub fn demo<R: Rng + ?Sized>(
    catalog: JsonCatalog,
    profile: &UserProfile,
    like: &str,
    dislike: &str,
    config: PlannerConfig,
    json: bool,
    rng: &mut R,
) -> Result<()> {
    let service = PlanService::new(
        catalog,
        Arc::new(FeedbackStore::new()),
        InMemoryPlanStore::new(),
        config,
    );
    let user_id = Uuid::new_v4();
    let today = Local::now().date_naive();

    let demo = service.demo_before_after(user_id, profile, like, dislike, today, rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&demo)?);
        return Ok(());
    }

    println!("Before feedback");
    display_weekly_plan(&demo.before_plan);
    println!();
    println!(
        "Rated {} meal(s) matching '{like}' as 5 and {} matching '{dislike}' as 1",
        demo.liked_meal_ids.len(),
        demo.disliked_meal_ids.len()
    );
    display_liked_meals(&service.liked_meals(user_id)?);
    println!();
    println!("After feedback");
    display_weekly_plan(&demo.after_plan);
    Ok(())
}
