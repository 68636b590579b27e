// ABOUTME: Plan-service commands for vibe-cli
// ABOUTME: Diet and workout plans, recommendations, meal search, and health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use tracing::info;
use vibe_fitness::external::{MealCategory, PlanServiceClient};
use vibe_fitness::health::AvailabilityGate;
use vibe_fitness::storage::StateStore;

use crate::helpers::display::{
    display_diet_plan, display_health, display_json, display_meals, display_recommendations,
    display_shopping_list, display_workout_plan,
};
use crate::helpers::state::{load_onboarded, profile_of};

async fn available_client() -> Result<PlanServiceClient> {
    let gate = AvailabilityGate::from_global_config();
    let health = gate.check().await;
    if !health.is_available() {
        bail!(
            "Plan service at {} is unavailable: {}",
            gate.client().base_url(),
            health.message
        );
    }
    Ok(gate.client().clone())
}

/// Request a diet plan at the derived calorie target
pub async fn diet(store: &dyn StateStore, with_shopping_list: bool, json: bool) -> Result<()> {
    let session = load_onboarded(store)?;
    let profile = profile_of(&session)?;
    let target = session
        .macros()
        .map(|m| m.calories)
        .ok_or_else(|| anyhow!("Macro targets were not derived"))?;

    let client = available_client().await?;
    info!(target_calories = target, "Requesting diet plan");
    let plan = client.generate_diet_plan(profile, target).await?;
    let shopping = if with_shopping_list {
        Some(client.shopping_list(&plan).await?)
    } else {
        None
    };

    if json {
        display_json(&plan)?;
        if let Some(list) = &shopping {
            display_json(list)?;
        }
        return Ok(());
    }

    display_diet_plan(&plan);
    if let Some(list) = &shopping {
        display_shopping_list(list);
    }
    Ok(())
}

/// Request a workout plan
pub async fn workout(store: &dyn StateStore, days: Option<u8>, json: bool) -> Result<()> {
    let session = load_onboarded(store)?;
    let profile = profile_of(&session)?;

    let client = available_client().await?;
    let plan = client.generate_workout_plan(profile, days).await?;

    if json {
        display_json(&plan)
    } else {
        display_workout_plan(&plan);
        Ok(())
    }
}

/// Request nutrition recommendations
pub async fn recommendations(store: &dyn StateStore, json: bool) -> Result<()> {
    let session = load_onboarded(store)?;
    let profile = profile_of(&session)?;

    let client = available_client().await?;
    let recommendations = client.recommendations(profile).await?;

    if json {
        display_json(&recommendations)
    } else {
        display_recommendations(&recommendations);
        Ok(())
    }
}

/// Search the meal database
pub async fn meals(category: MealCategory, restriction: Option<&str>, json: bool) -> Result<()> {
    let client = available_client().await?;
    let result = client.search_meals(category, restriction).await?;

    if json {
        display_json(&result)
    } else {
        display_meals(&result);
        Ok(())
    }
}

/// Probe the plan service
pub async fn health(json: bool) -> Result<()> {
    let gate = AvailabilityGate::from_global_config();
    let health = gate.check().await;

    if json {
        display_json(&health)
    } else {
        display_health(gate.client().base_url(), &health);
        Ok(())
    }
}
