// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrition formula constants, progression thresholds, storage keys, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain. Tunable values also appear as defaults in the
//! root crate's configuration; the values here are the canonical defaults.

/// Energy density of macronutrients
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Goal-based caloric offsets (kcal/day)
pub mod goal_adjustments {
    /// Surplus applied when bulking
    pub const BULKING_KCAL: f64 = 300.0;
    /// Deficit applied when cutting
    pub const CUTTING_KCAL: f64 = -400.0;
    /// Maintenance applies no offset
    pub const MAINTENANCE_KCAL: f64 = 0.0;
}

/// Tags that trigger macro ratio overrides
pub mod tags {
    /// Medical condition tag for diabetes
    pub const DIABETES: &str = "Diabetes";
    /// Medical condition tag for hypertension
    pub const HYPERTENSION: &str = "Hypertension";
    /// Dietary restriction tag for a vegan diet
    pub const VEGAN: &str = "Vegan";
    /// Dietary restriction tag for a ketogenic diet
    pub const KETO: &str = "Keto";
}

/// Gamified progression constants
pub mod progression {
    use std::time::Duration;

    /// Points needed to advance one level
    pub const POINTS_PER_LEVEL: u32 = 100;
    /// Points awarded when a task is completed
    pub const POINTS_PER_TASK: u32 = 50;
    /// Level of a brand-new user
    pub const STARTING_LEVEL: u32 = 1;
    /// Advisory duration of the level-up celebration shown by callers
    pub const LEVEL_UP_CELEBRATION: Duration = Duration::from_secs(2);
}

/// Keys under which callers persist state
pub mod storage_keys {
    /// Profile record key
    pub const PROFILE: &str = "vibeFitnessProfile";
    /// Session record key (tasks, points, level)
    pub const SESSION: &str = "vibeFitnessState";
}

/// Service identifiers used in logs and errors
pub mod service_names {
    /// This library/CLI
    pub const VIBE_FITNESS: &str = "vibe-fitness";
    /// The external plan-generation collaborator
    pub const PLAN_SERVICE: &str = "plan-service";
}
