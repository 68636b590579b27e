// ABOUTME: Configuration for the derivation engine, progression tracker, and plan-service client
// ABOUTME: Defaults, environment overrides, validation, and a process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness Configuration Module
//!
//! Type-safe configuration for every tunable number in the crate.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, goal offsets, macro ratio rules
//! - `progression` - points per task and per level
//! - `plan_service` - base URL and timeouts for the plan-generation collaborator
//!
//! # Environment Overrides
//!
//! ```bash
//! export VIBE_POINTS_PER_TASK=50
//! export VIBE_POINTS_PER_LEVEL=100
//! export VIBE_BULKING_ADJUSTMENT_KCAL=300
//! export VIBE_CUTTING_ADJUSTMENT_KCAL=-400
//! export VIBE_PLAN_SERVICE_URL=http://localhost:5000/api
//! export VIBE_PLAN_SERVICE_TIMEOUT_SECS=30
//! export VIBE_PLAN_SERVICE_CONNECT_TIMEOUT_SECS=5
//! export VIBE_HEALTH_CACHE_TTL_SECS=30
//! ```

pub mod error;
pub mod nutrition;
pub mod plan_service;
pub mod progression;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroRatioConfig, MacroRatios,
    NutritionConfig, OverrideSource, RatioOverride,
};
pub use plan_service::PlanServiceConfig;
pub use progression::ProgressionConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static FITNESS_CONFIG: OnceLock<FitnessConfig> = OnceLock::new();

/// Upper bound for any plan-service timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 120;

/// Upper bound for the health cache TTL (seconds)
const MAX_HEALTH_CACHE_TTL_SECS: u64 = 3600;

/// Main configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitnessConfig {
    /// Nutrition derivation settings
    pub nutrition: NutritionConfig,
    /// Points and levels
    pub progression: ProgressionConfig,
    /// Plan-service client settings
    pub plan_service: PlanServiceConfig,
}

impl FitnessConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        FITNESS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load fitness config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_progression()?;
        self.validate_plan_service()
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = nutr.activity_factors.ordered();
        if factors.iter().any(|f| !(1.0..=2.5).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &nutr.goal_adjustments;
        if goals.bulking_kcal < 0.0 || goals.cutting_kcal > 0.0 {
            return Err(ConfigError::InvalidRange(
                "Bulking must add calories and cutting must remove them",
            ));
        }

        nutr.macro_ratios.validate()
    }

    fn validate_progression(&self) -> Result<(), ConfigError> {
        if self.progression.points_per_task == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Points per task must be at least 1",
            ));
        }
        if self.progression.points_per_level == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Points per level must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_plan_service(&self) -> Result<(), ConfigError> {
        let svc = &self.plan_service;

        if svc.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("plan_service.base_url"));
        }
        if !(svc.base_url.starts_with("http://") || svc.base_url.starts_with("https://")) {
            return Err(ConfigError::Parse(format!(
                "Plan service URL must be http(s): {}",
                svc.base_url
            )));
        }
        if !(1..=MAX_TIMEOUT_SECS).contains(&svc.timeout_secs)
            || !(1..=MAX_TIMEOUT_SECS).contains(&svc.connect_timeout_secs)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Plan service timeouts must be between 1 and 120 seconds",
            ));
        }
        if svc.connect_timeout_secs > svc.timeout_secs {
            return Err(ConfigError::InvalidRange(
                "Connect timeout must not exceed the request timeout",
            ));
        }
        if svc.health_cache_ttl_secs > MAX_HEALTH_CACHE_TTL_SECS {
            return Err(ConfigError::ValueOutOfRange(
                "Health cache TTL must be at most 3600 seconds",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("VIBE_POINTS_PER_TASK", &mut self.progression.points_per_task)?;
        Self::apply_env_var(
            "VIBE_POINTS_PER_LEVEL",
            &mut self.progression.points_per_level,
        )?;
        Self::apply_env_var(
            "VIBE_BULKING_ADJUSTMENT_KCAL",
            &mut self.nutrition.goal_adjustments.bulking_kcal,
        )?;
        Self::apply_env_var(
            "VIBE_CUTTING_ADJUSTMENT_KCAL",
            &mut self.nutrition.goal_adjustments.cutting_kcal,
        )?;
        Self::apply_env_var("VIBE_PLAN_SERVICE_URL", &mut self.plan_service.base_url)?;
        Self::apply_env_var(
            "VIBE_PLAN_SERVICE_TIMEOUT_SECS",
            &mut self.plan_service.timeout_secs,
        )?;
        Self::apply_env_var(
            "VIBE_PLAN_SERVICE_CONNECT_TIMEOUT_SECS",
            &mut self.plan_service.connect_timeout_secs,
        )?;
        Self::apply_env_var(
            "VIBE_HEALTH_CACHE_TTL_SECS",
            &mut self.plan_service.health_cache_ttl_secs,
        )?;

        Ok(self)
    }
}
