// ABOUTME: Nutrition configuration for daily calorie and macro target derivation
// ABOUTME: Configures BMR coefficients, activity multipliers, goal offsets, and macro ratio rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Derivation Configuration
//!
//! Every number the derivation engine uses lives here so that it can be
//! inspected, overridden from the environment, and validated in one place.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use vibe_core::constants::{goal_adjustments, tags};
use vibe_core::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Tolerance used when checking that ratios sum to 1.0
const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// Nutrition Derivation Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Caloric offsets per goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Base macro ratios and tag-driven overrides
    pub macro_ratios: MacroRatioConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant term
    #[must_use]
    pub const fn constant_for(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training or physical job): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Factors in ascending activity order
    #[must_use]
    pub const fn ordered(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ]
    }
}

/// Caloric offsets (kcal/day) applied to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Surplus when bulking (+300)
    pub bulking_kcal: f64,
    /// Deficit when cutting (-400)
    pub cutting_kcal: f64,
    /// Offset at maintenance (0)
    pub maintenance_kcal: f64,
}

impl GoalAdjustmentsConfig {
    /// Offset for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Bulking => self.bulking_kcal,
            Goal::Cutting => self.cutting_kcal,
            Goal::Maintenance => self.maintenance_kcal,
        }
    }
}

/// Fractions of target calories assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Protein fraction
    pub protein: f64,
    /// Carbohydrate fraction
    pub carbs: f64,
    /// Fat fraction
    pub fats: f64,
}

impl MacroRatios {
    /// Create a ratio triple
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }

    /// Sum of the three fractions
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// Check that all fractions are non-negative and sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a fraction is negative or the sum is off
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.protein < 0.0 || self.carbs < 0.0 || self.fats < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Macro ratios must be non-negative",
            ));
        }
        if (self.sum() - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("Macro ratios must sum to 1.0"));
        }
        Ok(())
    }
}

/// Which list on the profile an override rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideSource {
    /// `UserProfile::medical_conditions`
    MedicalCondition,
    /// `UserProfile::dietary_restrictions`
    DietaryRestriction,
}

/// Replace the macro ratios when the profile carries a tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioOverride {
    /// List the tag is looked up in
    pub source: OverrideSource,
    /// Tag to match (exact, case-sensitive)
    pub tag: String,
    /// Ratios used when the tag matches
    pub ratios: MacroRatios,
}

impl RatioOverride {
    /// Create an override rule
    #[must_use]
    pub fn new(source: OverrideSource, tag: &str, ratios: MacroRatios) -> Self {
        Self {
            source,
            tag: tag.to_owned(),
            ratios,
        }
    }

    /// Whether this rule fires for the profile
    #[must_use]
    pub fn applies_to(&self, profile: &UserProfile) -> bool {
        match self.source {
            OverrideSource::MedicalCondition => profile.has_medical_condition(&self.tag),
            OverrideSource::DietaryRestriction => profile.has_dietary_restriction(&self.tag),
        }
    }
}

/// Macro ratio selection: a base triple plus overrides evaluated in order
///
/// Every matching override replaces the current ratios outright, so the last
/// match wins. Ratios are never blended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatioConfig {
    /// Ratios used when no override matches
    pub base: MacroRatios,
    /// Override rules in evaluation order
    pub overrides: Vec<RatioOverride>,
}

impl MacroRatioConfig {
    /// Validate the base ratios and every override
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for the first ratio triple that is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base.validate()?;
        for rule in &self.overrides {
            if rule.tag.trim().is_empty() {
                return Err(ConfigError::MissingField("macro ratio override tag"));
            }
            rule.ratios.validate()?;
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            bulking_kcal: goal_adjustments::BULKING_KCAL,
            cutting_kcal: goal_adjustments::CUTTING_KCAL,
            maintenance_kcal: goal_adjustments::MAINTENANCE_KCAL,
        }
    }
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            base: MacroRatios::new(0.30, 0.45, 0.25),
            overrides: vec![
                RatioOverride::new(
                    OverrideSource::MedicalCondition,
                    tags::DIABETES,
                    MacroRatios::new(0.35, 0.35, 0.30),
                ),
                RatioOverride::new(
                    OverrideSource::MedicalCondition,
                    tags::HYPERTENSION,
                    MacroRatios::new(0.35, 0.40, 0.25),
                ),
                RatioOverride::new(
                    OverrideSource::DietaryRestriction,
                    tags::VEGAN,
                    MacroRatios::new(0.35, 0.45, 0.20),
                ),
                RatioOverride::new(
                    OverrideSource::DietaryRestriction,
                    tags::KETO,
                    MacroRatios::new(0.25, 0.05, 0.70),
                ),
            ],
        }
    }
}
