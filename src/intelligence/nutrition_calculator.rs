// ABOUTME: Nutrition derivation using the Mifflin-St Jeor equation and activity multipliers
// ABOUTME: BMR, TDEE, goal-adjusted calories, macro ratio selection, and gram targets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Calculator Module
//!
//! Derives daily calorie and macronutrient targets from a [`UserProfile`].
//! The derivation is a pure function of the profile and the configuration:
//! it never fails, never performs I/O, and never looks at task state.
//!
//! Malformed inputs (zero or negative weight, for example) are not rejected
//! here. They produce numerically meaningless targets, and negative values
//! saturate to zero in the integer [`MacroBreakdown`]. Call
//! [`UserProfile::validate`] first if that matters to the caller.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, FitnessConfig, GoalAdjustmentsConfig, MacroRatioConfig,
    MacroRatios, NutritionConfig,
};
use tracing::debug;
use vibe_core::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use vibe_core::models::{ActivityLevel, Gender, Goal, MacroBreakdown, UserProfile};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result is not rounded and not floored.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Male or Female
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    config.msj_weight_coef.mul_add(
        weight_kg,
        config.msj_height_coef.mul_add(
            height_cm,
            config
                .msj_age_coef
                .mul_add(f64::from(age), config.constant_for(gender)),
        ),
    )
}

/// BMR for a profile
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> f64 {
    calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
        config,
    )
}

/// Scale a BMR by the activity multiplier, rounded to a whole kcal
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn tdee_from_bmr(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    (bmr * config.factor_for(activity_level)).round()
}

/// Total Daily Energy Expenditure for a profile (whole kcal)
#[must_use]
pub fn calculate_tdee(profile: &UserProfile, config: &NutritionConfig) -> f64 {
    let bmr = calculate_bmr(profile, &config.bmr);
    tdee_from_bmr(bmr, profile.activity_level, &config.activity_factors)
}

/// Caloric offset for a goal
#[must_use]
pub const fn goal_adjustment(goal: Goal, config: &GoalAdjustmentsConfig) -> f64 {
    config.adjustment_for(goal)
}

/// Goal-adjusted daily calorie target (kcal)
#[must_use]
pub fn target_calories(profile: &UserProfile, config: &NutritionConfig) -> f64 {
    calculate_tdee(profile, config) + goal_adjustment(profile.goal, &config.goal_adjustments)
}

/// Pick macro ratios for a profile
///
/// Starts from the base ratios and walks the override rules in order. Every
/// rule whose tag is present replaces the ratios completely, so when several
/// tags are present the last matching rule wins.
#[must_use]
pub fn select_macro_ratios(profile: &UserProfile, config: &MacroRatioConfig) -> MacroRatios {
    config
        .overrides
        .iter()
        .rev()
        .find(|rule| rule.applies_to(profile))
        .map_or(config.base, |rule| rule.ratios)
}

/// Convert a calorie target and ratios into whole-number gram targets
///
/// Each macro is rounded independently:
/// - protein = round(calories x p / 4)
/// - carbs = round(calories x c / 4)
/// - fats = round(calories x f / 9)
///
/// Negative intermediate values saturate to zero.
#[must_use]
pub fn macros_from_ratios(calories: f64, ratios: &MacroRatios) -> MacroBreakdown {
    MacroBreakdown {
        calories: calories.round() as u32,
        protein_g: (calories * ratios.protein / KCAL_PER_GRAM_PROTEIN).round() as u32,
        carbs_g: (calories * ratios.carbs / KCAL_PER_GRAM_CARBS).round() as u32,
        fats_g: (calories * ratios.fats / KCAL_PER_GRAM_FAT).round() as u32,
    }
}

/// Derive the full daily targets with an explicit configuration
#[must_use]
pub fn calculate_macros(profile: &UserProfile, config: &NutritionConfig) -> MacroBreakdown {
    // Step 1: BMR
    let bmr = calculate_bmr(profile, &config.bmr);

    // Step 2: TDEE, rounded before the goal offset
    let tdee = tdee_from_bmr(bmr, profile.activity_level, &config.activity_factors);

    // Step 3: goal-adjusted calories
    let calories = tdee + goal_adjustment(profile.goal, &config.goal_adjustments);

    // Step 4: ratios, later overrides win
    let ratios = select_macro_ratios(profile, &config.macro_ratios);

    // Step 5: grams
    let macros = macros_from_ratios(calories, &ratios);

    debug!(
        bmr,
        tdee,
        activity_level = %profile.activity_level,
        goal = %profile.goal,
        protein_ratio = ratios.protein,
        carbs_ratio = ratios.carbs,
        fats_ratio = ratios.fats,
        calories = macros.calories,
        protein_g = macros.protein_g,
        carbs_g = macros.carbs_g,
        fats_g = macros.fats_g,
        "Derived daily macro targets"
    );

    macros
}

/// Derive the full daily targets using the global configuration
#[must_use]
pub fn derive_macros(profile: &UserProfile) -> MacroBreakdown {
    calculate_macros(profile, &FitnessConfig::global().nutrition)
}
