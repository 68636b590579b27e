// ABOUTME: Daily macronutrient target model produced by the derivation engine
// ABOUTME: Whole-number calories and grams, serialized with the persisted key names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};

/// Daily calorie and macronutrient targets
///
/// All four values are whole numbers. `calories` is the goal-adjusted TDEE;
/// the gram values are each rounded independently, so the energy they add up
/// to can drift a few kcal away from `calories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Target energy intake (kcal/day)
    pub calories: u32,
    /// Protein target (g/day)
    #[serde(rename = "protein")]
    pub protein_g: u32,
    /// Carbohydrate target (g/day)
    #[serde(rename = "carbs")]
    pub carbs_g: u32,
    /// Fat target (g/day)
    #[serde(rename = "fats")]
    pub fats_g: u32,
}

impl MacroBreakdown {
    /// Energy implied by the rounded gram targets (4/4/9 kcal per gram)
    #[must_use]
    pub fn macro_kcal(&self) -> f64 {
        f64::from(self.fats_g).mul_add(
            KCAL_PER_GRAM_FAT,
            f64::from(self.protein_g)
                .mul_add(KCAL_PER_GRAM_PROTEIN, f64::from(self.carbs_g) * KCAL_PER_GRAM_CARBS),
        )
    }

    /// Signed difference between macro energy and the calorie target
    #[must_use]
    pub fn rounding_drift_kcal(&self) -> f64 {
        self.macro_kcal() - f64::from(self.calories)
    }
}
