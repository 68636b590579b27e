// ABOUTME: Intelligence module for nutrition derivation and gamified progression
// ABOUTME: Pure, synchronous calculations with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! - `nutrition_calculator` turns a profile into daily calorie and macro targets
//! - `progression` awards points for completed tasks and derives levels

/// Daily calorie and macronutrient targets from a profile
pub mod nutrition_calculator;
/// Points, levels, and task toggles
pub mod progression;

pub use nutrition_calculator::{
    calculate_bmr, calculate_macros, calculate_mifflin_st_jeor, calculate_tdee, derive_macros,
    goal_adjustment, macros_from_ratios, select_macro_ratios, target_calories, tdee_from_bmr,
};
pub use progression::{
    completed_count, completion_percentage, level_for_points, points_to_next_level, toggle_task,
    update_task_progress, LevelUp, ToggleOutcome,
};
