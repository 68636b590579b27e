// ABOUTME: Session controller owning the single mutable session state
// ABOUTME: Applies profile changes, task toggles, and progress updates through the pure engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Controller
//!
//! One owner for [`SessionState`]. Every mutation goes through a method here,
//! which calls the pure derivation and progression functions and writes the
//! result back. Nothing else holds a mutable reference to the state.

use crate::config::FitnessConfig;
use crate::intelligence::nutrition_calculator::calculate_macros;
use crate::intelligence::progression::{self, LevelUp};
use crate::logging::AppLogger;
use vibe_core::errors::{AppError, AppResult};
use vibe_core::models::{DailyTask, MacroBreakdown, SessionState, UserProfile};

/// Owner of the session state
#[derive(Debug, Clone)]
pub struct SessionController {
    state: SessionState,
    config: FitnessConfig,
}

impl SessionController {
    /// Start a fresh session for an onboarded profile using the global configuration
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self::with_config(profile, FitnessConfig::global().clone())
    }

    /// Start a fresh session with an explicit configuration
    #[must_use]
    pub fn with_config(profile: UserProfile, config: FitnessConfig) -> Self {
        let mut controller = Self {
            state: SessionState::default(),
            config,
        };
        controller.set_profile(profile);
        controller
    }

    /// Resume a persisted session using the global configuration
    #[must_use]
    pub fn from_state(state: SessionState) -> Self {
        Self::from_state_with_config(state, FitnessConfig::global().clone())
    }

    /// Resume a persisted session with an explicit configuration
    ///
    /// Macro targets are recomputed from the stored profile, and the level is
    /// re-derived from the stored points so the two can never disagree.
    #[must_use]
    pub fn from_state_with_config(mut state: SessionState, config: FitnessConfig) -> Self {
        state.macros = state
            .profile
            .as_ref()
            .map(|profile| calculate_macros(profile, &config.nutrition));
        state.current_level =
            progression::level_for_points(state.total_points, config.progression.points_per_level);
        Self { state, config }
    }

    /// Replace the profile and recompute macro targets
    pub fn set_profile(&mut self, profile: UserProfile) {
        let macros = calculate_macros(&profile, &self.config.nutrition);
        AppLogger::log_macro_derivation(&profile, &macros);
        self.state.profile = Some(profile);
        self.state.macros = Some(macros);
    }

    /// Flip a task's completion flag, awarding points on completion
    ///
    /// Returns the level-up signal when the award crossed a level boundary.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no task has `task_id`
    pub fn toggle_task(&mut self, task_id: &str) -> AppResult<Option<LevelUp>> {
        let outcome = progression::toggle_task(
            &self.state.daily_tasks,
            task_id,
            self.state.total_points,
            &self.config.progression,
        )?;

        AppLogger::log_task_toggle(task_id, outcome.completed, outcome.total_points);
        if let Some(level_up) = &outcome.level_up {
            AppLogger::log_level_up(level_up.from, level_up.to, outcome.total_points);
        }

        self.state.daily_tasks = outcome.tasks;
        self.state.total_points = outcome.total_points;
        self.state.current_level = outcome.level;
        Ok(outcome.level_up)
    }

    /// Record progress on a task, clamped to `[0, goal]`
    ///
    /// Returns the value actually stored.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no task has `task_id`
    pub fn update_task_progress(&mut self, task_id: &str, value: f64) -> AppResult<f64> {
        let clamped = self
            .state
            .task(task_id)
            .map(|task| task.clamp_progress(value))
            .ok_or_else(|| {
                AppError::not_found(format!("Task {task_id}")).with_resource_id(task_id)
            })?;

        self.state.daily_tasks =
            progression::update_task_progress(&self.state.daily_tasks, task_id, clamped)?;
        Ok(clamped)
    }

    /// Number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        progression::completed_count(&self.state.daily_tasks)
    }

    /// Percentage of today's tasks marked completed
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        progression::completion_percentage(&self.state.daily_tasks)
    }

    /// Points still needed for the next level
    #[must_use]
    pub const fn points_to_next_level(&self) -> u32 {
        progression::points_to_next_level(
            self.state.total_points,
            self.config.progression.points_per_level,
        )
    }

    /// Current level
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.state.current_level
    }

    /// Cumulative points
    #[must_use]
    pub const fn total_points(&self) -> u32 {
        self.state.total_points
    }

    /// Current macro targets
    #[must_use]
    pub const fn macros(&self) -> Option<&MacroBreakdown> {
        self.state.macros.as_ref()
    }

    /// Current profile
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.state.profile.as_ref()
    }

    /// Today's tasks
    #[must_use]
    pub fn tasks(&self) -> &[DailyTask] {
        &self.state.daily_tasks
    }

    /// Read-only view of the whole state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &FitnessConfig {
        &self.config
    }

    /// Give up ownership of the state (for persistence)
    #[must_use]
    pub fn into_state(self) -> SessionState {
        self.state
    }
}
