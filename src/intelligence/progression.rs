// ABOUTME: Gamified progression tracking for daily tasks, points, and levels
// ABOUTME: Pure functions computing task toggles, progress updates, and level-up detection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Progression Tracker
//!
//! Levels are a pure function of cumulative points:
//! `level = floor(points / points_per_level) + 1`.
//!
//! Points are awarded only when a task goes from not completed to
//! completed. Un-completing a task does not take points back, so a user can
//! farm points by toggling a task repeatedly. Callers that want anti-farming
//! must add it on top of this module.
//!
//! Every function here returns new values and leaves its inputs untouched.

use crate::config::ProgressionConfig;
use std::time::Duration;
use tracing::debug;
use vibe_core::errors::{AppError, AppResult};
use vibe_core::models::DailyTask;

/// Level reached with the given cumulative points
///
/// A `points_per_level` of zero is treated as one.
#[must_use]
pub const fn level_for_points(total_points: u32, points_per_level: u32) -> u32 {
    let per_level = if points_per_level == 0 {
        1
    } else {
        points_per_level
    };
    (total_points / per_level).saturating_add(1)
}

/// Points still needed to reach the next level
///
/// Always in `[1, points_per_level]`; an exact multiple of `points_per_level`
/// returns the full `points_per_level`.
#[must_use]
pub const fn points_to_next_level(total_points: u32, points_per_level: u32) -> u32 {
    let per_level = if points_per_level == 0 {
        1
    } else {
        points_per_level
    };
    per_level - total_points % per_level
}

/// One-shot signal that a toggle crossed a level boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level before the toggle
    pub from: u32,
    /// Level after the toggle
    pub to: u32,
    /// How long callers should show a celebration (advisory)
    pub celebration: Duration,
}

/// Result of flipping a task's completion flag
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    /// Task list with the target task flipped
    pub tasks: Vec<DailyTask>,
    /// Cumulative points after any award
    pub total_points: u32,
    /// Completion flag of the target task after the flip
    pub completed: bool,
    /// Level derived from `total_points`
    pub level: u32,
    /// Present when `level` went up
    pub level_up: Option<LevelUp>,
}

fn task_index(tasks: &[DailyTask], task_id: &str) -> AppResult<usize> {
    tasks
        .iter()
        .position(|task| task.id == task_id)
        .ok_or_else(|| AppError::not_found(format!("Task {task_id}")).with_resource_id(task_id))
}

/// Flip the completion flag of one task and award points
///
/// not completed -> completed adds `points_per_task`; completed -> not
/// completed leaves points unchanged. No other task is touched.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no task has `task_id`
pub fn toggle_task(
    tasks: &[DailyTask],
    task_id: &str,
    total_points: u32,
    config: &ProgressionConfig,
) -> AppResult<ToggleOutcome> {
    let index = task_index(tasks, task_id)?;

    let mut updated = tasks.to_vec();
    let task = &mut updated[index];
    task.completed = !task.completed;
    let completed = task.completed;

    let new_points = if completed {
        total_points.saturating_add(config.points_per_task)
    } else {
        total_points
    };

    let old_level = level_for_points(total_points, config.points_per_level);
    let new_level = level_for_points(new_points, config.points_per_level);
    let level_up = (new_level > old_level).then(|| LevelUp {
        from: old_level,
        to: new_level,
        celebration: config.level_up_celebration(),
    });

    debug!(
        task_id,
        completed,
        points_before = total_points,
        points_after = new_points,
        level = new_level,
        leveled_up = level_up.is_some(),
        "Toggled daily task"
    );

    Ok(ToggleOutcome {
        tasks: updated,
        total_points: new_points,
        completed,
        level: new_level,
        level_up,
    })
}

/// Replace the `current` value of one task
///
/// The value is stored as given: no clamping, no change to `completed`, no
/// points. Clamping to `[0, goal]` is the caller's job.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no task has `task_id`
pub fn update_task_progress(
    tasks: &[DailyTask],
    task_id: &str,
    new_current: f64,
) -> AppResult<Vec<DailyTask>> {
    let index = task_index(tasks, task_id)?;

    let mut updated = tasks.to_vec();
    updated[index].current = new_current;
    Ok(updated)
}

/// Number of tasks marked completed
#[must_use]
pub fn completed_count(tasks: &[DailyTask]) -> usize {
    tasks.iter().filter(|task| task.completed).count()
}

/// Share of tasks marked completed, as a percentage (0 for an empty list)
#[must_use]
pub fn completion_percentage(tasks: &[DailyTask]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    completed_count(tasks) as f64 / tasks.len() as f64 * 100.0
}
