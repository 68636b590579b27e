// ABOUTME: Daily task model and the fixed six-task catalog every session starts from
// ABOUTME: Progress percentage and clamping helpers used by the progression tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A daily habit the user works towards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTask {
    /// Stable identifier, unique within a session
    pub id: String,
    /// Display title
    pub title: String,
    /// Target quantity, always > 0
    pub goal: f64,
    /// Quantity achieved so far
    pub current: f64,
    /// Unit of `goal` and `current` (g, ml, hours, ...)
    pub unit: String,
    /// Completion flag, toggled by the user independently of `current`
    pub completed: bool,
    /// Icon identifier for rendering
    pub icon: String,
    /// Emoji shown next to the title
    pub emoji: String,
}

impl DailyTask {
    fn catalog_entry(
        id: &str,
        title: &str,
        goal: f64,
        unit: &str,
        icon: &str,
        emoji: &str,
    ) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            goal,
            current: 0.0,
            unit: unit.to_owned(),
            completed: false,
            icon: icon.to_owned(),
            emoji: emoji.to_owned(),
        }
    }

    /// Progress toward the goal as a percentage capped at 100
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        (self.current / self.goal * 100.0).clamp(0.0, 100.0)
    }

    /// Whether `current` has reached `goal`
    ///
    /// This does not imply `completed`: completion is user-asserted.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.current >= self.goal
    }

    /// Clamp a proposed progress value into `[0, goal]`
    #[must_use]
    pub fn clamp_progress(&self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.goal.max(0.0))
    }
}

/// The six-task catalog a fresh session starts with
///
/// Ids are "1" through "6"; all tasks start at `current = 0`, not completed.
#[must_use]
pub fn default_daily_tasks() -> Vec<DailyTask> {
    vec![
        DailyTask::catalog_entry("1", "Hit Protein Goal", 150.0, "g", "target", "🥩"),
        DailyTask::catalog_entry("2", "Complete Workout", 1.0, "session", "activity", "💪"),
        DailyTask::catalog_entry("3", "Drink 3L Water", 3000.0, "ml", "droplet", "💧"),
        DailyTask::catalog_entry("4", "Sleep 8 Hours", 8.0, "hours", "moon", "😴"),
        DailyTask::catalog_entry("5", "Track Meals", 3.0, "meals", "utensils", "🍽️"),
        DailyTask::catalog_entry("6", "Stretch & Mobility", 1.0, "session", "flex", "🧘"),
    ]
}
