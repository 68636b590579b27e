// ABOUTME: Progression configuration for task points and level thresholds
// ABOUTME: Points per completed task, points per level, and the level-up celebration duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vibe_core::constants::progression::{LEVEL_UP_CELEBRATION, POINTS_PER_LEVEL, POINTS_PER_TASK};

/// Gamified progression settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Points awarded when a task flips from not completed to completed
    pub points_per_task: u32,
    /// Points needed per level
    pub points_per_level: u32,
    /// Advisory duration of the level-up celebration (ms)
    pub level_up_celebration_ms: u64,
}

impl ProgressionConfig {
    /// Celebration duration as a `Duration`
    #[must_use]
    pub const fn level_up_celebration(&self) -> Duration {
        Duration::from_millis(self.level_up_celebration_ms)
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            points_per_task: POINTS_PER_TASK,
            points_per_level: POINTS_PER_LEVEL,
            level_up_celebration_ms: LEVEL_UP_CELEBRATION.as_millis() as u64,
        }
    }
}
