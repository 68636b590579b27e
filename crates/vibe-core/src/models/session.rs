// ABOUTME: Session state model holding profile, targets, daily tasks, points, and level
// ABOUTME: Serialized with camelCase keys so previously persisted sessions keep loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{default_daily_tasks, DailyTask, MacroBreakdown, UserProfile};
use crate::constants::progression::STARTING_LEVEL;
use serde::{Deserialize, Serialize};

/// Everything the app remembers between launches
///
/// Missing fields fall back to a fresh session, and unknown fields (such as
/// the old onboarding step counter) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    /// Onboarded profile, absent before onboarding
    pub profile: Option<UserProfile>,
    /// Targets derived from `profile`
    pub macros: Option<MacroBreakdown>,
    /// Today's tasks
    pub daily_tasks: Vec<DailyTask>,
    /// Current level, always >= 1
    pub current_level: u32,
    /// Cumulative points
    pub total_points: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            profile: None,
            macros: None,
            daily_tasks: default_daily_tasks(),
            current_level: STARTING_LEVEL,
            total_points: 0,
        }
    }
}

impl SessionState {
    /// Whether onboarding has completed
    #[must_use]
    pub const fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    /// Look up a task by id
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&DailyTask> {
        self.daily_tasks.iter().find(|task| task.id == id)
    }

    /// Number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.daily_tasks.iter().filter(|task| task.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = SessionState::default();

        assert!(!session.is_onboarded());
        assert_eq!(session.current_level, 1);
        assert_eq!(session.total_points, 0);
        assert_eq!(session.daily_tasks.len(), 6);
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn test_legacy_document_loads() {
        let json = r#"{"currentStep": "dashboard", "totalPoints": 150, "currentLevel": 2}"#;
        let session: SessionState = serde_json::from_str(json).unwrap();

        assert_eq!(session.total_points, 150);
        assert_eq!(session.current_level, 2);
        assert_eq!(session.daily_tasks.len(), 6);
        assert!(session.task("4").is_some());
    }
}
