// ABOUTME: Daily task commands for vibe-cli
// ABOUTME: Lists tasks, toggles completion, records progress, and shows the level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde_json::json;
use vibe_fitness::storage::StateStore;

use crate::helpers::display::{display_json, display_level, display_level_up, display_tasks};
use crate::helpers::state::{load_onboarded, persist};

/// List today's tasks with overall progress
pub fn list(store: &dyn StateStore, json: bool) -> Result<()> {
    let session = load_onboarded(store)?;
    if json {
        return display_json(&json!({
            "tasks": session.tasks(),
            "completed": session.completed_count(),
            "progressPercentage": session.progress_percentage(),
        }));
    }

    display_tasks(session.tasks(), session.progress_percentage());
    Ok(())
}

/// Flip a task and report any level-up
pub fn toggle(store: &dyn StateStore, id: &str, json: bool) -> Result<()> {
    let mut session = load_onboarded(store)?;
    let level_up = session.toggle_task(id)?;

    if json {
        display_json(&json!({
            "task": session.state().task(id),
            "totalPoints": session.total_points(),
            "currentLevel": session.level(),
            "levelUp": level_up.as_ref().map(|l| json!({ "from": l.from, "to": l.to })),
        }))?;
    } else {
        if let Some(task) = session.state().task(id) {
            let mark = if task.completed { "done" } else { "not done" };
            println!("{} {} is {mark}", task.emoji, task.title);
        }
        if let Some(level_up) = &level_up {
            display_level_up(level_up);
        }
        display_level(&session);
    }

    persist(store, session)
}

/// Record progress on a task
pub fn progress(store: &dyn StateStore, id: &str, value: f64, json: bool) -> Result<()> {
    let mut session = load_onboarded(store)?;
    let stored = session.update_task_progress(id, value)?;

    if json {
        display_json(&session.state().task(id))?;
    } else if let Some(task) = session.state().task(id) {
        println!(
            "{} {}: {stored}/{} {} ({:.0}%)",
            task.emoji,
            task.title,
            task.goal,
            task.unit,
            task.progress_percentage()
        );
    }

    persist(store, session)
}

/// Show level and points
pub fn level(store: &dyn StateStore, json: bool) -> Result<()> {
    let session = load_onboarded(store)?;
    if json {
        return display_json(&json!({
            "currentLevel": session.level(),
            "totalPoints": session.total_points(),
            "pointsToNextLevel": session.points_to_next_level(),
        }));
    }

    display_level(&session);
    Ok(())
}
