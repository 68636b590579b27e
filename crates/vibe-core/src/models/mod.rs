// ABOUTME: Core data models for profiles, macro targets, daily tasks, and session state
// ABOUTME: Re-exports every model type so callers import from `vibe_core::models`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data types shared by the derivation engine, the progression tracker,
//! and the storage layer.

mod nutrition;
mod profile;
mod session;
mod task;

pub use nutrition::MacroBreakdown;
pub use profile::{ActivityLevel, FitnessExperience, Gender, Goal, UserProfile};
pub use session::SessionState;
pub use task::{default_daily_tasks, DailyTask};
