// ABOUTME: Main library entry point for the Vibe Fitness engine
// ABOUTME: Nutrition target derivation, daily task progression, persistence, and plan-service access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vibe Fitness
//!
//! Turns a user's physical profile into daily calorie and macronutrient
//! targets, and tracks a small gamified checklist of daily tasks that award
//! points and levels.
//!
//! ## Architecture
//!
//! - **intelligence**: Pure calculations (BMR, TDEE, macro split, points and levels)
//! - **session**: The single owner of mutable session state
//! - **storage**: Profile and session persistence
//! - **external**: Typed client for the plan-generation service
//! - **health**: Cached availability check in front of that service
//! - **config**: Tunable constants with environment overrides
//! - **logging**: `tracing` setup and structured domain events
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vibe_fitness::models::{ActivityLevel, Gender, Goal, UserProfile};
//! use vibe_fitness::session::SessionController;
//!
//! let profile = UserProfile::new(175.0, 70.0, 25, Gender::Male, ActivityLevel::Moderate, Goal::Maintenance);
//! let mut session = SessionController::new(profile);
//!
//! if let Some(macros) = session.macros() {
//!     println!("{} kcal, {} g protein", macros.calories, macros.protein_g);
//! }
//! let level_up = session.toggle_task("1");
//! ```

/// Tunable constants with environment overrides and validation
pub mod config;

/// Typed client for the plan-generation service
pub mod external;

/// Cached availability check for the plan service
pub mod health;

/// Nutrition derivation and progression arithmetic
pub mod intelligence;

/// Logging configuration and structured domain events
pub mod logging;

/// Session controller
pub mod session;

/// Profile and session persistence
pub mod storage;

/// Unified error handling (re-exported from `vibe-core`)
pub mod errors {
    pub use vibe_core::errors::*;
}

/// Constants (re-exported from `vibe-core`)
pub mod constants {
    pub use vibe_core::constants::*;
}

/// Data models (re-exported from `vibe-core`)
pub mod models {
    pub use vibe_core::models::*;
}
