// ABOUTME: Core types and constants for the Vibe Fitness derivation and progression engine
// ABOUTME: Foundation crate with error handling, profile, task, and session models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vibe Core
//!
//! Foundation crate providing shared types and constants for the Vibe Fitness
//! nutrition and progression engine. It holds no logic beyond small helpers on
//! the data types, so it changes rarely and compiles once for the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Nutrition, progression, and storage constants
//! - **models**: `UserProfile`, `MacroBreakdown`, `DailyTask`, and `SessionState`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, macro targets, daily tasks, session state)
pub mod models;
