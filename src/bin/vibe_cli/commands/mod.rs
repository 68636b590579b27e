// ABOUTME: Re-exports command modules for vibe-cli
// ABOUTME: Provides access to profile, task, and plan-service commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod plan;
pub mod profile;
pub mod tasks;
