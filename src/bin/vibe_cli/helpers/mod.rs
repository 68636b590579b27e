// ABOUTME: Re-exports helper modules for vibe-cli
// ABOUTME: Provides access to output formatting and stored-session utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod state;
