// ABOUTME: Configuration error types for tunable nutrition, progression, and plan-service settings
// ABOUTME: Defines error variants for invalid ranges, bad weights, and environment parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use std::env;
use thiserror::Error;
use vibe_core::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Values in the wrong order (e.g., activity factors not ascending)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Ratios don't sum to the required total (1.0)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
