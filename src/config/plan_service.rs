// ABOUTME: Plan-service client configuration (base URL, timeouts, health cache TTL)
// ABOUTME: Defaults match the local development backend on port 5000
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the external plan-generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanServiceConfig {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    /// Whole-request timeout (seconds)
    pub timeout_secs: u64,
    /// TCP connect timeout (seconds)
    pub connect_timeout_secs: u64,
    /// How long a health probe result stays fresh (seconds)
    pub health_cache_ttl_secs: u64,
}

impl PlanServiceConfig {
    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Health cache TTL
    #[must_use]
    pub const fn health_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.health_cache_ttl_secs)
    }
}

impl Default for PlanServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_owned(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
            health_cache_ttl_secs: 30,
        }
    }
}
