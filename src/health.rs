// ABOUTME: Availability gate for the plan service with a cached health probe
// ABOUTME: Lets callers decide whether plan features are usable before calling them
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Plan service availability checks

use crate::config::FitnessConfig;
use crate::external::PlanServiceClient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service answered `/health` with a 2xx
    Healthy,
    /// Service answered, but with an error status
    Degraded,
    /// Service could not be reached
    Unhealthy,
}

/// Result of one health probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Probe outcome
    pub status: HealthStatus,
    /// When the probe ran
    pub checked_at: DateTime<Utc>,
    /// Probe round-trip in milliseconds
    pub response_time_ms: u64,
    /// Service name on success, error text otherwise
    pub message: String,
}

impl ServiceHealth {
    /// Whether plan features can be offered
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Cached health probe in front of a [`PlanServiceClient`]
pub struct AvailabilityGate {
    client: PlanServiceClient,
    /// Cached health status
    cached_status: RwLock<Option<(ServiceHealth, Instant)>>,
    /// Cache TTL
    cache_ttl: Duration,
}

impl AvailabilityGate {
    /// Wrap `client`, caching probe results for `cache_ttl`
    #[must_use]
    pub fn new(client: PlanServiceClient, cache_ttl: Duration) -> Self {
        Self {
            client,
            cached_status: RwLock::new(None),
            cache_ttl,
        }
    }

    /// Build a gate and client from the global configuration
    #[must_use]
    pub fn from_global_config() -> Self {
        let config = &FitnessConfig::global().plan_service;
        Self::new(PlanServiceClient::new(config), config.health_cache_ttl())
    }

    /// Wrapped client
    #[must_use]
    pub const fn client(&self) -> &PlanServiceClient {
        &self.client
    }

    /// Probe the service unless a fresh result is cached
    pub async fn check(&self) -> ServiceHealth {
        {
            let cached = self.cached_status.read().await;
            if let Some((health, cached_at)) = cached.as_ref() {
                if cached_at.elapsed() < self.cache_ttl {
                    return health.clone();
                }
            }
        }

        let health = self.probe().await;

        {
            let mut cached = self.cached_status.write().await;
            *cached = Some((health.clone(), Instant::now()));
        }

        health
    }

    /// Whether plan features can be offered right now
    pub async fn is_available(&self) -> bool {
        self.check().await.is_available()
    }

    /// Drop the cached result so the next check probes again
    pub async fn invalidate(&self) {
        *self.cached_status.write().await = None;
    }

    async fn probe(&self) -> ServiceHealth {
        let start = Instant::now();
        let result = self.client.health_check().await;
        let response_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (status, message) = match result {
            Ok(body) => {
                info!(response_time_ms, "Plan service is healthy");
                let name = body
                    .service
                    .filter(|s| !s.is_empty())
                    .or_else(|| Some(body.status).filter(|s| !s.is_empty()))
                    .unwrap_or_else(|| "reachable".to_owned());
                (HealthStatus::Healthy, name)
            }
            Err(e) if e.is_unreachable() => {
                warn!(error = %e, "Plan service is unreachable");
                (HealthStatus::Unhealthy, e.message)
            }
            Err(e) => {
                warn!(error = %e, "Plan service health check failed");
                (HealthStatus::Degraded, e.message)
            }
        };

        ServiceHealth {
            status,
            checked_at: Utc::now(),
            response_time_ms,
            message,
        }
    }
}
