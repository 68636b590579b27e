// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, and an in-process plan-service stand-in
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `vibe_fitness`

use axum::Router;
use std::env;
use std::net::SocketAddr;
use std::sync::Once;
use tokio::net::TcpListener;
use vibe_fitness::config::{FitnessConfig, PlanServiceConfig};
use vibe_fitness::models::{ActivityLevel, Gender, Goal, UserProfile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 25-year-old moderately active male, 70 kg, 175 cm, maintenance
pub fn reference_male() -> UserProfile {
    UserProfile::new(
        175.0,
        70.0,
        25,
        Gender::Male,
        ActivityLevel::Moderate,
        Goal::Maintenance,
    )
}

/// Same body as [`reference_male`] but female
pub fn reference_female() -> UserProfile {
    UserProfile::new(
        175.0,
        70.0,
        25,
        Gender::Female,
        ActivityLevel::Moderate,
        Goal::Maintenance,
    )
}

/// Default configuration, independent of the process environment
pub fn default_config() -> FitnessConfig {
    FitnessConfig::default()
}

/// Serve `router` on an ephemeral localhost port and return its address
pub async fn spawn_plan_service(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Client configuration pointing at a local stand-in
pub fn plan_service_config(addr: SocketAddr) -> PlanServiceConfig {
    PlanServiceConfig {
        base_url: format!("http://{addr}/api"),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        health_cache_ttl_secs: 30,
    }
}

/// An address nothing listens on
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
