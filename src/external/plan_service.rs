// ABOUTME: HTTP client for the plan-generation service
// ABOUTME: Diet plans, workout plans, recommendations, meal search, nutrition totals, shopping lists
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Plan Service Client
//!
//! The plan service is an external collaborator that builds diet and workout
//! plans. This client only speaks its HTTP contract; it never retries, and
//! its timeouts come from [`PlanServiceConfig`].
//!
//! Failures map onto three error codes:
//! - connection refused or timed out: `ExternalServiceUnavailable`
//! - non-2xx status or `success: false`: `ExternalServiceError`, carrying the
//!   service's `message` (or `error`) field when it sent one
//! - a body that does not match the expected shape: `SerializationError`
//!
//! # Example
//! ```rust,no_run
//! use vibe_fitness::config::PlanServiceConfig;
//! use vibe_fitness::external::PlanServiceClient;
//! use vibe_fitness::external::plan_types::MealCategory;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PlanServiceClient::new(&PlanServiceConfig::default());
//! let breakfasts = client.search_meals(MealCategory::Breakfast, Some("vegan")).await?;
//! println!("{} vegan breakfasts", breakfasts.count);
//! # Ok(())
//! # }
//! ```

use super::plan_types::{
    ApiResponse, DietPlan, DietPlanRequest, Meal, MealCategory, MealSearchResult,
    NutritionTotals, NutritionTotalsRequest, Recommendations, RecommendationsRequest,
    ServiceErrorBody, ServiceHealthBody, ShoppingList, WorkoutPlan, WorkoutPlanRequest,
};
use crate::config::{FitnessConfig, PlanServiceConfig};
use crate::logging::AppLogger;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::debug;
use vibe_core::constants::service_names;
use vibe_core::errors::{AppError, AppResult};
use vibe_core::models::UserProfile;

/// Client for the plan-generation service
#[derive(Debug, Clone)]
pub struct PlanServiceClient {
    base_url: String,
    http_client: Client,
}

impl PlanServiceClient {
    /// Create a client from explicit configuration
    #[must_use]
    pub fn new(config: &PlanServiceConfig) -> Self {
        let http_client = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http_client,
        }
    }

    /// Create a client from the global configuration
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::new(&FitnessConfig::global().plan_service)
    }

    /// Service base URL, without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probe `GET /health`
    ///
    /// Any 2xx counts as healthy. The body is decoded when it matches
    /// [`ServiceHealthBody`]; a plain-text or empty body yields the default.
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` if the service cannot be reached,
    /// or `ExternalServiceError` if it answers with a non-2xx status
    pub async fn health_check(&self) -> AppResult<ServiceHealthBody> {
        let request = self.http_client.get(self.url("/health"));
        let body: Value = execute(request, "/health", "check service health").await?;
        Ok(serde_json::from_value(body).unwrap_or_default())
    }

    /// Generate a seven-day diet plan for `profile` at `target_calories`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, rejects the request,
    /// or answers with an unexpected body
    pub async fn generate_diet_plan(
        &self,
        profile: &UserProfile,
        target_calories: u32,
    ) -> AppResult<DietPlan> {
        let body = DietPlanRequest::from_profile(profile, target_calories);
        let envelope: ApiResponse<DietPlan> = self
            .post_json("/diet-plan", &body, "generate diet plan")
            .await?;
        unwrap_data(envelope, "/diet-plan")
    }

    /// Generate an eight-week workout plan for `profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, rejects the request,
    /// or answers with an unexpected body
    pub async fn generate_workout_plan(
        &self,
        profile: &UserProfile,
        days_available: Option<u8>,
    ) -> AppResult<WorkoutPlan> {
        let body = WorkoutPlanRequest::from_profile(profile, days_available);
        let envelope: ApiResponse<WorkoutPlan> = self
            .post_json("/workout-plan", &body, "generate workout plan")
            .await?;
        unwrap_data(envelope, "/workout-plan")
    }

    /// Fetch hydration, supplement, and meal-timing recommendations
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, rejects the request,
    /// or answers with an unexpected body
    pub async fn recommendations(&self, profile: &UserProfile) -> AppResult<Recommendations> {
        let body = RecommendationsRequest::from(profile);
        let envelope: ApiResponse<Recommendations> = self
            .post_json("/recommendations", &body, "get recommendations")
            .await?;
        unwrap_data(envelope, "/recommendations")
    }

    /// Search the meal database by category, optionally filtered by a dietary restriction
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, rejects the request,
    /// or answers with an unexpected body
    pub async fn search_meals(
        &self,
        category: MealCategory,
        restriction: Option<&str>,
    ) -> AppResult<MealSearchResult> {
        let mut query = vec![("type", category.as_str())];
        if let Some(restriction) = restriction.filter(|r| !r.is_empty()) {
            query.push(("restriction", restriction));
        }

        let request = self.http_client.get(self.url("/meal-search")).query(&query);
        execute(request, "/meal-search", "search meals").await
    }

    /// Total the nutrition facts of `meals`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty meal list, otherwise an error if the
    /// service is unreachable, rejects the request, or answers with an unexpected body
    pub async fn calculate_nutrition(&self, meals: &[Meal]) -> AppResult<NutritionTotals> {
        if meals.is_empty() {
            return Err(AppError::invalid_input("No meals provided"));
        }

        let body = NutritionTotalsRequest {
            meals: meals.to_vec(),
        };
        self.post_json("/calculate-nutrition", &body, "calculate nutrition")
            .await
    }

    /// Build a categorized shopping list from a diet plan
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, rejects the request,
    /// or answers with an unexpected body
    pub async fn shopping_list(&self, plan: &DietPlan) -> AppResult<ShoppingList> {
        self.post_json("/shopping-list", plan, "generate shopping list")
            .await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, action: &str) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.http_client.post(self.url(path)).json(body);
        execute(request, path, action).await
    }
}

async fn execute<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &str,
    action: &str,
) -> AppResult<T> {
    let started = Instant::now();
    let result = send_and_decode(request, endpoint, action).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match &result {
        Ok((status, _)) => {
            AppLogger::log_plan_service_call(endpoint, true, Some(*status), elapsed_ms);
        }
        Err(e) => {
            let status = e
                .context
                .details
                .get("status")
                .and_then(Value::as_u64)
                .and_then(|s| u16::try_from(s).ok());
            AppLogger::log_plan_service_call(endpoint, false, status, elapsed_ms);
        }
    }

    result.map(|(_, value)| value)
}

async fn send_and_decode<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &str,
    action: &str,
) -> AppResult<(u16, T)> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(&e, endpoint))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| transport_error(&e, endpoint))?;
    debug!(endpoint, status = status.as_u16(), bytes = text.len(), "Plan service response");

    // Error bodies are not always JSON; keep going with Null so the
    // generic message still applies
    let value: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

    let reported_failure = value.get("success").and_then(Value::as_bool) == Some(false);
    if !status.is_success() || reported_failure {
        return Err(service_error(&value, status.as_u16(), endpoint, action));
    }

    let decoded = serde_json::from_value(value).map_err(|e| {
        AppError::serialization(format!("Unexpected response from {endpoint}: {e}"))
            .with_resource_id(endpoint)
            .with_source(e)
    })?;
    Ok((status.as_u16(), decoded))
}

fn transport_error(error: &reqwest::Error, endpoint: &str) -> AppError {
    if error.is_connect() || error.is_timeout() {
        AppError::external_unavailable(service_names::PLAN_SERVICE, error.to_string())
            .with_resource_id(endpoint)
    } else {
        AppError::external_service(service_names::PLAN_SERVICE, error.to_string())
            .with_resource_id(endpoint)
    }
}

fn service_error(body: &Value, status: u16, endpoint: &str, action: &str) -> AppError {
    let parsed: ServiceErrorBody = serde_json::from_value(body.clone()).unwrap_or_default();
    let message = parsed
        .best_message()
        .map_or_else(|| format!("Failed to {action}"), str::to_owned);

    let mut details = json!({ "status": status });
    if let Some(extra) = &parsed.details {
        details["details"] = Value::String(extra.clone());
    }

    AppError::external_service(service_names::PLAN_SERVICE, message)
        .with_resource_id(endpoint)
        .with_details(details)
}

fn unwrap_data<T>(envelope: ApiResponse<T>, endpoint: &str) -> AppResult<T> {
    envelope.data.ok_or_else(|| {
        AppError::serialization(format!("Response from {endpoint} has no data"))
            .with_resource_id(endpoint)
    })
}
