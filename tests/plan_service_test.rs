// ABOUTME: Integration tests for the plan-service client and availability gate
// ABOUTME: Runs an in-process axum stand-in on an ephemeral port
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use vibe_fitness::errors::ErrorCode;
use vibe_fitness::external::plan_types::MealSlot;
use vibe_fitness::external::{MealCategory, PlanServiceClient};
use vibe_fitness::health::{AvailabilityGate, HealthStatus};
use vibe_fitness::models::{FitnessExperience, Goal};

mod common;

fn meal(slot: &str, name: &str, calories: f64) -> Value {
    json!({
        "type": slot,
        "name": name,
        "calories": calories,
        "protein": 30.0,
        "carbs": 40.0,
        "fats": 10.0,
        "ingredients": ["oats", "eggs"],
        "suitableFor": ["general"],
        "time": "15 mins"
    })
}

fn diet_plan_fixture(target_calories: &Value) -> Value {
    let day = |date: &str| {
        json!({
            "date": date,
            "meals": [meal("breakfast", "Oatmeal", 420.0), meal("dinner", "Salmon Bowl", 640.0)],
            "totalCalories": 1060.0,
            "macros": { "protein": 60.0, "carbs": 80.0, "fats": 20.0, "calories": 1060.0 }
        })
    };
    json!({
        "generatedAt": "2025-01-06T10:00:00.123456",
        "duration": "7 days",
        "targetCalories": target_calories,
        "goal": "maintenance",
        "medicalConsiderations": [],
        "dietaryNotes": ["Following Vegan diet"],
        "days": { "day_1": day("Monday, January 06"), "day_2": day("Tuesday, January 07"), "day_10": day("Wednesday, January 15") },
        "shoppingList": ["eggs", "oats"],
        "mealPrepTips": ["Batch cook grains"]
    })
}

fn workout_plan_fixture() -> Value {
    json!({
        "fitnessLevel": "beginner",
        "goal": "maintenance",
        "template": "general",
        "duration": "8 weeks",
        "frequency": 2,
        "durationPerSession": "45-60 mins",
        "weeklySchedule": {
            "Thursday": { "name": "Lower Body", "type": "strength", "duration": "50 mins",
                "exercises": [{ "name": "Squats", "sets": 3, "reps": "10-12" }], "notes": "" },
            "Monday": { "name": "Full Body", "type": "mixed", "duration": "45 mins",
                "exercises": [{ "name": "Plank", "sets": 3, "duration": "30 secs" }], "notes": "Easy start" }
        },
        "recoveryTips": ["Sleep 7-9 hours"],
        "warmUpCooldown": {
            "warmUp": { "duration": "5-10 minutes", "exercises": ["Jumping jacks"] },
            "coolDown": { "duration": "5-10 minutes", "exercises": ["Hamstring stretch"] }
        },
        "progressionStrategy": {
            "week1to2": "Learn form", "week3to4": "Add volume",
            "week5to6": "Add load", "week7to8": "Test", "tips": ["Log workouts"]
        },
        "medicalConsiderations": [],
        "generatedAt": "2025-01-06T10:00:00"
    })
}

async fn health_counting(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "status": "healthy",
        "timestamp": "2025-01-06T10:00:00.5",
        "service": "Vibe Fitness AI Backend",
        "cors": "enabled"
    }))
}

async fn diet_plan(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": diet_plan_fixture(&body["targetCalories"]),
        "generated_at": "2025-01-06T10:00:00"
    }))
}

async fn workout_plan(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["fitnessExperience"] != "beginner" || body["daysAvailable"] != 2 {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "unexpected request" })));
    }
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": workout_plan_fixture() })),
    )
}

async fn recommendations() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "personalizedTips": ["Eat enough protein"],
            "hydrationPlan": { "dailyTarget": "2.5L", "schedule": ["Morning: 500ml"], "tips": ["Carry a bottle"] },
            "supplementRecommendations": [{ "supplement": "Vitamin D", "dosage": "1000 IU", "reason": "Bone health" }],
            "trainingFoodPairing": { "preWorkout": ["Banana"], "postWorkout": ["Shake"], "timing": "30-60 mins before" }
        }
    }))
}

async fn meal_search(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("type").map(String::as_str) != Some("breakfast") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid meal type", "valid_types": ["breakfast", "lunch", "dinner", "snacks"] })),
        );
    }
    let vegan = params.get("restriction").map(String::as_str) == Some("vegan");
    let meals = if vegan {
        vec![json!({ "name": "Tofu Scramble", "calories": 300, "protein": 20, "carbs": 12, "fats": 18,
            "ingredients": ["tofu"], "suitableFor": ["vegan_friendly"] })]
    } else {
        vec![]
    };
    (
        StatusCode::OK,
        Json(json!({ "success": true, "mealType": "breakfast", "count": meals.len(), "meals": meals })),
    )
}

async fn calculate_nutrition(Json(body): Json<Value>) -> Json<Value> {
    let count = body["meals"].as_array().map_or(0, Vec::len);
    Json(json!({
        "success": true,
        "mealCount": count,
        "totals": { "calories": 1060.0, "protein": 60.0, "carbs": 80.0, "fats": 20.0 },
        "macroPercentages": { "protein": 22.6, "carbs": 30.2, "fats": 17.0 }
    }))
}

async fn shopping_list(Json(plan): Json<Value>) -> (StatusCode, Json<Value>) {
    if plan.get("days").is_none() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "No meal plan provided" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "count": 2,
            "items": ["eggs", "oats"],
            "categorized": { "Proteins": ["eggs"], "Grains": ["oats"], "Vegetables": [], "Fruits": [], "Dairy": [], "Other": [] }
        })),
    )
}

fn happy_router(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route("/api/health", get(health_counting))
        .route("/api/diet-plan", post(diet_plan))
        .route("/api/workout-plan", post(workout_plan))
        .route("/api/recommendations", post(recommendations))
        .route("/api/meal-search", get(meal_search))
        .route("/api/calculate-nutrition", post(calculate_nutrition))
        .route("/api/shopping-list", post(shopping_list))
        .with_state(hits)
}

async fn happy_client() -> (PlanServiceClient, Arc<AtomicUsize>) {
    common::init_test_logging();
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = common::spawn_plan_service(happy_router(hits.clone())).await;
    let client = PlanServiceClient::new(&common::plan_service_config(addr));
    (client, hits)
}

// ============================================================================
// Successful calls
// ============================================================================

#[tokio::test]
async fn test_generate_diet_plan() {
    let (client, _) = happy_client().await;

    let plan = client
        .generate_diet_plan(&common::reference_male(), 2594)
        .await
        .unwrap();

    assert!((plan.target_calories - 2594.0).abs() < f64::EPSILON);
    assert_eq!(plan.goal, Goal::Maintenance);
    assert_eq!(plan.days.len(), 3);
    assert!(plan.generated_at.is_some());

    let order: Vec<&str> = plan.days_in_order().iter().map(|(key, _)| *key).collect();
    assert_eq!(order, ["day_1", "day_2", "day_10"]);

    let first = plan.days_in_order()[0].1;
    assert_eq!(first.meals[0].slot, Some(MealSlot::Breakfast));
}

#[tokio::test]
async fn test_generate_workout_plan() {
    let (client, _) = happy_client().await;

    let plan = client
        .generate_workout_plan(&common::reference_male(), Some(2))
        .await
        .unwrap();

    assert_eq!(plan.fitness_level, FitnessExperience::Beginner);
    assert_eq!(plan.frequency, 2);
    assert_eq!(plan.progression_strategy.weeks_3_to_4, "Add volume");

    let days: Vec<&str> = plan
        .schedule_in_week_order()
        .iter()
        .map(|(day, _)| *day)
        .collect();
    assert_eq!(days, ["Monday", "Thursday"]);

    let monday = &plan.weekly_schedule["Monday"];
    assert_eq!(monday.kind, "mixed");
    assert_eq!(monday.exercises[0].duration.as_deref(), Some("30 secs"));
    assert!(monday.exercises[0].reps.is_none());
}

#[tokio::test]
async fn test_recommendations() {
    let (client, _) = happy_client().await;

    let recs = client
        .recommendations(&common::reference_female())
        .await
        .unwrap();

    assert_eq!(recs.hydration_plan.daily_target, "2.5L");
    assert_eq!(recs.supplement_recommendations[0].supplement, "Vitamin D");
    assert_eq!(recs.training_food_pairing.pre_workout, ["Banana"]);
}

#[tokio::test]
async fn test_search_meals_sends_restriction() {
    let (client, _) = happy_client().await;

    let vegan = client
        .search_meals(MealCategory::Breakfast, Some("vegan"))
        .await
        .unwrap();
    assert_eq!(vegan.meal_type, MealCategory::Breakfast);
    assert_eq!(vegan.count, 1);
    assert_eq!(vegan.meals[0].name, "Tofu Scramble");
    assert!(vegan.meals[0].slot.is_none());

    let unfiltered = client
        .search_meals(MealCategory::Breakfast, None)
        .await
        .unwrap();
    assert_eq!(unfiltered.count, 0);
}

#[tokio::test]
async fn test_calculate_nutrition_and_shopping_list() {
    let (client, _) = happy_client().await;
    let plan = client
        .generate_diet_plan(&common::reference_male(), 2594)
        .await
        .unwrap();

    let meals = plan.days_in_order()[0].1.meals.clone();
    let totals = client.calculate_nutrition(&meals).await.unwrap();
    assert_eq!(totals.meal_count, 2);
    assert!((totals.totals.calories - 1060.0).abs() < f64::EPSILON);

    let list = client.shopping_list(&plan).await.unwrap();
    assert_eq!(list.count, 2);
    assert_eq!(list.categorized["Proteins"], ["eggs"]);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_carries_service_message() {
    common::init_test_logging();
    let router = Router::new().route(
        "/api/diet-plan",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to generate diet plan", "details": "KeyError: 'goal'" })),
            )
        }),
    );
    let addr = common::spawn_plan_service(router).await;
    let client = PlanServiceClient::new(&common::plan_service_config(addr));

    let err = client
        .generate_diet_plan(&common::reference_male(), 2594)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(!err.is_unreachable());
    assert!(err.message.contains("Failed to generate diet plan"));
    assert_eq!(err.context.details["status"], 500);
    assert_eq!(err.context.details["details"], "KeyError: 'goal'");
}

#[tokio::test]
async fn test_success_false_is_service_error() {
    common::init_test_logging();
    let router = Router::new().route(
        "/api/recommendations",
        post(|| async { Json(json!({ "success": false, "message": "Profile incomplete" })) }),
    );
    let addr = common::spawn_plan_service(router).await;
    let client = PlanServiceClient::new(&common::plan_service_config(addr));

    let err = client
        .recommendations(&common::reference_male())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.ends_with("Profile incomplete"));
}

#[tokio::test]
async fn test_error_without_body_uses_generic_message() {
    common::init_test_logging();
    let router = Router::new().route(
        "/api/workout-plan",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let addr = common::spawn_plan_service(router).await;
    let client = PlanServiceClient::new(&common::plan_service_config(addr));

    let err = client
        .generate_workout_plan(&common::reference_male(), None)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.ends_with("Failed to generate workout plan"));
}

#[tokio::test]
async fn test_unknown_endpoint_is_service_error() {
    common::init_test_logging();
    let router = Router::new().fallback(|| async {
        (StatusCode::NOT_FOUND, Json(json!({ "error": "Endpoint not found" })))
    });
    let addr = common::spawn_plan_service(router).await;
    let client = PlanServiceClient::new(&common::plan_service_config(addr));

    let err = client
        .search_meals(MealCategory::Snacks, None)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.ends_with("Endpoint not found"));
}

#[tokio::test]
async fn test_unexpected_shape_is_serialization_error() {
    common::init_test_logging();
    let router = Router::new().route(
        "/api/diet-plan",
        post(|| async { Json(json!({ "success": true, "data": { "days": "soon" } })) }),
    );
    let addr = common::spawn_plan_service(router).await;
    let client = PlanServiceClient::new(&common::plan_service_config(addr));

    let err = client
        .generate_diet_plan(&common::reference_male(), 2594)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    common::init_test_logging();
    let addr = common::unused_addr().await;
    let client = PlanServiceClient::new(&common::plan_service_config(addr));

    let err = client.health_check().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.is_unreachable());
}

// ============================================================================
// Availability gate
// ============================================================================

#[tokio::test]
async fn test_gate_caches_probe_result() {
    let (client, hits) = happy_client().await;
    let gate = AvailabilityGate::new(client, Duration::from_secs(60));

    let first = gate.check().await;
    assert_eq!(first.status, HealthStatus::Healthy);
    assert_eq!(first.message, "Vibe Fitness AI Backend");
    assert!(gate.is_available().await);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    gate.invalidate().await;
    assert!(gate.is_available().await);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gate_with_zero_ttl_always_probes() {
    let (client, hits) = happy_client().await;
    let gate = AvailabilityGate::new(client, Duration::ZERO);

    gate.check().await;
    gate.check().await;
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gate_reports_unreachable_service() {
    common::init_test_logging();
    let addr = common::unused_addr().await;
    let gate = AvailabilityGate::new(
        PlanServiceClient::new(&common::plan_service_config(addr)),
        Duration::from_secs(60),
    );

    let health = gate.check().await;
    assert_eq!(health.status, HealthStatus::Unhealthy);
    assert!(!gate.is_available().await);
}

#[tokio::test]
async fn test_gate_reports_degraded_service() {
    common::init_test_logging();
    let router = Router::new().route(
        "/api/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": "warming up" }))) }),
    );
    let addr = common::spawn_plan_service(router).await;
    let gate = AvailabilityGate::new(
        PlanServiceClient::new(&common::plan_service_config(addr)),
        Duration::from_secs(60),
    );

    let health = gate.check().await;
    assert_eq!(health.status, HealthStatus::Degraded);
    assert!(health.message.ends_with("warming up"));
}

#[tokio::test]
async fn test_gate_treats_plain_text_health_as_healthy() {
    common::init_test_logging();
    let router = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/plain/health", get(|| async { StatusCode::OK }));
    let addr = common::spawn_plan_service(router).await;
    let gate = AvailabilityGate::new(
        PlanServiceClient::new(&common::plan_service_config(addr)),
        Duration::from_secs(60),
    );

    let health = gate.check().await;
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.message, "reachable");
    assert!(gate.is_available().await);

    let mut config = common::plan_service_config(addr);
    config.base_url = format!("http://{addr}/plain");
    let body = PlanServiceClient::new(&config).health_check().await.unwrap();
    assert!(body.status.is_empty());
    assert!(body.service.is_none());
}
