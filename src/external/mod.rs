// ABOUTME: External service clients
// ABOUTME: Typed contract and HTTP client for the plan-generation service

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External Service Clients
//!
//! The plan service is the only collaborator. The derivation engine and the
//! progression tracker never depend on it.

pub mod plan_service;
pub mod plan_types;

// Re-export commonly used types
pub use plan_service::PlanServiceClient;
pub use plan_types::{
    DietPlan, Meal, MealCategory, MealSearchResult, NutritionTotals, Recommendations,
    ServiceHealthBody, ShoppingList, WorkoutPlan,
};
