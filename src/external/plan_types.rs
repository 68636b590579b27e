// ABOUTME: Typed request and response payloads for the plan-generation service
// ABOUTME: Diet plans, workout plans, recommendations, meal search, nutrition totals, shopping lists
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Plan Service Contract
//!
//! JSON uses camelCase keys. Responses are decoded into one type per
//! endpoint; nothing is passed around as an untyped map.

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use vibe_core::models::{ActivityLevel, FitnessExperience, Gender, Goal, UserProfile};

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /diet-plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRequest {
    /// Height (cm)
    pub height: f64,
    /// Weight (kg)
    pub weight: f64,
    /// Age (years)
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Body fat percentage, 0 when unknown
    pub body_fat_percentage: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Fitness goal
    pub goal: Goal,
    /// Medical condition tags
    pub medical_conditions: Vec<String>,
    /// Dietary restriction tags
    pub dietary_restrictions: Vec<String>,
    /// Daily calorie target the plan should hit
    pub target_calories: u32,
}

impl DietPlanRequest {
    /// Build from a profile and its derived calorie target
    #[must_use]
    pub fn from_profile(profile: &UserProfile, target_calories: u32) -> Self {
        Self {
            height: profile.height_cm,
            weight: profile.weight_kg,
            age: profile.age_years,
            gender: profile.gender,
            body_fat_percentage: profile.body_fat_percentage,
            activity_level: profile.activity_level,
            goal: profile.goal,
            medical_conditions: profile.medical_conditions.iter().cloned().collect(),
            dietary_restrictions: profile.dietary_restrictions.iter().cloned().collect(),
            target_calories,
        }
    }
}

/// Body of `POST /workout-plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanRequest {
    /// Training goal
    pub goal: String,
    /// Training experience
    pub fitness_experience: FitnessExperience,
    /// Weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Age (years)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Medical condition tags
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// Training days per week the user can commit to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_available: Option<u8>,
}

impl WorkoutPlanRequest {
    /// Build from a profile; missing experience is sent as beginner
    #[must_use]
    pub fn from_profile(profile: &UserProfile, days_available: Option<u8>) -> Self {
        Self {
            goal: profile.goal.as_str().to_owned(),
            fitness_experience: profile
                .fitness_experience
                .unwrap_or(FitnessExperience::Beginner),
            weight: Some(profile.weight_kg),
            height: Some(profile.height_cm),
            age: Some(profile.age_years),
            medical_conditions: profile.medical_conditions.iter().cloned().collect(),
            days_available,
        }
    }
}

/// Body of `POST /recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    /// Height (cm)
    pub height: f64,
    /// Weight (kg)
    pub weight: f64,
    /// Age (years)
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Fitness goal
    pub goal: Goal,
    /// Medical condition tags
    pub medical_conditions: Vec<String>,
    /// Dietary restriction tags
    pub dietary_restrictions: Vec<String>,
}

impl From<&UserProfile> for RecommendationsRequest {
    fn from(profile: &UserProfile) -> Self {
        Self {
            height: profile.height_cm,
            weight: profile.weight_kg,
            age: profile.age_years,
            gender: profile.gender,
            activity_level: profile.activity_level,
            goal: profile.goal,
            medical_conditions: profile.medical_conditions.iter().cloned().collect(),
            dietary_restrictions: profile.dietary_restrictions.iter().cloned().collect(),
        }
    }
}

/// Body of `POST /calculate-nutrition`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotalsRequest {
    /// Meals to total
    pub meals: Vec<Meal>,
}

/// Meal database category used by `GET /meal-search`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// Breakfast dishes
    Breakfast,
    /// Lunch dishes
    Lunch,
    /// Dinner dishes
    Dinner,
    /// Snacks
    Snacks,
}

impl MealCategory {
    /// Query-string value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// `{ success, data, generated_at }` wrapper used by the plan endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the service produced a result
    pub success: bool,
    /// Payload, absent on failure
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the service produced the payload
    #[serde(default, alias = "timestamp", skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<NaiveDateTime>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceErrorBody {
    /// Preferred human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Short error string
    #[serde(default)]
    pub error: Option<String>,
    /// Extra detail (exception text)
    #[serde(default)]
    pub details: Option<String>,
}

impl ServiceErrorBody {
    /// `message` if present, else `error`
    #[must_use]
    pub fn best_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceHealthBody {
    /// Reported status ("healthy")
    #[serde(default)]
    pub status: String,
    /// Server clock at response time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    /// Service display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

// ============================================================================
// Meals and diet plans
// ============================================================================

/// Slot a meal fills within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Between-meal snack
    Snack,
    /// Evening meal
    Dinner,
}

/// One dish with its nutrition facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Slot within the day (absent in search results)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<MealSlot>,
    /// Dish name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrate (g)
    pub carbs: f64,
    /// Fat (g)
    pub fats: f64,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Suitability tags such as `vegan_friendly`
    #[serde(default)]
    pub suitable_for: Vec<String>,
    /// Preparation time ("15 mins")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Macro totals for a set of meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrate (g)
    pub carbs: f64,
    /// Fat (g)
    pub fats: f64,
}

/// One day of a diet plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietDay {
    /// Display date ("Monday, January 06")
    pub date: String,
    /// Meals in serving order
    pub meals: Vec<Meal>,
    /// Sum of meal calories
    pub total_calories: f64,
    /// Sum of meal macros
    pub macros: MacroTotals,
}

/// Multi-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// When the plan was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<NaiveDateTime>,
    /// Plan length ("7 days")
    pub duration: String,
    /// Calorie target the plan was built for
    pub target_calories: f64,
    /// Goal the plan was built for
    pub goal: Goal,
    /// Notes derived from medical conditions
    #[serde(default)]
    pub medical_considerations: Vec<String>,
    /// Dietary restrictions echoed back
    #[serde(default)]
    pub dietary_notes: Vec<String>,
    /// Days keyed `day_1`, `day_2`, ...
    pub days: BTreeMap<String, DietDay>,
    /// Every distinct ingredient, sorted
    #[serde(default)]
    pub shopping_list: Vec<String>,
    /// Preparation advice
    #[serde(default)]
    pub meal_prep_tips: Vec<String>,
}

fn day_number(key: &str) -> u32 {
    key.rsplit('_')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(u32::MAX)
}

impl DietPlan {
    /// Days ordered by their numeric suffix (`day_2` before `day_10`)
    #[must_use]
    pub fn days_in_order(&self) -> Vec<(&str, &DietDay)> {
        let mut days: Vec<(&str, &DietDay)> =
            self.days.iter().map(|(k, v)| (k.as_str(), v)).collect();
        days.sort_by_key(|(key, _)| day_number(key));
        days
    }
}

/// Result of `GET /meal-search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSearchResult {
    /// Category searched
    pub meal_type: MealCategory,
    /// Number of meals returned
    pub count: usize,
    /// Matching meals
    pub meals: Vec<Meal>,
}

/// Share of energy per macro, in percent with one decimal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein share of energy (%)
    pub protein: f64,
    /// Carbohydrate share of energy (%)
    pub carbs: f64,
    /// Fat share of energy (%)
    pub fats: f64,
}

/// Result of `POST /calculate-nutrition`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    /// Number of meals totalled
    pub meal_count: usize,
    /// Summed nutrition facts
    pub totals: MacroTotals,
    /// Energy share per macro
    pub macro_percentages: MacroPercentages,
}

/// Result of `POST /shopping-list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Number of distinct items
    pub count: usize,
    /// Items, sorted
    pub items: Vec<String>,
    /// Items grouped by grocery category
    pub categorized: BTreeMap<String, Vec<String>>,
}

// ============================================================================
// Workout plans
// ============================================================================

/// One prescribed exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Rep range ("8-10")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Hold or work duration ("30-45 secs")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// One training day in the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Session name ("Upper Body")
    pub name: String,
    /// Session type ("mixed", "cardio", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Session length ("60 mins")
    pub duration: String,
    /// Exercises in order
    pub exercises: Vec<Exercise>,
    /// Coaching notes
    #[serde(default)]
    pub notes: String,
}

/// Warm-up or cool-down block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineBlock {
    /// Block length ("5-10 minutes")
    pub duration: String,
    /// Steps in order
    pub exercises: Vec<String>,
}

/// Warm-up and cool-down routines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmUpCooldown {
    /// Before training
    pub warm_up: RoutineBlock,
    /// After training
    pub cool_down: RoutineBlock,
}

/// Two-week phases of an eight-week program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionStrategy {
    /// Weeks 1-2
    #[serde(rename = "week1to2")]
    pub weeks_1_to_2: String,
    /// Weeks 3-4
    #[serde(rename = "week3to4")]
    pub weeks_3_to_4: String,
    /// Weeks 5-6
    #[serde(rename = "week5to6")]
    pub weeks_5_to_6: String,
    /// Weeks 7-8
    #[serde(rename = "week7to8")]
    pub weeks_7_to_8: String,
    /// General advice
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Multi-week training program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Assessed experience level
    pub fitness_level: FitnessExperience,
    /// Goal the program targets
    pub goal: String,
    /// Template the service picked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Program length ("8 weeks")
    pub duration: String,
    /// Sessions per week
    pub frequency: u32,
    /// Session length range ("45-60 mins")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_per_session: Option<String>,
    /// Sessions keyed by weekday name
    pub weekly_schedule: BTreeMap<String, WorkoutDay>,
    /// Recovery advice
    #[serde(default)]
    pub recovery_tips: Vec<String>,
    /// Warm-up and cool-down routines
    pub warm_up_cooldown: WarmUpCooldown,
    /// Phase-by-phase progression
    pub progression_strategy: ProgressionStrategy,
    /// Advice derived from medical conditions
    #[serde(default)]
    pub medical_considerations: Vec<String>,
    /// When the plan was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<NaiveDateTime>,
}

impl WorkoutPlan {
    /// Schedule ordered Monday to Sunday; unrecognized day names go last
    #[must_use]
    pub fn schedule_in_week_order(&self) -> Vec<(&str, &WorkoutDay)> {
        let mut days: Vec<(&str, &WorkoutDay)> = self
            .weekly_schedule
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        days.sort_by_key(|(name, _)| {
            Weekday::from_str(name).map_or(u32::MAX, |day| day.num_days_from_monday())
        });
        days
    }
}

// ============================================================================
// Recommendations
// ============================================================================

/// Daily hydration guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationPlan {
    /// Target volume ("2.9L")
    pub daily_target: String,
    /// When to drink
    pub schedule: Vec<String>,
    /// General advice
    pub tips: Vec<String>,
}

/// A suggested supplement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementRecommendation {
    /// Supplement name
    pub supplement: String,
    /// Suggested dose
    pub dosage: String,
    /// Why it is suggested
    pub reason: String,
}

/// Food timing around workouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingFoodPairing {
    /// Before training
    pub pre_workout: Vec<String>,
    /// After training
    pub post_workout: Vec<String>,
    /// Summary of the timing windows
    pub timing: String,
}

/// Personalized nutrition recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    /// Goal-specific tips
    pub personalized_tips: Vec<String>,
    /// Hydration guidance
    pub hydration_plan: HydrationPlan,
    /// Supplement suggestions
    pub supplement_recommendations: Vec<SupplementRecommendation>,
    /// Food timing around workouts
    pub training_food_pairing: TrainingFoodPairing,
}
