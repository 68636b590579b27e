// ABOUTME: User profile model and its closed enumerations (gender, activity level, goal)
// ABOUTME: Lenient parsing for activity level and goal with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Biological sex used by the Mifflin-St Jeor equation
///
/// Closed two-value set: unknown values are rejected, never defaulted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}' (expected male or female)"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level used to scale BMR into TDEE
///
/// Deserialization is lenient: an unrecognized value becomes [`ActivityLevel::Moderate`]
/// and a warning is logged. Use [`FromStr`] to reject unknown values instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week (fallback for unknown values)
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels in ascending order of energy expenditure
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    fn parse_known(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }

    /// Parse, falling back to `Moderate` (1.55 multiplier) for unrecognized input
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        Self::parse_known(value).unwrap_or_else(|| {
            warn!(
                activity_level = %value,
                "Unrecognized activity level, falling back to moderate"
            );
            Self::default()
        })
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::parse_known(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown activity level '{s}' (expected sedentary, light, moderate, active or very_active)"
            ))
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fitness goal driving the caloric adjustment
///
/// Deserialization is lenient: an unrecognized value becomes [`Goal::Maintenance`]
/// (zero adjustment) and a warning is logged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Goal {
    /// Caloric surplus
    Bulking,
    /// Caloric deficit
    Cutting,
    /// Caloric balance (fallback for unknown values)
    #[default]
    Maintenance,
}

impl Goal {
    /// All goals
    pub const ALL: [Self; 3] = [Self::Bulking, Self::Cutting, Self::Maintenance];

    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bulking => "bulking",
            Self::Cutting => "cutting",
            Self::Maintenance => "maintenance",
        }
    }

    fn parse_known(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.as_str() == value)
    }

    /// Parse, falling back to `Maintenance` for unrecognized input
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        Self::parse_known(value).unwrap_or_else(|| {
            warn!(goal = %value, "Unrecognized goal, applying no caloric adjustment");
            Self::default()
        })
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::parse_known(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown goal '{s}' (expected bulking, cutting or maintenance)"
            ))
        })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FitnessExperience {
    /// 0-1 years of training
    Beginner,
    /// 1-3 years of training
    Intermediate,
    /// 3+ years of training
    Advanced,
}

impl FitnessExperience {
    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Physical profile captured during onboarding
///
/// Immutable input to the derivation engine. The JSON form keeps the
/// camelCase keys of previously persisted profiles (`height`, `weight`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Age in years
    #[serde(rename = "age")]
    pub age_years: u32,
    /// Biological sex for BMR
    pub gender: Gender,
    /// Body fat percentage (informational, not used by BMR)
    #[serde(default)]
    pub body_fat_percentage: f64,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Fitness goal for the caloric adjustment
    pub goal: Goal,
    /// Dietary restriction tags (e.g. "Vegan", "Keto")
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<String>,
    /// Medical condition tags (e.g. "Diabetes", "Hypertension")
    #[serde(default)]
    pub medical_conditions: BTreeSet<String>,
    /// Training experience, if the user provided it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_experience: Option<FitnessExperience>,
}

impl UserProfile {
    /// Create a profile with no tags, no body fat value, and no experience level
    #[must_use]
    pub const fn new(
        height_cm: f64,
        weight_kg: f64,
        age_years: u32,
        gender: Gender,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            height_cm,
            weight_kg,
            age_years,
            gender,
            body_fat_percentage: 0.0,
            activity_level,
            goal,
            dietary_restrictions: BTreeSet::new(),
            medical_conditions: BTreeSet::new(),
            fitness_experience: None,
        }
    }

    /// Add a medical condition tag
    #[must_use]
    pub fn with_medical_condition(mut self, condition: impl Into<String>) -> Self {
        self.medical_conditions.insert(condition.into());
        self
    }

    /// Add a dietary restriction tag
    #[must_use]
    pub fn with_dietary_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.dietary_restrictions.insert(restriction.into());
        self
    }

    /// Set the body fat percentage
    #[must_use]
    pub const fn with_body_fat(mut self, percentage: f64) -> Self {
        self.body_fat_percentage = percentage;
        self
    }

    /// Set the training experience
    #[must_use]
    pub const fn with_fitness_experience(mut self, experience: FitnessExperience) -> Self {
        self.fitness_experience = Some(experience);
        self
    }

    /// Whether the profile carries the given medical condition tag (exact match)
    #[must_use]
    pub fn has_medical_condition(&self, tag: &str) -> bool {
        self.medical_conditions.contains(tag)
    }

    /// Whether the profile carries the given dietary restriction tag (exact match)
    #[must_use]
    pub fn has_dietary_restriction(&self, tag: &str) -> bool {
        self.dietary_restrictions.contains(tag)
    }

    /// Check that onboarding produced usable numbers
    ///
    /// The derivation engine never calls this; it is for callers that want to
    /// reject nonsensical input before deriving targets.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first field outside its range.
    pub fn validate(&self) -> AppResult<()> {
        if self.height_cm <= 0.0 || !self.height_cm.is_finite() {
            return Err(AppError::value_out_of_range("Height must be a positive number of cm"));
        }
        if self.weight_kg <= 0.0 || !self.weight_kg.is_finite() {
            return Err(AppError::value_out_of_range("Weight must be a positive number of kg"));
        }
        if self.age_years == 0 {
            return Err(AppError::value_out_of_range("Age must be greater than zero"));
        }
        if self.body_fat_percentage < 0.0 || self.body_fat_percentage >= 100.0 {
            return Err(AppError::value_out_of_range(
                "Body fat percentage must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_profile_deserializes_from_persisted_json() {
        let json = r#"{
            "height": 170,
            "weight": 70,
            "age": 25,
            "gender": "male",
            "bodyFatPercentage": 18,
            "activityLevel": "very_active",
            "goal": "cutting",
            "dietaryRestrictions": ["Vegan"],
            "medicalConditions": [],
            "fitnessExperience": "intermediate"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, Goal::Cutting);
        assert!(profile.has_dietary_restriction("Vegan"));
        assert_eq!(
            profile.fitness_experience,
            Some(FitnessExperience::Intermediate)
        );
    }

    #[test]
    fn test_unknown_activity_and_goal_fall_back() {
        let json = r#"{
            "height": 160, "weight": 55, "age": 40, "gender": "female",
            "activityLevel": "couch_potato", "goal": "recomp"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Maintenance);
        assert!(profile.medical_conditions.is_empty());
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let json = r#"{
            "height": 160, "weight": 55, "age": 40, "gender": "other",
            "activityLevel": "light", "goal": "bulking"
        }"#;

        assert!(serde_json::from_str::<UserProfile>(json).is_err());
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_strict_parsing_rejects_unknown_values() {
        assert_eq!("light".parse::<ActivityLevel>().unwrap(), ActivityLevel::Light);
        assert!("Moderate".parse::<ActivityLevel>().is_err());
        assert!("bulk".parse::<Goal>().is_err());
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let profile = UserProfile::new(
            180.0,
            80.0,
            30,
            Gender::Male,
            ActivityLevel::VeryActive,
            Goal::Bulking,
        );
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["activityLevel"], "very_active");
        assert_eq!(value["goal"], "bulking");
        assert_eq!(value["height"], 180.0);
        assert!(value.get("fitnessExperience").is_none());
    }

    #[test]
    fn test_validate_rejects_non_positive_numbers() {
        let mut profile = UserProfile::new(
            170.0,
            70.0,
            25,
            Gender::Female,
            ActivityLevel::Light,
            Goal::Maintenance,
        );
        assert!(profile.validate().is_ok());

        profile.weight_kg = -5.0;
        let err = profile.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(err.message.starts_with("Weight"));

        profile.weight_kg = 70.0;
        profile.body_fat_percentage = 100.0;
        assert_eq!(
            profile.validate().unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }
}
