// ABOUTME: Benchmark test fixtures for generating realistic user profiles
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating user profiles.

use vibe_fitness::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ProfileBatchSize {
    /// Small dataset (10 profiles)
    Small,
    /// Medium dataset (1000 profiles)
    Medium,
}

impl ProfileBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1000,
        }
    }
}

const TAGS: [(&str, bool); 5] = [
    ("", false),
    ("Diabetes", true),
    ("Hypertension", true),
    ("Vegan", false),
    ("Keto", false),
];

/// Generate one profile; every fifth carries no tag, the rest one override tag
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_profile(index: usize) -> UserProfile {
    let gender = if index % 2 == 0 {
        Gender::Male
    } else {
        Gender::Female
    };
    let level = ActivityLevel::ALL[index % ActivityLevel::ALL.len()];
    let goal = Goal::ALL[index % Goal::ALL.len()];
    let height = 150.0 + ((index * 7) % 50) as f64;
    let weight = 50.0 + ((index * 13) % 70) as f64;
    let age = 18 + ((index * 3) % 60) as u32;

    let profile = UserProfile::new(height, weight, age, gender, level, goal);
    match TAGS[index % TAGS.len()] {
        ("", _) => profile,
        (tag, true) => profile.with_medical_condition(tag),
        (tag, false) => profile.with_dietary_restriction(tag),
    }
}

/// Generate a batch of profiles
#[must_use]
pub fn generate_profiles(size: ProfileBatchSize) -> Vec<UserProfile> {
    (0..size.count()).map(generate_profile).collect()
}
