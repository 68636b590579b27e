// ABOUTME: Output formatting helpers for vibe-cli
// ABOUTME: Provides consistent display functions for macros, tasks, levels, and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde::Serialize;
use vibe_fitness::external::{
    DietPlan, MealSearchResult, Recommendations, ShoppingList, WorkoutPlan,
};
use vibe_fitness::health::ServiceHealth;
use vibe_fitness::intelligence::LevelUp;
use vibe_fitness::models::{DailyTask, MacroBreakdown, UserProfile};
use vibe_fitness::session::SessionController;

/// Print any serializable value as pretty JSON
pub fn display_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display daily calorie and macro targets
pub fn display_macros(macros: &MacroBreakdown) {
    println!("\nDaily Targets");
    println!("{}", "=".repeat(40));
    println!("   Calories: {} kcal", macros.calories);
    println!("   Protein:  {} g", macros.protein_g);
    println!("   Carbs:    {} g", macros.carbs_g);
    println!("   Fats:     {} g", macros.fats_g);
}

/// Display a stored profile
pub fn display_profile(profile: &UserProfile) {
    println!("\nProfile");
    println!("{}", "=".repeat(40));
    println!("   Height:   {} cm", profile.height_cm);
    println!("   Weight:   {} kg", profile.weight_kg);
    println!("   Age:      {}", profile.age_years);
    println!("   Gender:   {}", profile.gender);
    println!("   Activity: {}", profile.activity_level);
    println!("   Goal:     {}", profile.goal);
    if profile.body_fat_percentage > 0.0 {
        println!("   Body fat: {}%", profile.body_fat_percentage);
    }
    if !profile.medical_conditions.is_empty() {
        let conditions: Vec<&str> = profile.medical_conditions.iter().map(String::as_str).collect();
        println!("   Medical:  {}", conditions.join(", "));
    }
    if !profile.dietary_restrictions.is_empty() {
        let restrictions: Vec<&str> =
            profile.dietary_restrictions.iter().map(String::as_str).collect();
        println!("   Diet:     {}", restrictions.join(", "));
    }
}

/// Display today's tasks
pub fn display_tasks(tasks: &[DailyTask], progress_percentage: f64) {
    println!("\nToday's Tasks ({progress_percentage:.0}% complete)");
    println!("{}", "=".repeat(40));
    for task in tasks {
        let check = if task.completed { "[x]" } else { "[ ]" };
        println!(
            "{check} {:>2} {} {:<22} {}/{} {}",
            task.id, task.emoji, task.title, task.current, task.goal, task.unit
        );
    }
}

/// Display the current level
pub fn display_level(session: &SessionController) {
    println!(
        "Level {} | {} points | {} to next level",
        session.level(),
        session.total_points(),
        session.points_to_next_level()
    );
}

/// Display a level-up celebration
pub fn display_level_up(level_up: &LevelUp) {
    println!("\nLEVEL UP! {} -> {}\n", level_up.from, level_up.to);
}

/// Display a diet plan day by day
pub fn display_diet_plan(plan: &DietPlan) {
    println!(
        "\nDiet Plan ({}, {} kcal/day, goal: {})",
        plan.duration, plan.target_calories, plan.goal
    );
    println!("{}", "=".repeat(60));
    for (_, day) in plan.days_in_order() {
        println!("\n{} - {:.0} kcal", day.date, day.total_calories);
        for meal in &day.meals {
            let slot = meal
                .slot
                .map_or_else(String::new, |s| format!("{s:?}: "));
            println!("   {slot}{} ({:.0} kcal)", meal.name, meal.calories);
        }
    }
    for note in plan.medical_considerations.iter().chain(&plan.dietary_notes) {
        println!("   Note: {note}");
    }
    for tip in &plan.meal_prep_tips {
        println!("   Tip: {tip}");
    }
}

/// Display a categorized shopping list
pub fn display_shopping_list(list: &ShoppingList) {
    println!("\nShopping List ({} items)", list.count);
    println!("{}", "=".repeat(40));
    for (category, items) in &list.categorized {
        if items.is_empty() {
            continue;
        }
        println!("{category}: {}", items.join(", "));
    }
}

/// Display a workout plan's weekly schedule
pub fn display_workout_plan(plan: &WorkoutPlan) {
    println!(
        "\nWorkout Plan ({}, {}x/week, level: {:?})",
        plan.duration, plan.frequency, plan.fitness_level
    );
    println!("{}", "=".repeat(60));
    for (day, session) in plan.schedule_in_week_order() {
        println!("\n{day}: {} ({}, {})", session.name, session.kind, session.duration);
        for exercise in &session.exercises {
            let volume = match (&exercise.sets, &exercise.reps, &exercise.duration) {
                (Some(sets), Some(reps), _) => format!("{sets} x {reps}"),
                (Some(sets), None, Some(duration)) => format!("{sets} x {duration}"),
                (_, _, Some(duration)) => duration.clone(),
                _ => String::new(),
            };
            println!("   - {} {volume}", exercise.name);
        }
    }
    let strategy = &plan.progression_strategy;
    println!("\nProgression");
    println!("   Weeks 1-2: {}", strategy.weeks_1_to_2);
    println!("   Weeks 3-4: {}", strategy.weeks_3_to_4);
    println!("   Weeks 5-6: {}", strategy.weeks_5_to_6);
    println!("   Weeks 7-8: {}", strategy.weeks_7_to_8);
}

/// Display nutrition recommendations
pub fn display_recommendations(recommendations: &Recommendations) {
    println!("\nRecommendations");
    println!("{}", "=".repeat(60));
    for tip in &recommendations.personalized_tips {
        println!("   - {tip}");
    }
    println!(
        "\nHydration: {}",
        recommendations.hydration_plan.daily_target
    );
    for slot in &recommendations.hydration_plan.schedule {
        println!("   - {slot}");
    }
    if !recommendations.supplement_recommendations.is_empty() {
        println!("\nSupplements");
        for s in &recommendations.supplement_recommendations {
            println!("   - {} ({}): {}", s.supplement, s.dosage, s.reason);
        }
    }
    println!(
        "\nTiming: {}",
        recommendations.training_food_pairing.timing
    );
}

/// Display meal search results
pub fn display_meals(result: &MealSearchResult) {
    println!("\n{} meals ({:?})", result.count, result.meal_type);
    println!("{}", "=".repeat(60));
    for meal in &result.meals {
        println!(
            "   {} - {:.0} kcal, P {:.0} g / C {:.0} g / F {:.0} g",
            meal.name, meal.calories, meal.protein, meal.carbs, meal.fats
        );
    }
}

/// Display a health probe result
pub fn display_health(base_url: &str, health: &ServiceHealth) {
    let status = if health.is_available() {
        "available"
    } else {
        "unavailable"
    };
    println!(
        "Plan service at {base_url} is {status} ({} ms): {}",
        health.response_time_ms, health.message
    );
}
