// ABOUTME: Criterion benchmarks for intelligence module algorithms
// ABOUTME: Measures macro derivation and task toggling throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for intelligence module algorithms.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_profile, generate_profiles, ProfileBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vibe_fitness::config::FitnessConfig;
use vibe_fitness::intelligence::{calculate_macros, level_for_points, toggle_task};
use vibe_fitness::models::default_daily_tasks;

/// Benchmark the full profile-to-macros pipeline
#[allow(clippy::cast_possible_truncation)]
fn bench_macro_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("macro_derivation");
    let config = FitnessConfig::default();

    group.bench_function("single_profile", |b| {
        let profile = generate_profile(3);
        b.iter(|| calculate_macros(black_box(&profile), black_box(&config.nutrition)));
    });

    for size in [ProfileBatchSize::Small, ProfileBatchSize::Medium] {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(profiles.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("derive_macros_batch", profiles.len()),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    profiles
                        .iter()
                        .map(|profile| calculate_macros(profile, &config.nutrition).calories)
                        .sum::<u32>()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark toggling every task through a full day
fn bench_progression(c: &mut Criterion) {
    let mut group = c.benchmark_group("progression");
    let config = FitnessConfig::default();

    group.bench_function("complete_all_tasks", |b| {
        let tasks = default_daily_tasks();
        b.iter(|| {
            let mut current = tasks.clone();
            let mut points = 0;
            for id in ["1", "2", "3", "4", "5", "6"] {
                if let Ok(outcome) = toggle_task(&current, black_box(id), points, &config.progression) {
                    current = outcome.tasks;
                    points = outcome.total_points;
                }
            }
            points
        });
    });

    group.bench_function("level_for_points", |b| {
        b.iter(|| (0..10_000).map(|p| level_for_points(black_box(p), 100)).sum::<u32>());
    });

    group.finish();
}

criterion_group!(benches, bench_macro_derivation, bench_progression);
criterion_main!(benches);
