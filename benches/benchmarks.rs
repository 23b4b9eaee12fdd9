//! Benchmark suite for LifePath engines.
//!
//! This module provides performance benchmarks for:
//! - Stage completion (the progression engine's only mutation)
//! - Roadmap summaries (the hot query behind every render)
//! - Path generation (template instantiation)
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Save baseline for comparison
//! cargo bench -- --save-baseline main
//!
//! # Compare against baseline
//! cargo bench -- --baseline main
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lifepath::daily::{CustomTaskSpec, DailyPlan, TaskKind};
use lifepath::generator::PathGenerator;
use lifepath::onboarding::{SelectionList, SurveyAnswers};
use lifepath::roadmap::{Category, Roadmap, Stage};

/// Build a roadmap with `size` stages, first stage current.
fn roadmap_with_stages(size: usize) -> Roadmap {
    let stages = (0..size)
        .map(|i| Stage::new(i.to_string(), format!("Stage {i}"), Category::Skills, 50))
        .collect();
    Roadmap::new(stages).expect("generated stages are ordered")
}

// ============================================================================
// Stage Completion Benchmarks
// ============================================================================

/// Measure a full climb over roadmaps of various sizes.
fn bench_complete_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_stage");

    for size in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_climb", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut roadmap = roadmap_with_stages(size);
                    for i in 0..size {
                        black_box(roadmap.complete_stage(&i.to_string())).unwrap();
                    }
                    roadmap
                });
            },
        );
    }

    group.finish();
}

/// Measure the summary query against a half-climbed roadmap.
fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [8usize, 512] {
        let mut roadmap = roadmap_with_stages(size);
        for i in 0..size / 2 {
            roadmap.complete_stage(&i.to_string()).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("half_climbed", size), &roadmap, |b, r| {
            b.iter(|| black_box(r.summary()));
        });
    }

    group.finish();
}

// ============================================================================
// Daily Plan Benchmarks
// ============================================================================

/// Measure custom-task insertion into a growing plan.
fn bench_add_custom(c: &mut Criterion) {
    c.bench_function("add_custom_100", |b| {
        b.iter(|| {
            let mut plan = DailyPlan::new(PathGenerator::new().daily_seed());
            for i in 0..100 {
                plan.add_custom(CustomTaskSpec {
                    title: format!("Task {i}"),
                    description: String::new(),
                    kind: TaskKind::Main,
                    duration: "15 min".to_string(),
                    xp: 25,
                })
                .unwrap();
            }
            plan
        });
    });
}

// ============================================================================
// Generation Benchmarks
// ============================================================================

/// Measure path generation from survey answers.
fn bench_generate(c: &mut Criterion) {
    let mut answers = SurveyAnswers::new();
    answers.toggle(SelectionList::Goals, "Leadership").unwrap();

    c.bench_function("generate_path", |b| {
        let generator = PathGenerator::new();
        b.iter(|| black_box(generator.generate(&answers)));
    });
}

criterion_group!(
    benches,
    bench_complete_stage,
    bench_summary,
    bench_add_custom,
    bench_generate
);
criterion_main!(benches);
