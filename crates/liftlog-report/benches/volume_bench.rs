//! Benchmark for weekly volume aggregation over a year of training data.
//!
//! Aggregation runs on every report request against the full log, so it
//! should stay comfortably sub-millisecond for realistic log sizes.

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use liftlog_core::{WeightUnit, WorkoutEntry};
use liftlog_report::{aggregate_by_exercise, aggregate_total};

/// Generate a year of entries: four exercises, three sessions per week.
fn generate_year_of_entries() -> Vec<WorkoutEntry> {
    let exercises = ["Bench Press", "Squat", "Deadlift", "Overhead Press"];
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut entries = Vec::new();
    for week in 0..52 {
        for session in [0i64, 2, 4] {
            let date = start + Duration::days(week * 7 + session);
            for (i, exercise) in exercises.iter().enumerate() {
                entries.push(WorkoutEntry::new(
                    date,
                    exercise.to_string(),
                    3 + (i as u32 % 2),
                    5 + (i as u32 * 2),
                    60.0 + i as f64 * 20.0,
                    WeightUnit::Kg,
                ));
            }
        }
    }
    entries
}

fn bench_weekly_aggregation(c: &mut Criterion) {
    let entries = generate_year_of_entries();

    let mut group = c.benchmark_group("weekly_volume");

    group.bench_function("total_one_year", |b| {
        b.iter(|| aggregate_total(&entries));
    });

    group.bench_function("per_exercise_one_year", |b| {
        b.iter(|| aggregate_by_exercise(&entries));
    });

    group.finish();
}

criterion_group!(benches, bench_weekly_aggregation);
criterion_main!(benches);
