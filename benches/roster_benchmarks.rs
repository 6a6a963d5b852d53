//! Performance benchmarks for the roster engine.
//!
//! Targets:
//! - Compliance evaluation over a 4-week history: < 100μs mean
//! - Roster validation for a full fortnight: < 1ms mean
//! - 2-week roster generation for a 24-member station: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use roster_engine::api::{create_router, AppState};
use roster_engine::compliance;
use roster_engine::config::{ConfigLoader, RosterGenerationConfig};
use roster_engine::models::{Employee, ShiftPreferences, ShiftRecord, ShiftType};
use roster_engine::roster::validate_roster_compliance;
use roster_engine::storage::InMemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn make_employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        service_number: format!("VP{}", id),
        name: format!("Member {}", id),
        station: "geelong".to_string(),
        rank: "Constable".to_string(),
        seniority_years: 3,
        preferences: ShiftPreferences::default(),
        active: true,
    }
}

/// A 4-week history mixing day and night shifts.
fn make_history(shift_count: usize) -> Vec<ShiftRecord> {
    let base = make_datetime("2026-02-02 06:00:00");
    (0..shift_count)
        .map(|i| {
            let shift_type = if i % 5 == 4 {
                ShiftType::Night
            } else {
                ShiftType::Early
            };
            ShiftRecord {
                id: format!("shift_{:03}", i),
                employee_id: "emp_bench".to_string(),
                shift_type,
                date: base + Duration::days(i as i64),
                start_time: shift_type.start_time().to_string(),
                end_time: shift_type.end_time().to_string(),
                overtime_hours: Decimal::ZERO,
                was_recalled: false,
                notes: None,
            }
        })
        .collect()
}

/// Benchmark: compliance evaluation over histories of varying length.
fn bench_evaluate_compliance(c: &mut Criterion) {
    let now = make_datetime("2026-03-02 09:00:00");
    let mut group = c.benchmark_group("evaluate_compliance");

    for shift_count in [7usize, 14, 28] {
        let history = make_history(shift_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(shift_count),
            &history,
            |b, history| {
                b.iter(|| black_box(compliance::evaluate("emp_bench", history, now)))
            },
        );
    }
    group.finish();
}

/// Benchmark: post-hoc validation of a fully allocated fortnight.
fn bench_validate_roster(c: &mut Criterion) {
    let store = InMemoryStore::new();
    for i in 0..24 {
        store.insert_employee(make_employee(&format!("emp_{:02}", i)));
    }
    let config = RosterGenerationConfig::for_station("geelong");
    let generation = roster_engine::engine::generate_roster(
        &store,
        &config,
        chrono::NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"),
    )
    .expect("generation succeeds");

    c.bench_function("validate_roster", |b| {
        b.iter(|| black_box(validate_roster_compliance(&generation.assignments)))
    });
}

/// Benchmark: end-to-end 2-week generation through the HTTP router.
fn bench_generate_roster(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/stations.yaml").expect("Failed to load config");
    let store = Arc::new(InMemoryStore::new());
    for i in 0..24 {
        store.insert_employee(make_employee(&format!("emp_{:02}", i)));
    }
    let router = create_router(AppState::new(config, store));
    let body = serde_json::json!({
        "station": "geelong",
        "period_start": "2026-03-02"
    })
    .to_string();

    c.bench_function("generate_roster_2_weeks", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/roster/generate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate_compliance,
    bench_validate_roster,
    bench_generate_roster
);
criterion_main!(benches);
