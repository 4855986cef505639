//! Performance benchmarks for HotelWizard.
//!
//! Covers the pure estimator, the `/estimate` endpoint and building the
//! dashboard from the fixture dataset.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use hotel_wizard::api::{AppState, create_router};
use hotel_wizard::calculation::estimate_with_config;
use hotel_wizard::config::{BudgetConfig, ConfigLoader, DashboardSettings};
use hotel_wizard::dataset::Dataset;
use hotel_wizard::models::EstimateRequest;
use hotel_wizard::views::Dashboard;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration and the fixture dataset.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    let (budget, settings) = config.into_parts();
    let dataset =
        Dataset::load("./tests/fixtures/data", &settings.data).expect("Failed to load dataset");
    AppState::new(budget, Dashboard::build(&dataset, &settings))
}

/// Benchmark: the estimator alone, one room count per tier.
fn bench_estimate_per_tier(c: &mut Criterion) {
    let config = BudgetConfig::standard();
    let mut group = c.benchmark_group("estimate");

    for rooms in [5i64, 20, 30, 60, 120] {
        let request = EstimateRequest::new(rooms, Decimal::from(100)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rooms), &request, |b, request| {
            b.iter(|| estimate_with_config(black_box(request), black_box(&config)))
        });
    }

    group.finish();
}

/// Benchmark: parsing the two form fields.
fn bench_parse_form(c: &mut Criterion) {
    c.bench_function("parse_form", |b| {
        b.iter(|| EstimateRequest::parse(black_box(" 42 "), black_box("89.95")))
    });
}

/// Benchmark: a full POST /estimate round trip through the router.
fn bench_estimate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({"room_count": "42", "nightly_rate": "89.95"}).to_string();

    c.bench_function("estimate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/estimate")
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

/// Benchmark: deriving all five charts from the fixture dataset.
fn bench_build_dashboard(c: &mut Criterion) {
    let settings = DashboardSettings::default();
    let dataset = Dataset::load("./tests/fixtures/data", &settings.data).unwrap();

    let mut group = c.benchmark_group("dashboard");
    group.throughput(Throughput::Elements(dataset.bookings().len() as u64));
    group.bench_function("build", |b| {
        b.iter(|| Dashboard::build(black_box(&dataset), black_box(&settings)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_estimate_per_tier,
    bench_parse_form,
    bench_estimate_endpoint,
    bench_build_dashboard,
);
criterion_main!(benches);
