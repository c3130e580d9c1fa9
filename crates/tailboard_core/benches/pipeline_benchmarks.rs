//! Criterion benchmarks for the tailboard_core sampling and pipeline
//! hot paths.
//!
//! Run with: cargo bench -p tailboard_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tailboard_core::pipeline;
use tailboard_core::scenario::{BurnYearParams, EconomicsParams, FleetYearParams, ValuationParams};
use tailboard_core::{Distribution, NullSink};

/// Trial count the dashboards run with.
const DASHBOARD_TRIALS: usize = 5000;

fn bench_sampling(c: &mut Criterion) {
    let student_t = Distribution::student_t(100.0, 700.0).unwrap();
    let beta = Distribution::beta(8.0, 3.0, 0.4, 0.1).unwrap();

    let mut group = c.benchmark_group("sampling");
    for n in [1000_usize, 5000, 20_000] {
        group.bench_with_input(BenchmarkId::new("student_t", n), &n, |b, &n| {
            let mut rng = SmallRng::seed_from_u64(42);
            b.iter(|| student_t.sample(&mut rng, black_box(n)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("beta", n), &n, |b, &n| {
            let mut rng = SmallRng::seed_from_u64(42);
            b.iter(|| beta.sample(&mut rng, black_box(n)).unwrap());
        });
    }
    group.finish();
}

fn bench_fleet_year(c: &mut Criterion) {
    let params = FleetYearParams::ramp_years()[2];

    c.bench_function("fleet_year_5000", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| pipeline::fleet_year(black_box(&params), &mut rng, DASHBOARD_TRIALS).unwrap());
    });
}

fn bench_total_burn(c: &mut Criterion) {
    let years = BurnYearParams::burn_years();

    c.bench_function("total_burn_5000", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| pipeline::total_burn(black_box(&years), &mut rng, DASHBOARD_TRIALS).unwrap());
    });
}

fn bench_valuation(c: &mut Criterion) {
    let fleet = FleetYearParams::ramp_years()[2];
    let burn = BurnYearParams::burn_years()[2];
    let params = ValuationParams::default();

    c.bench_function("valuation_5000", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            pipeline::valuation(
                black_box(&fleet),
                black_box(&burn),
                black_box(&params),
                &mut rng,
                DASHBOARD_TRIALS,
            )
            .unwrap()
        });
    });
}

/// The full cost of one dashboard keypress: sample, compose, and
/// present, with rendering discarded through a [`NullSink`].
fn bench_economics_present(c: &mut Criterion) {
    let params = EconomicsParams::default();

    c.bench_function("economics_present_5000", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut sink = NullSink;
        b.iter(|| {
            pipeline::economics(black_box(&params), &mut rng, DASHBOARD_TRIALS)
                .unwrap()
                .present(&mut sink)
        });
    });
}

criterion_group!(
    benches,
    bench_sampling,
    bench_fleet_year,
    bench_total_burn,
    bench_valuation,
    bench_economics_present
);
criterion_main!(benches);
