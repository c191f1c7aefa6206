//! # QAOA Benchmarks
//!
//! Measures the expectation estimator and a coarse grid search.
//!
//! Run: `cargo bench --bench qaoa_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsim_qaoa::{GridSearch, PairBin, SearchConfig, SingleItemBin, estimate_expectation};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark one grid point at increasing shot counts
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_expectation");
    let mut rng = StdRng::seed_from_u64(7);

    for shots in [100usize, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::new("single", shots), &shots, |b, &shots| {
            b.iter(|| black_box(estimate_expectation(&SingleItemBin, 0.3, 0.7, shots, &mut rng).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("pair", shots), &shots, |b, &shots| {
            b.iter(|| black_box(estimate_expectation(&PairBin, 0.3, 0.7, shots, &mut rng).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark a coarse scan (step 0.5, 100 shots)
fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_search");
    group.sample_size(10);

    let search = GridSearch::new(SearchConfig {
        step: 0.5,
        shots: 100,
        ..Default::default()
    })
    .unwrap();

    group.bench_function("pair_coarse", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            black_box(search.run(&PairBin, &mut rng).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_estimate, bench_grid_search);

criterion_main!(benches);
