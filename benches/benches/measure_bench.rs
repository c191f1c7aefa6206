//! # Measurement Benchmarks
//!
//! Measures Born-rule sampling and collapse. The cumulative scan stops at the
//! selected index, so uniform states average half a pass.
//!
//! Run: `cargo bench --bench measure_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsim_core::{Circuit, Gate, Register};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn uniform(n: usize) -> Register {
    Circuit::new(n).on_all(Gate::h()).run_from_ground().unwrap()
}

/// Benchmark measuring a uniform superposition (clone + collapse)
fn bench_measure_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_uniform");

    for n in [1usize, 4, 8, 12, 16] {
        let reg = uniform(n);
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &reg, |b, reg| {
            b.iter(|| {
                let mut shot = reg.clone();
                black_box(shot.measure(&mut rng))
            })
        });
    }

    group.finish();
}

/// Benchmark the deterministic half of measurement at fixed draws
fn bench_collapse_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse_with");
    let reg = uniform(10);

    for r in [0.0, 0.5, 0.999] {
        group.bench_with_input(BenchmarkId::from_parameter(r), &r, |b, &r| {
            b.iter(|| {
                let mut shot = reg.clone();
                black_box(shot.collapse_with(black_box(r)))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measure_uniform, bench_collapse_with);

criterion_main!(benches);
