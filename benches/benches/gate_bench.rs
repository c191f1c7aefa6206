//! # Gate Benchmarks
//!
//! Measures single-qubit gate application on registers of growing width.
//! Each application is one O(2^n) pass plus a fresh 2^n allocation.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qsim_core::{Circuit, Gate, Register};

/// Benchmark H on the most and least significant qubit
fn bench_apply_by_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_hadamard");

    for n in [2usize, 4, 8, 12, 16] {
        let reg = Register::new(n).unwrap();
        group.throughput(Throughput::Elements(1 << n));

        group.bench_with_input(BenchmarkId::new("qubit_0", n), &reg, |b, reg| {
            b.iter(|| black_box(Gate::h().apply_at(reg, 0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("last_qubit", n), &reg, |b, reg| {
            b.iter(|| black_box(Gate::h().apply_at(reg, n - 1).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark gate construction (rotations pay for sin/cos)
fn bench_gate_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_construction");

    group.bench_function("hadamard", |b| b.iter(|| black_box(Gate::h())));
    group.bench_function("rx", |b| b.iter(|| black_box(Gate::rx(black_box(0.7)))));
    group.bench_function("rz", |b| b.iter(|| black_box(Gate::rz(black_box(0.7)))));

    group.finish();
}

/// Benchmark a full layer of gates through Circuit
fn bench_circuit_layer(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_layer");

    for n in [4usize, 8, 12] {
        let circuit = Circuit::new(n)
            .on_all(Gate::h())
            .on_all(Gate::rz(0.4))
            .on_all(Gate::rx(0.8));

        group.bench_with_input(BenchmarkId::new("h_rz_rx", n), &circuit, |b, circuit| {
            b.iter(|| black_box(circuit.run_from_ground().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_by_width,
    bench_gate_construction,
    bench_circuit_layer,
);

criterion_main!(benches);
