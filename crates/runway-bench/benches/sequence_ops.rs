//! Criterion micro-benchmarks for append, indexed access, and slicing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use runway_bench::{append_profile, presized_profile, stride_indices};
use runway_buffer::GrowableSequence;
use runway_core::GrowthPolicy;

const N: usize = 100_000;

/// Benchmark: 100K appends to an empty sequence with doubling growth.
fn bench_append_doubling(c: &mut Criterion) {
    c.bench_function("append_100k_doubling", |b| {
        b.iter(|| {
            let seq = append_profile(black_box(N), GrowthPolicy::Doubling).unwrap();
            black_box(seq.len());
        });
    });
}

/// Benchmark: 100K appends with a 3/2 growth factor.
fn bench_append_scaled(c: &mut Criterion) {
    let policy = GrowthPolicy::Scaled {
        numerator: 3,
        denominator: 2,
    };
    c.bench_function("append_100k_scaled_3_2", |b| {
        b.iter(|| {
            let seq = append_profile(black_box(N), policy).unwrap();
            black_box(seq.len());
        });
    });
}

/// Benchmark: 100K appends into pre-sized headroom (no reallocation).
fn bench_append_presized(c: &mut Criterion) {
    c.bench_function("append_100k_presized", |b| {
        b.iter(|| {
            let seq = presized_profile(black_box(N)).unwrap();
            black_box(seq.len());
        });
    });
}

/// Benchmark: bounds-checked reads in strided order over 100K elements.
fn bench_get_strided(c: &mut Criterion) {
    let seq: GrowableSequence<u64> = (0..N as u64).collect();
    let order = stride_indices(seq.len());
    c.bench_function("get_100k_strided", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &i in &order {
                sum = sum.wrapping_add(seq.get(i).unwrap());
            }
            black_box(sum);
        });
    });
}

/// Benchmark: create a view and write through it.
fn bench_slice_and_write(c: &mut Criterion) {
    let seq: GrowableSequence<u64> = (0..N as u64).collect();
    c.bench_function("slice_write_1k", |b| {
        b.iter(|| {
            let mut view = seq.slice(black_box(1_000), black_box(2_000)).unwrap();
            for i in 0..view.len() {
                view.set(i, i as u64).unwrap();
            }
            black_box(view.storage_id());
        });
    });
}

criterion_group!(
    benches,
    bench_append_doubling,
    bench_append_scaled,
    bench_append_presized,
    bench_get_strided,
    bench_slice_and_write
);
criterion_main!(benches);
