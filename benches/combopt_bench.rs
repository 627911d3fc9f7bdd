//! Criterion benchmarks for u-combopt.
//!
//! Measures the greedy scheduler on synthetic job mixes and both
//! rod-cutting solvers across rod lengths, to keep the O(L²) tabulation
//! and the memoized recursion comparable at realistic sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use u_combopt::batching::BatchScheduler;
use u_combopt::models::{BatchConstraints, Job};
use u_combopt::rod_cutting::{solve_memo, solve_table};

fn synthetic_jobs(n: usize) -> Vec<Job> {
    (0..n)
        .map(|i| {
            Job::new(
                format!("J{i}"),
                (i % 7) as f64 * 40.0 + 10.0,
                (i % 3) as i32,
                (i % 11) as f64 * 25.0 + 5.0,
            )
        })
        .collect()
}

fn synthetic_prices(length: usize) -> Vec<f64> {
    // Concave-ish table so optima mix cut sizes.
    (1..=length).map(|i| (i as f64).sqrt() * 10.0).collect()
}

fn bench_batching(c: &mut Criterion) {
    let mut group = c.benchmark_group("batching");
    let constraints = BatchConstraints::new(300.0, 4);
    let scheduler = BatchScheduler::new();

    for n in [10usize, 100, 1000] {
        let jobs = synthetic_jobs(n);
        group.bench_with_input(BenchmarkId::new("schedule", n), &jobs, |b, jobs| {
            b.iter(|| scheduler.schedule(black_box(jobs), black_box(&constraints)))
        });
    }
    group.finish();
}

fn bench_rod_cutting(c: &mut Criterion) {
    let mut group = c.benchmark_group("rod_cutting");

    for length in [16usize, 64, 256] {
        let prices = synthetic_prices(length);
        group.bench_with_input(BenchmarkId::new("memo", length), &prices, |b, prices| {
            b.iter(|| solve_memo(black_box(length), black_box(prices)))
        });
        group.bench_with_input(BenchmarkId::new("table", length), &prices, |b, prices| {
            b.iter(|| solve_table(black_box(length), black_box(prices)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_batching, bench_rod_cutting);
criterion_main!(benches);
