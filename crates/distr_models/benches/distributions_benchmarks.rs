//! Criterion benchmarks for distribution evaluations.
//!
//! Measures the three core operations (density, CDF, quantile) across the
//! central region and the far tails, where the erfc kernel switches
//! rational approximations, to characterise per-call cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use distr_core::math::special::{erfc, erfc_inv};
use distr_core::traits::ContinuousDistribution;
use distr_models::continuous::Normal;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark the erfc kernel in each of its three approximation ranges.
fn bench_erfc_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("erfc_kernel");

    for (label, x) in [("central", 0.3), ("mid", 2.5), ("far_tail", 15.0)] {
        group.bench_with_input(BenchmarkId::new("erfc", label), &x, |b, &x| {
            b.iter(|| erfc(black_box(x)));
        });
    }

    for (label, q) in [("central", 0.8), ("tail", 1e-10), ("deep_tail", 1e-200)] {
        group.bench_with_input(BenchmarkId::new("erfc_inv", label), &q, |b, &q| {
            b.iter(|| erfc_inv(black_box(q)));
        });
    }

    group.finish();
}

/// Benchmark normal density, CDF and quantile at representative arguments.
fn bench_normal_evaluations(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal");
    let n = Normal::new(2.1_f64, 1.4).unwrap();

    for (label, x) in [("mode", 2.1), ("one_sigma", 3.5), ("deep_tail", -40.0)] {
        group.bench_with_input(BenchmarkId::new("density", label), &x, |b, &x| {
            b.iter(|| n.density(black_box(x)));
        });
        group.bench_with_input(BenchmarkId::new("cdf", label), &x, |b, &x| {
            b.iter(|| n.cumulative_probability(black_box(x)));
        });
    }

    for (label, p) in [("median", 0.5), ("percentile", 0.01), ("deep_tail", 1e-100)] {
        group.bench_with_input(BenchmarkId::new("quantile", label), &p, |b, &p| {
            b.iter(|| n.inverse_cumulative_probability(black_box(p)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark batch evaluation over a sweep of arguments, the shape most
/// callers use when tabulating a distribution.
fn bench_normal_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_sweep");
    let n = Normal::new(0.0_f64, 1.0).unwrap();

    for size in [100, 1000, 10000] {
        let xs: Vec<f64> = (0..size)
            .map(|i| -8.0 + 16.0 * i as f64 / (size - 1) as f64)
            .collect();

        group.bench_with_input(BenchmarkId::new("cdf", size), &xs, |b, xs| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in xs {
                    acc += n.cumulative_probability(black_box(x));
                }
                acc
            });
        });

        let ps: Vec<f64> = (1..=size)
            .map(|i| i as f64 / (size + 1) as f64)
            .collect();
        group.bench_with_input(BenchmarkId::new("quantile", size), &ps, |b, ps| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in ps {
                    acc += n.inverse_cumulative_probability(black_box(p)).unwrap();
                }
                acc
            });
        });
    }

    group.finish();
}

/// Benchmark inverse-transform sampling throughput.
fn bench_normal_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_sampling");
    let n = Normal::new(0.0_f64, 1.0).unwrap();

    for size in [1000, 10000] {
        group.bench_with_input(BenchmarkId::new("sample_n", size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| n.sample_n(black_box(&mut rng), size));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_erfc_kernel,
    bench_normal_evaluations,
    bench_normal_sweep,
    bench_normal_sampling
);
criterion_main!(benches);
