//! Criterion benchmarks for the case selection solvers.
//!
//! Uses synthetic pools with uniformly drawn values and hour costs so that
//! timings reflect solver overhead only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_casepack::dp::{DpConfig, DpRunner};
use u_casepack::ga::{GaConfig, GaRunner};
use u_casepack::greedy::GreedyRunner;
use u_casepack::random::create_rng;
use u_casepack::{Capacity, Case, CasePool};

// ===========================================================================
// Synthetic pools
// ===========================================================================

/// `n` cases with values in [50, 5000) and hours in [0.5, 40) on a quarter-hour grid.
fn synthetic_pool(n: usize, seed: u64) -> CasePool {
    let mut rng = create_rng(seed);
    let cases = (0..n)
        .map(|i| {
            let value = rng.random_range(50.0..5000.0);
            let quarters: u32 = rng.random_range(2..160);
            Case::new(format!("case-{i}"), value, f64::from(quarters) * 0.25)
        })
        .collect();
    CasePool::new(cases).expect("synthetic pool is valid")
}

/// A third of the pool's total hours.
fn tight_capacity(pool: &CasePool) -> Capacity {
    Capacity::new((pool.total_weight() / 3.0).floor()).expect("non-negative capacity")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_dp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dp");
    group.sample_size(10);

    for &n in &[100usize, 500, 1000] {
        let pool = synthetic_pool(n, 42);
        let capacity = tight_capacity(&pool);
        let config = DpConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(pool, capacity, config),
            |b, (p, cap, cfg)| {
                b.iter(|| {
                    let result = DpRunner::run(black_box(p), *cap, black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[1_000usize, 10_000, 100_000] {
        let pool = synthetic_pool(n, 42);
        let capacity = tight_capacity(&pool);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(pool, capacity),
            |b, (p, cap)| {
                b.iter(|| {
                    let result = GreedyRunner::run(black_box(p), *cap);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for (n, pop, gen) in [(100usize, 80usize, 50usize), (500, 80, 50), (1000, 120, 30)] {
        let pool = synthetic_pool(n, 42);
        let capacity = tight_capacity(&pool);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_generations(gen);
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}_p{pop}_g{gen}"), n),
            &(pool, capacity, config),
            |b, (p, cap, cfg)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), *cap, black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_dp, bench_greedy, bench_ga);
criterion_main!(benches);
