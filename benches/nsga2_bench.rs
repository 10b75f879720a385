//! Criterion benchmarks for the NSGA-II core.
//!
//! Measures the O(n²) non-dominated sort and crowding distance in
//! isolation, plus a short end-to-end run on ZDT1.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nsga2_moo::pareto::{crowding_distance, non_dominated_sort};
use nsga2_moo::{NsgaConfig, NsgaRunner, ZdtProblem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_objectives(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.random_range(0.0..1.0), rng.random_range(0.0..10.0)])
        .collect()
}

fn bench_non_dominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");
    for n in [50, 200, 400] {
        let objectives = random_objectives(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &objectives, |b, objs| {
            b.iter(|| non_dominated_sort(black_box(objs)));
        });
    }
    group.finish();
}

fn bench_crowding_distance(c: &mut Criterion) {
    let objectives = random_objectives(200, 42);
    c.bench_function("crowding_distance/200", |b| {
        b.iter(|| crowding_distance(black_box(&objectives)));
    });
}

fn bench_zdt1_run(c: &mut Criterion) {
    let config = NsgaConfig::default()
        .with_problem(ZdtProblem::Zdt1)
        .with_population_size(40)
        .with_generations(20)
        .with_seed(42);

    c.bench_function("zdt1/pop40_gen20", |b| {
        b.iter(|| NsgaRunner::run(black_box(&config)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_non_dominated_sort,
    bench_crowding_distance,
    bench_zdt1_run
);
criterion_main!(benches);
