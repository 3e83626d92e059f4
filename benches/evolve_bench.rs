//! Criterion benchmarks for u-evolve optimizers.
//!
//! Uses the Griewank and Schwefel functions in three dimensions for the
//! real-valued optimizers and a 19-item knapsack for the GA.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::de::{DeConfig, DifferentialEvolution};
use u_evolve::ga::knapsack::{Item, Knapsack};
use u_evolve::ga::{BinaryPopulation, GaConfig};
use u_evolve::pso::{PsoConfig, Swarm};

// ===========================================================================
// Objectives
// ===========================================================================

fn griewank(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|v| v * v).sum::<f64>() / 4000.0;
    let prod: f64 = x
        .iter()
        .enumerate()
        .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum - prod + 1.0
}

fn schwefel(x: &[f64]) -> f64 {
    418.9829 * x.len() as f64 - x.iter().map(|v| v * v.abs().sqrt().sin()).sum::<f64>()
}

fn knapsack() -> Knapsack {
    let items = [
        (60.0, 10.53),
        (10.0, 19.11111),
        (10.0, 32.0),
        (68.0, 32.455),
        (10.0, 9.5),
        (70.0, 29.98),
        (19.0, 33.65),
        (30.0, 20.0),
        (10.0, 12.2),
        (15.115426, 12.0),
        (10.0, 16.0),
        (10.0, 31.0),
        (20.0, 1.0),
        (14.0, 22.0),
        (12.0, 19.5),
        (10.0, 33.0),
        (10.0, 8.0),
        (3.0, 1.5),
        (10.0, 6.0),
    ];
    Knapsack::new(
        items.iter().map(|&(v, w)| Item::new(v, w)).collect(),
        110.0,
    )
}

// ===========================================================================
// Benchmarks
// ===========================================================================

type Benchmark = (&'static str, fn(&[f64]) -> f64, f64);

const FUNCTIONS: [Benchmark; 2] = [("griewank", griewank, 600.0), ("schwefel", schwefel, 500.0)];

fn bench_de(c: &mut Criterion) {
    let mut group = c.benchmark_group("de");
    group.sample_size(10);

    for (name, f, half_width) in FUNCTIONS {
        let config = DeConfig::uniform(3, -half_width, half_width)
            .with_population_size(30)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::new(name, 100), &config, |b, config| {
            b.iter(|| {
                let mut de = DifferentialEvolution::new(config.clone(), f).unwrap();
                black_box(de.run(100, false).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso");
    group.sample_size(10);

    for (name, f, half_width) in FUNCTIONS {
        let config = PsoConfig::uniform(3, -half_width, half_width)
            .with_particle_count(30)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::new(name, 100), &config, |b, config| {
            b.iter(|| {
                let mut swarm = Swarm::new(config.clone(), f).unwrap();
                black_box(swarm.run(100).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_ga_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_knapsack");
    group.sample_size(10);

    let problem = knapsack();
    for &pop in &[100usize, 400] {
        let config = GaConfig::new(problem.genome_length())
            .with_population_size(pop)
            .with_mutation_rate(0.25)
            .with_crossover_rate(0.5)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, config| {
            b.iter(|| {
                let mut ga = BinaryPopulation::new(config.clone(), problem.clone()).unwrap();
                black_box(ga.run(50).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_de, bench_pso, bench_ga_knapsack);
criterion_main!(benches);
