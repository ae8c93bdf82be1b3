//! Criterion benchmarks for sampling, neighbor search, and roadmap learning.
//! Focus sizes: roadmaps of {50, 100, 200, 400} nodes.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gaussprm::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn cluttered_field() -> ObstacleField {
    ObstacleField::square(0.0, 20.0)
        .with_obstacle(Obstacle::rect(4.0, 0.0, 6.0, 14.0))
        .with_obstacle(Obstacle::rect(9.5, 6.0, 10.5, 20.0))
        .with_obstacle(Obstacle::circle(15.0, 8.0, 2.5))
        .with_obstacle(Obstacle::circle(15.0, 15.0, 1.5))
}

fn random_roadmap(n: usize, search: NeighborSearch, seed: u64) -> Roadmap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rm = Roadmap::new(search);
    for k in 0..n {
        let p = Configuration::xy(rng.gen_range(0.0..20.0), rng.gen_range(0.0..20.0));
        rm.add_node(NodeId::Sample(k as u32 + 1), p);
    }
    rm
}

fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");
    let env = cluttered_field();
    let cfg = SamplerCfg::default();
    for kind in [SamplerKind::Gaussian, SamplerKind::Bridge, SamplerKind::Uniform] {
        group.bench_function(BenchmarkId::new("draw", kind.as_str()), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(17),
                |mut rng| {
                    let _ = kind.draw(&env, &mut rng, &cfg);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_neighbors");
    let query = Configuration::xy(10.0, 10.0);
    for &n in &[50usize, 100, 200, 400] {
        for search in [NeighborSearch::BruteForce, NeighborSearch::RTree] {
            let rm = random_roadmap(n, search, 5);
            group.bench_with_input(BenchmarkId::new(search.as_str(), n), &n, |b, _| {
                b.iter(|| rm.find_neighbors(&query, 4.0))
            });
        }
    }
    group.finish();
}

fn bench_learn(c: &mut Criterion) {
    let mut group = c.benchmark_group("learn_roadmap");
    group.sample_size(10);
    let env = cluttered_field();
    for &n in &[50usize, 100, 200] {
        let cfg = PlanConfig::new(4.0, n);
        group.bench_with_input(BenchmarkId::new("gaussian", n), &cfg, |b, cfg| {
            b.iter_batched(
                || (Roadmap::new(cfg.neighbor_search), StdRng::seed_from_u64(99)),
                |(mut rm, mut rng)| {
                    let _ = learn_roadmap(&mut rm, &env, &mut rng, cfg);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_samplers, bench_neighbors, bench_learn);
criterion_main!(benches);
