mod common;

use std::hint::black_box;

use cover_odds::prelude::{
    compute_probabilities, estimate_coverage, scenario_objects, GridSize, OpenedCells, ScenarioId,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn engine_scenario_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/scenario");
    group.throughput(common::board_throughput());

    for id in ScenarioId::ALL {
        let objects = scenario_objects(id);
        let opened = OpenedCells::new();
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, _| {
            b.iter(|| black_box(compute_probabilities(&objects, &opened)));
        });
    }

    group.finish();
}

fn engine_opened_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/opened_cells");
    let objects = scenario_objects(ScenarioId::Case1);

    for &n in &[0usize, 5, 15, 30, 44] {
        let opened = common::random_opened(n, 0xC0FFEE + n as u64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(compute_probabilities(&objects, &opened)));
        });
    }

    group.finish();
}

fn sampling_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/monte_carlo");
    let objects = scenario_objects(ScenarioId::Case4);
    let opened = common::random_opened(8, 0xFACEFEED);

    for &trials in &[100usize, 1_000] {
        group.throughput(common::elements_throughput(trials));
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &t| {
            let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
            b.iter(|| {
                black_box(estimate_coverage(
                    GridSize::STANDARD,
                    &objects,
                    &opened,
                    t,
                    &mut rng,
                ))
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = engine_scenario_benches, engine_opened_benches, sampling_benches
}
criterion_main!(benches);
