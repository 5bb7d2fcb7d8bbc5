//! Criterion benchmarks for the TSP GA.
//!
//! Uses cities on a circle so instance size is the only variable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use u_tspga::distance::{City, DistanceMatrix, EdgeWeightType};
use u_tspga::ga::operators::pmx_pair;
use u_tspga::ga::{GaConfig, GaRunner, Population, Selection, Tour};

fn circle(n: usize) -> DistanceMatrix {
    let cities: Vec<City> = (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            City::new(1000.0 * angle.cos(), 1000.0 * angle.sin())
        })
        .collect();
    DistanceMatrix::from_coordinates(&cities, &EdgeWeightType::Euc2d).expect("valid")
}

fn random_tours(n: usize, count: usize, seed: u64) -> Vec<Tour> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut t: Tour = (0..n).collect();
            t.shuffle(&mut rng);
            t
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_pmx(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmx");

    for &n in &[50usize, 200, 1000] {
        let parents = random_tours(n, 2, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &parents, |b, p| {
            b.iter(|| {
                let children = pmx_pair(black_box(&p[0]), black_box(&p[1]), n / 2);
                black_box(children)
            })
        });
    }
    group.finish();
}

fn bench_ga_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_circle");
    group.sample_size(10);

    for (n, pop, iters) in [(20usize, 50usize, 100usize), (100, 100, 50)] {
        let matrix = circle(n);
        let rows = random_tours(n, pop, 7);
        for selection in [Selection::Tournament, Selection::Proportional] {
            let config = GaConfig::default()
                .with_iterations(iters)
                .with_selection(selection)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("{selection:?}_n{n}_p{pop}_g{iters}"), n),
                &(rows.clone(), config),
                |b, (rows, config)| {
                    b.iter(|| {
                        let population =
                            Population::load(&matrix, rows.clone()).expect("valid tours");
                        black_box(GaRunner::run(population, black_box(config)))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pmx, bench_ga_circle);
criterion_main!(benches);
