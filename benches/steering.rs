/*
 * Steering Benchmarks
 *
 * Measures the brute-force flock queries and the full tick loop for
 * increasing flock sizes. The neighbor scan is O(n^2), so these numbers
 * bound how many boids a single frame can afford.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use sphere_boids::{physics, Behavior, SimulationParams};

// Benchmark the three flock queries over the whole flock
fn bench_flock_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_queries");

    for num_boids in [50, 100, 200, 400].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut params = SimulationParams::default();
            params.num_boids = n;
            let boids = physics::spawn_boids(&params);

            b.iter(|| {
                for (i, boid) in boids.iter().enumerate() {
                    black_box(boid.align(&boids, i, params.alignment_radius));
                    black_box(boid.cohesion(&boids, i, params.cohesion_radius));
                    black_box(boid.separation(&boids, i, params.separation_radius));
                }
            });
        });
    }

    group.finish();
}

// Benchmark one full steering tick (selector + integration)
fn bench_steering_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("steering_tick");

    for num_boids in [50, 100, 200, 400].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut params = SimulationParams::default();
            params.num_boids = n;
            params.behavior = Behavior::SeekSequence;
            let mut boids = physics::spawn_boids(&params);

            b.iter(|| {
                physics::step(&mut boids, &params);
                black_box(&boids);
            });
        });
    }

    group.finish();
}

// Benchmark one full flocking tick
fn bench_flocking_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("flocking_tick");

    for num_boids in [50, 100, 200, 400].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut params = SimulationParams::default();
            params.num_boids = n;
            params.enable_flocking = true;
            let mut boids = physics::spawn_boids(&params);

            b.iter(|| {
                physics::step(&mut boids, &params);
                black_box(&boids);
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_flock_queries, bench_steering_tick, bench_flocking_tick
}

criterion_main!(benches);
