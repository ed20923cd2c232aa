//! Benchmarks for the SLS-PDP optimizer.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sls_pdp::config::Config;
use sls_pdp::initial::build_initial_state;
use sls_pdp::local_search::LocalSearch;
use sls_pdp::problem::{Location, Problem, Task, Vehicle};
use sls_pdp::SlsAlgorithm;
use std::time::Duration;

/// Create a benchmark problem with the given number of tasks.
fn create_benchmark_problem(n_tasks: usize) -> Problem {
    // Locations in a grid arrangement, two per task plus four vehicle homes
    let n_locations = n_tasks * 2 + 4;
    let grid_size = (n_locations as f64).sqrt().ceil() as usize;
    let mut locations = Vec::with_capacity(n_locations);
    for i in 0..n_locations {
        let row = i / grid_size;
        let col = i % grid_size;
        locations.push(Location::new(i, col as f64 * 10.0, row as f64 * 10.0));
    }

    let vehicles = (0..4)
        .map(|v| Vehicle::new(v, v, 30, 1.0))
        .collect::<Vec<_>>();

    let tasks = (0..n_tasks)
        .map(|t| Task::new(t, 4 + t * 2, 5 + t * 2, 1 + (t % 10) as u32, 100.0))
        .collect::<Vec<_>>();

    Problem::new(
        format!("BenchProblem_{}", n_tasks),
        locations,
        vehicles,
        tasks,
    )
}

#[cfg(feature = "bench")]
fn benchmark_initial_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("initial_state");

    for size in [20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);

            b.iter(|| build_initial_state(&problem));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_neighbour_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbour_generation");

    for size in [20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let state = build_initial_state(&problem);
            let mut local_search = LocalSearch::new(Some(42));

            b.iter(|| local_search.choose_neighbours(&state, &problem));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergence");
    group.measurement_time(Duration::from_secs(30));

    for size in [20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new()
                .with_seed(42)
                .with_max_loops(500)
                .with_max_cost_repetition(100)
                .with_time_limit(Duration::from_secs(5));

            b.iter(|| {
                let mut algorithm = SlsAlgorithm::new(problem.clone(), config.clone());
                algorithm.run();
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_initial_state,
    benchmark_neighbour_generation,
    benchmark_convergence
);

#[cfg(feature = "bench")]
criterion_main!(benches);
