//! Criterion benchmarks for u-search algorithms.
//!
//! Puzzle searches run against seeded scrambles of the solved grid;
//! IDDFS and SA use synthetic inputs (chain graph, Sphere function)
//! to measure pure algorithm overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use u_search::astar::{AstarConfig, AstarRunner};
use u_search::dfs::{DfsConfig, DfsRunner};
use u_search::iddfs::{DiGraph, IddfsRunner};
use u_search::puzzle::{Grid, Heuristic};
use u_search::sa::{SaConfig, SaProblem, SaRunner};

// ===========================================================================
// Fixtures
// ===========================================================================

/// Walks `steps` random legal moves away from `goal`.
fn scramble(goal: &Grid, steps: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = *goal;
    for _ in 0..steps {
        let neighbors = grid.neighbors();
        let (next, _) = neighbors[rng.random_range(0..neighbors.len())];
        grid = next;
    }
    grid
}

// ===========================================================================
// Sphere function for SA: minimize sum(x_i^2)
// ===========================================================================

struct SphereProblem {
    dim: usize,
}

impl SaProblem for SphereProblem {
    type Solution = Vec<f64>;

    fn cost(&self, sol: &Vec<f64>) -> f64 {
        sol.iter().map(|x| x * x).sum()
    }

    fn neighbor<R: Rng>(&self, sol: &Vec<f64>, rng: &mut R) -> Vec<f64> {
        let mut next = sol.clone();
        let i = rng.random_range(0..self.dim);
        next[i] += rng.random_range(-0.5..0.5);
        next
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_astar_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_puzzle");
    group.sample_size(10);

    let goal = Grid::solved();
    let start = scramble(&goal, 20, 7);
    for (name, heuristic) in [
        ("misplaced", Heuristic::Misplaced),
        ("manhattan", Heuristic::Manhattan),
    ] {
        let config = AstarConfig::default().with_heuristic(heuristic);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| {
                let result = AstarRunner::run(black_box(&start), black_box(&goal), config);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_dfs_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs_puzzle");
    group.sample_size(10);

    let goal = Grid::solved();
    for &steps in &[8, 20] {
        let start = scramble(&goal, steps, 7);
        let config = DfsConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(steps),
            &(start, config),
            |b, (start, config)| {
                b.iter(|| {
                    let result = DfsRunner::run(black_box(start), black_box(&goal), config);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_iddfs_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("iddfs_chain");
    group.sample_size(10);

    for &n in &[10usize, 100, 1000] {
        let mut graph = DiGraph::new();
        for i in 0..n - 1 {
            graph.add_edge(i, i + 1);
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let result = IddfsRunner::run(black_box(graph), &0, &(n - 1), n);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sphere");
    group.sample_size(10);

    for &dim in &[10, 50, 100] {
        let problem = SphereProblem { dim };
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_max_iterations(1000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(p), vec![5.0; p.dim], black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_astar_puzzle,
    bench_dfs_puzzle,
    bench_iddfs_chain,
    bench_sa_sphere
);
criterion_main!(benches);
