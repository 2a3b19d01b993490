//! Criterion benchmarks for the backtracking search.
//!
//! Uses generated instances (cliques one color short, seeded random graphs)
//! to measure search overhead for both traversal strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_coloring::coloring::{BacktrackConfig, BacktrackRunner, SearchStrategy};
use u_coloring::fixtures;

const STRATEGIES: [SearchStrategy; 2] = [SearchStrategy::Recursive, SearchStrategy::Iterative];

// ===========================================================================
// Cliques with k - 1 colors: exhaustive refutation
// ===========================================================================

fn bench_clique_refutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("clique_refutation");
    group.sample_size(10);

    for &k in &[5usize, 6, 7] {
        let graph = fixtures::complete_graph(k, 0..k - 1).expect("complete graph");
        for strategy in STRATEGIES {
            let config = BacktrackConfig::default().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), k),
                &(graph.clone(), config),
                |b, (g, c)| {
                    b.iter(|| {
                        let result = BacktrackRunner::run(black_box(g), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

// ===========================================================================
// Sparse random graphs with four colors
// ===========================================================================

fn bench_random_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_sparse");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let graph = fixtures::random_graph(n, 3.0 / n as f64, 0..4u8, 42).expect("random graph");
        for strategy in STRATEGIES {
            let config = BacktrackConfig::default()
                .with_strategy(strategy)
                .with_max_attempts(100_000);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &(graph.clone(), config),
                |b, (g, c)| {
                    b.iter(|| {
                        let result = BacktrackRunner::run(black_box(g), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_australia(c: &mut Criterion) {
    let graph = fixtures::australia().expect("australia");
    c.bench_function("australia", |b| b.iter(|| black_box(graph.solve())));
}

criterion_group!(
    benches,
    bench_clique_refutation,
    bench_random_sparse,
    bench_australia
);
criterion_main!(benches);
