use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sp_core::{
    prelude::*,
    util::test_graphs::{generate_complex_graph, grid_graph},
};

criterion_group!(benches, strategies_on_grid, strategies_on_complex_graph);
criterion_main!(benches);

const STRATEGIES: [SelectionStrategy; 3] = [
    SelectionStrategy::LinearScan,
    SelectionStrategy::BinaryHeap,
    SelectionStrategy::LocalGreedy,
];

pub fn strategies_on_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for size in [10, 30, 100].iter() {
        let g = grid_graph(*size, *size);
        let (src, dst) = (node_index(0), node_index(size * size - 1));

        for strategy in STRATEGIES {
            let params = SearchParams::new().strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), size),
                &g,
                |b, g| {
                    b.iter(|| {
                        let mut dijkstra = Dijkstra::with_params(g, params);
                        black_box(dijkstra.search(src, dst).unwrap());
                    })
                },
            );
        }
    }
    group.finish();
}

fn strategies_on_complex_graph(c: &mut Criterion) {
    let g = generate_complex_graph();

    for strategy in STRATEGIES {
        let params = SearchParams::new().strategy(strategy);
        c.bench_with_input(
            BenchmarkId::new("complex_graph", strategy),
            &g,
            |b, g| {
                b.iter(|| {
                    let mut dijkstra = Dijkstra::with_params(g, params);
                    black_box(dijkstra.search(node_index(0), node_index(6)).unwrap());
                })
            },
        );
    }
}
