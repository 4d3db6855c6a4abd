use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use roadnet_lib::{
    build_graph, find_path, Algorithm, Coordinate, GraphSnapshot, NetworkConfig, SearchOptions,
};

static SNAPSHOT: Lazy<GraphSnapshot> = Lazy::new(|| {
    let config = NetworkConfig {
        rings: 6,
        nodes_per_ring: 24,
        seed: 3,
    };
    build_graph(Coordinate::new(40.7128, -74.0060), 30.0, &config)
        .expect("generated network is valid")
        .snapshot()
});

fn benchmark_routing(c: &mut Criterion) {
    let snapshot = &*SNAPSHOT;

    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::BellmanFord] {
        c.bench_function(&format!("{algorithm}_rim_to_rim"), |b| {
            b.iter(|| {
                let result = find_path(
                    snapshot,
                    "r6-n0",
                    "r6-n12",
                    algorithm,
                    SearchOptions::default(),
                )
                .expect("route exists");
                black_box(result.total_cost)
            });
        });
    }
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
