use std::time::Instant;

use roadnet_lib::test_helpers::{node_at, weighted_edge};
use roadnet_lib::{
    build_graph, find_path, Algorithm, Coordinate, Error, GraphStore, NetworkConfig, SearchOptions,
};

const ALGORITHMS: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::BellmanFord];

/// A(0,0), B(0,1), C(1,1) with A->B (1), B->C (1), A->C (3), plus a
/// disconnected D.
fn triangle_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(node_at("A", 0.0, 0.0)).unwrap();
    store.add_node(node_at("B", 0.0, 1.0)).unwrap();
    store.add_node(node_at("C", 1.0, 1.0)).unwrap();
    store.add_node(node_at("D", 2.0, 2.0)).unwrap();
    store.add_edge(weighted_edge("ab", "A", "B", 1.0)).unwrap();
    store.add_edge(weighted_edge("bc", "B", "C", 1.0)).unwrap();
    store.add_edge(weighted_edge("ac", "A", "C", 3.0)).unwrap();
    store
}

/// Same topology and weights, but every node shares one coordinate so the
/// great-circle heuristic degenerates to zero.
fn colocated_triangle_store() -> GraphStore {
    let mut store = GraphStore::new();
    for id in ["A", "B", "C", "D"] {
        store.add_node(node_at(id, 0.0, 0.0)).unwrap();
    }
    store.add_edge(weighted_edge("ab", "A", "B", 1.0)).unwrap();
    store.add_edge(weighted_edge("bc", "B", "C", 1.0)).unwrap();
    store.add_edge(weighted_edge("ac", "A", "C", 3.0)).unwrap();
    store
}

#[test]
fn dijkstra_prefers_the_cheaper_two_hop_route() {
    let snapshot = triangle_store().snapshot();
    let result = find_path(
        &snapshot,
        "A",
        "C",
        Algorithm::Dijkstra,
        SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.total_cost, 2.0);
    assert_eq!(result.estimated_time_minutes, 2.0);
    assert_eq!(result.visited_nodes, vec!["A", "B", "C"]);
}

#[test]
fn blocking_the_shortcut_reroutes_over_the_direct_edge() {
    let mut store = triangle_store();
    store.set_blocked("bc", true).unwrap();
    let snapshot = store.snapshot();

    let result = find_path(
        &snapshot,
        "A",
        "C",
        Algorithm::Dijkstra,
        SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(result.path, vec!["A", "C"]);
    assert_eq!(result.total_cost, 3.0);
}

#[test]
fn degenerate_heuristic_a_star_matches_dijkstra_exactly() {
    let snapshot = colocated_triangle_store().snapshot();
    let dijkstra = find_path(
        &snapshot,
        "A",
        "C",
        Algorithm::Dijkstra,
        SearchOptions::default(),
    )
    .unwrap();
    let a_star = find_path(
        &snapshot,
        "A",
        "C",
        Algorithm::AStar,
        SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(a_star.path, dijkstra.path);
    assert_eq!(a_star.total_cost, dijkstra.total_cost);
    assert_eq!(a_star.visited_nodes, dijkstra.visited_nodes);
}

#[test]
fn bellman_ford_matches_the_frontier_strategies_under_static_weights() {
    let snapshot = triangle_store().snapshot();
    let result = find_path(
        &snapshot,
        "A",
        "C",
        Algorithm::BellmanFord,
        SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.total_cost, 2.0);
    // Improvement order over the insertion-ordered edge list.
    assert_eq!(result.visited_nodes, vec!["B", "C"]);
}

#[test]
fn start_equals_end_returns_a_single_node_path() {
    let snapshot = triangle_store().snapshot();
    for algorithm in ALGORITHMS {
        let result = find_path(&snapshot, "A", "A", algorithm, SearchOptions::default()).unwrap();
        assert_eq!(result.path, vec!["A"], "{algorithm}");
        assert_eq!(result.total_cost, 0.0, "{algorithm}");
        assert_eq!(result.visited_nodes, vec!["A"], "{algorithm}");
    }
}

#[test]
fn a_disconnected_end_is_a_normal_unreachable_result() {
    let snapshot = triangle_store().snapshot();
    for algorithm in ALGORITHMS {
        let result = find_path(&snapshot, "A", "D", algorithm, SearchOptions::default()).unwrap();
        assert!(result.path.is_empty(), "{algorithm}");
        assert!(result.total_cost.is_infinite(), "{algorithm}");
        assert!(result.is_unreachable(), "{algorithm}");
    }
}

#[test]
fn blocking_every_edge_into_the_end_makes_it_unreachable() {
    let mut store = triangle_store();
    store.set_blocked("bc", true).unwrap();
    store.set_blocked("ac", true).unwrap();
    let snapshot = store.snapshot();

    for algorithm in ALGORITHMS {
        let result = find_path(&snapshot, "A", "C", algorithm, SearchOptions::default()).unwrap();
        assert!(result.path.is_empty(), "{algorithm}");
        assert!(result.total_cost.is_infinite(), "{algorithm}");
    }
}

#[test]
fn unknown_endpoints_fail_for_every_algorithm() {
    let snapshot = triangle_store().snapshot();
    for algorithm in ALGORITHMS {
        let error =
            find_path(&snapshot, "A", "Z", algorithm, SearchOptions::default()).unwrap_err();
        assert!(matches!(error, Error::UnknownNode { .. }), "{algorithm}");
    }
}

#[test]
fn searching_for_a_removed_node_fails() {
    let mut store = triangle_store();
    store.remove_node("B");
    let snapshot = store.snapshot();

    let error = find_path(
        &snapshot,
        "A",
        "B",
        Algorithm::Dijkstra,
        SearchOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(error, Error::UnknownNode { .. }));

    // The cascade also removed A->B and B->C, leaving only the direct edge.
    let result = find_path(
        &snapshot,
        "A",
        "C",
        Algorithm::Dijkstra,
        SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(result.path, vec!["A", "C"]);
    assert_eq!(result.total_cost, 3.0);
}

#[test]
fn an_expired_deadline_cancels_instead_of_returning_a_partial_path() {
    let snapshot = triangle_store().snapshot();
    let options = SearchOptions::with_deadline(Instant::now());
    for algorithm in ALGORITHMS {
        let error = find_path(&snapshot, "A", "C", algorithm, options).unwrap_err();
        assert!(matches!(error, Error::Cancelled), "{algorithm}");
    }
}

#[test]
fn visited_sequences_are_reproducible_across_runs() {
    let snapshot = triangle_store().snapshot();
    for algorithm in ALGORITHMS {
        let first = find_path(&snapshot, "A", "C", algorithm, SearchOptions::default()).unwrap();
        let second = find_path(&snapshot, "A", "C", algorithm, SearchOptions::default()).unwrap();
        assert_eq!(first.visited_nodes, second.visited_nodes, "{algorithm}");
        assert_eq!(first.path, second.path, "{algorithm}");
    }
}

#[test]
fn all_strategies_agree_on_cost_over_a_generated_network() {
    let store = build_graph(
        Coordinate::new(40.7128, -74.0060),
        12.0,
        &NetworkConfig::default(),
    )
    .unwrap();
    let snapshot = store.snapshot();

    for (start, end) in [
        ("central", "r2-n5"),
        ("r1-n0", "r2-n3"),
        ("r2-n7", "r1-n4"),
    ] {
        let costs: Vec<f64> = ALGORITHMS
            .iter()
            .map(|&algorithm| {
                find_path(&snapshot, start, end, algorithm, SearchOptions::default())
                    .unwrap()
                    .total_cost
            })
            .collect();
        assert!(
            (costs[0] - costs[1]).abs() < 1e-9 && (costs[0] - costs[2]).abs() < 1e-9,
            "{start} -> {end}: {costs:?}"
        );
    }
}
