//! Search strategies behind a common trait.
//!
//! Each algorithm is encapsulated in its own strategy struct so new
//! algorithms can be added without touching the dispatch or the callers.

use crate::error::Result;
use crate::store::GraphSnapshot;

use super::{astar, bellman_ford, dijkstra, Algorithm, PathResult, SearchOptions};

/// Trait for shortest-path strategies.
pub trait SearchStrategy: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> Algorithm;

    /// Execute the search over one consistent snapshot.
    fn run(
        &self,
        snapshot: &GraphSnapshot,
        start: &str,
        end: &str,
        options: SearchOptions,
    ) -> Result<PathResult>;
}

/// Uniform-cost strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSearch;

impl SearchStrategy for DijkstraSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn run(
        &self,
        snapshot: &GraphSnapshot,
        start: &str,
        end: &str,
        options: SearchOptions,
    ) -> Result<PathResult> {
        dijkstra::search(snapshot, start, end, options)
    }
}

/// Great-circle-guided strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSearch;

impl SearchStrategy for AStarSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn run(
        &self,
        snapshot: &GraphSnapshot,
        start: &str,
        end: &str,
        options: SearchOptions,
    ) -> Result<PathResult> {
        astar::search(snapshot, start, end, options)
    }
}

/// Relaxation-based strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordSearch;

impl SearchStrategy for BellmanFordSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BellmanFord
    }

    fn run(
        &self,
        snapshot: &GraphSnapshot,
        start: &str,
        end: &str,
        options: SearchOptions,
    ) -> Result<PathResult> {
        bellman_ford::search(snapshot, start, end, options)
    }
}

/// Select the strategy for a requested algorithm.
pub fn select_strategy(algorithm: Algorithm) -> Box<dyn SearchStrategy> {
    match algorithm {
        Algorithm::Dijkstra => Box::new(DijkstraSearch),
        Algorithm::AStar => Box::new(AStarSearch),
        Algorithm::BellmanFord => Box::new(BellmanFordSearch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_report_their_algorithm() {
        assert_eq!(DijkstraSearch.algorithm(), Algorithm::Dijkstra);
        assert_eq!(AStarSearch.algorithm(), Algorithm::AStar);
        assert_eq!(BellmanFordSearch.algorithm(), Algorithm::BellmanFord);
    }

    #[test]
    fn select_strategy_matches_the_request() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::BellmanFord] {
            assert_eq!(select_strategy(algorithm).algorithm(), algorithm);
        }
    }
}
