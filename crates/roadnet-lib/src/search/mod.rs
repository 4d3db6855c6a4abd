//! Shortest-path search over a graph snapshot.
//!
//! Three interchangeable strategies share one contract: blocked edges are
//! never expanded, unknown endpoints fail with [`crate::Error::UnknownNode`],
//! `start == end` yields a single-node path at zero cost, and an unreachable
//! end is a normal result with an empty path and infinite cost. Frontier
//! ties break by insertion order via a monotonic sequence number, so
//! visited-node sequences are reproducible run to run.

mod astar;
mod bellman_ford;
mod dijkstra;
mod strategy;

pub use strategy::{
    select_strategy, AStarSearch, BellmanFordSearch, DijkstraSearch, SearchStrategy,
};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;

use crate::error::{self, Result};
use crate::model::NodeId;
use crate::store::GraphSnapshot;
use crate::traffic::COST_TO_MINUTES;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Uniform-cost search (min-priority frontier keyed by distance).
    #[default]
    Dijkstra,
    /// Heuristic-guided search keyed by distance plus great-circle estimate.
    #[serde(rename = "a-star")]
    AStar,
    /// Edge-relaxation search, tolerant of weights shifting between passes.
    #[serde(rename = "bellman-ford")]
    BellmanFord,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a-star",
            Algorithm::BellmanFord => "bellman-ford",
        };
        f.write_str(value)
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a-star" | "astar" | "a_star" => Ok(Algorithm::AStar),
            "bellman-ford" | "bellmanford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            other => Err(format!(
                "unknown algorithm '{other}' (expected dijkstra, a-star, or bellman-ford)"
            )),
        }
    }
}

/// Options shared by every search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Cooperative cancellation deadline, checked between frontier pops
    /// (and between relaxation passes). On expiry the search returns
    /// [`crate::Error::Cancelled`] rather than a partial path.
    pub deadline: Option<Instant>,
}

impl SearchOptions {
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub(crate) fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    /// Node ids from start to end; empty when no route exists.
    pub path: Vec<NodeId>,
    /// Sum of `current_weight` along the path; infinite when unreachable.
    pub total_cost: f64,
    /// Traffic-adjusted travel estimate derived from `total_cost`.
    pub estimated_time_minutes: f64,
    /// Nodes examined by the algorithm, in the order defined per strategy.
    pub visited_nodes: Vec<NodeId>,
    pub algorithm: Algorithm,
}

impl PathResult {
    pub fn is_unreachable(&self) -> bool {
        self.path.is_empty()
    }

    fn reachable(algorithm: Algorithm, path: Vec<NodeId>, total_cost: f64, visited: Vec<NodeId>) -> Self {
        Self {
            path,
            total_cost,
            estimated_time_minutes: (total_cost * COST_TO_MINUTES).round(),
            visited_nodes: visited,
            algorithm,
        }
    }

    fn unreachable(algorithm: Algorithm, visited: Vec<NodeId>) -> Self {
        Self {
            path: Vec::new(),
            total_cost: f64::INFINITY,
            estimated_time_minutes: f64::INFINITY,
            visited_nodes: visited,
            algorithm,
        }
    }

    fn trivial(algorithm: Algorithm, node: &str) -> Self {
        Self {
            path: vec![node.to_string()],
            total_cost: 0.0,
            estimated_time_minutes: 0.0,
            visited_nodes: vec![node.to_string()],
            algorithm,
        }
    }
}

/// Run the selected algorithm over a snapshot.
pub fn find_path(
    snapshot: &GraphSnapshot,
    start: &str,
    end: &str,
    algorithm: Algorithm,
    options: SearchOptions,
) -> Result<PathResult> {
    select_strategy(algorithm).run(snapshot, start, end, options)
}

/// Validate both endpoints against the snapshot, resolving them to node
/// positions. Suggestions for near-miss ids come from the snapshot's ids.
fn endpoints(snapshot: &GraphSnapshot, start: &str, end: &str) -> Result<(usize, usize)> {
    let resolve = |id: &str| {
        snapshot.position_of(id).ok_or_else(|| {
            error::unknown_node(id, snapshot.nodes().iter().map(|node| node.id.as_str()))
        })
    };
    Ok((resolve(start)?, resolve(end)?))
}

/// Follow parent pointers backwards from `end` to `start`.
fn reconstruct(
    parents: &[Option<usize>],
    start: usize,
    end: usize,
    snapshot: &GraphSnapshot,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(position) = current {
        path.push(snapshot.node_at(position).id.clone());
        if position == start {
            break;
        }
        current = parents[position];
    }
    path.reverse();
    path
}

/// Total-order wrapper so f64 priorities can live in a heap.
#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier entry for the priority-queue strategies. Priority ties resolve
/// to the earliest-pushed entry, keeping expansion order stable.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    priority: FloatOrd,
    sequence: u64,
    position: usize,
}

impl FrontierEntry {
    fn new(priority: f64, sequence: u64, position: usize) -> Self {
        Self {
            priority: FloatOrd(priority),
            sequence,
            position,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority,
        // then by insertion sequence.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
