//! High-level route planning over a [`GraphStore`].
//!
//! Requests name their endpoints as node ids, node display names, or
//! free-form `lat,lng` coordinates; coordinates are bridged into the graph
//! through the nearest-node resolver before the search runs against one
//! consistent snapshot.

use serde::Serialize;
use tracing::debug;

use crate::error::{self, Result};
use crate::geo::Coordinate;
use crate::model::NodeId;
use crate::nearest::nearest;
use crate::search::{find_path, Algorithm, PathResult, SearchOptions};
use crate::store::GraphStore;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Node id, node name, or `lat,lng` coordinate.
    pub start: String,
    /// Node id, node name, or `lat,lng` coordinate.
    pub end: String,
    pub algorithm: Algorithm,
    pub options: SearchOptions,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            algorithm: Algorithm::default(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Resolved start node id.
    pub start: NodeId,
    /// Resolved end node id.
    pub end: NodeId,
    #[serde(flatten)]
    pub result: PathResult,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.result.path.len().saturating_sub(1)
    }

    /// No route exists between the resolved endpoints.
    pub fn is_unreachable(&self) -> bool {
        self.result.is_unreachable()
    }
}

/// Compute a route using the requested algorithm.
///
/// An unreachable end node is a normal outcome: the plan carries an empty
/// path and infinite cost for the caller to render as "no route found".
pub fn plan_route(store: &GraphStore, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_endpoint(store, &request.start)?;
    let end = resolve_endpoint(store, &request.end)?;

    let snapshot = store.snapshot();
    let result = find_path(&snapshot, &start, &end, request.algorithm, request.options)?;
    debug!(
        algorithm = %request.algorithm,
        start = %start,
        end = %end,
        hops = result.path.len().saturating_sub(1),
        examined = result.visited_nodes.len(),
        "route planned"
    );

    Ok(RoutePlan { start, end, result })
}

/// Resolve a request endpoint to a node id: exact id first, then display
/// name, then a `lat,lng` coordinate snapped to the closest node.
fn resolve_endpoint(store: &GraphStore, raw: &str) -> Result<NodeId> {
    if store.contains_node(raw) {
        return Ok(raw.to_string());
    }
    if let Some(id) = store.node_id_by_name(raw) {
        return Ok(id.clone());
    }
    if let Some(coordinate) = parse_coordinate(raw) {
        return nearest(&coordinate, store.nodes()).map(|node| node.id.clone());
    }

    Err(error::unknown_node(
        raw,
        store
            .nodes()
            .iter()
            .flat_map(|node| [node.id.as_str(), node.name.as_str()]),
    ))
}

fn parse_coordinate(raw: &str) -> Option<Coordinate> {
    let (lat, lng) = raw.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    Some(Coordinate::new(lat, lng))
}
