// Test-only helpers for `roadnet-lib` tests
#![allow(dead_code)]

use crate::geo::Coordinate;
use crate::model::{Edge, Node, NodeKind, RoadKind};

/// Junction node at the given coordinate, named after its id.
pub fn node_at(id: &str, lat: f64, lng: f64) -> Node {
    Node {
        id: id.to_string(),
        name: id.to_string(),
        location: Coordinate::new(lat, lng),
        kind: NodeKind::Junction,
    }
}

/// Street edge with an explicit weight, ignoring geometry.
pub fn weighted_edge(id: &str, from: &str, to: &str, weight: f64) -> Edge {
    let mut edge = Edge::connecting(id, from, to, weight, RoadKind::Street);
    edge.base_weight = weight;
    edge.current_weight = weight;
    edge
}
