use std::fmt;

use serde::Serialize;

use crate::geo::Coordinate;

/// Identifier for a node in the routing graph.
pub type NodeId = String;

/// Identifier for a directed edge in the routing graph.
pub type EdgeId = String;

/// Classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    City,
    Landmark,
    Junction,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NodeKind::City => "city",
            NodeKind::Landmark => "landmark",
            NodeKind::Junction => "junction",
        };
        f.write_str(value)
    }
}

/// Road classification carried by every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadKind {
    Highway,
    Street,
    Alley,
}

impl fmt::Display for RoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RoadKind::Highway => "highway",
            RoadKind::Street => "street",
            RoadKind::Alley => "alley",
        };
        f.write_str(value)
    }
}

/// Congestion tier derived from the traffic schedule bracket in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TrafficLevel::Low => "low",
            TrafficLevel::Medium => "medium",
            TrafficLevel::High => "high",
        };
        f.write_str(value)
    }
}

/// A discrete location in the routing graph.
///
/// Nodes are immutable once created except for removal, and are owned
/// exclusively by the [`crate::store::GraphStore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub location: Coordinate,
    pub kind: NodeKind,
}

/// A directed, weighted connection between two nodes.
///
/// Bidirectional roads are represented as two edges with swapped endpoints;
/// each direction carries independent traffic state. Edges reference nodes by
/// id only; the store removes edges whose endpoints disappear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    /// Static geometric length in kilometres.
    pub distance_km: f64,
    /// Static free-flow travel time estimate.
    pub duration_minutes: f64,
    pub road_kind: RoadKind,
    /// Congestion-free cost, typically equal to `distance_km`.
    pub base_weight: f64,
    /// Traffic-adjusted cost used by search; always `>= 0` and derived from
    /// `base_weight` by a multiplier `>= 1` unless manually overridden.
    pub current_weight: f64,
    /// Blocked edges are excluded from every search expansion.
    pub is_blocked: bool,
    pub traffic_level: TrafficLevel,
}

impl Edge {
    /// Create an open edge whose weights equal its geometric length.
    pub fn connecting(
        id: impl Into<EdgeId>,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        distance_km: f64,
        road_kind: RoadKind,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            distance_km,
            duration_minutes: distance_km / road_kind.free_flow_speed_kmh() * 60.0,
            road_kind,
            base_weight: distance_km,
            current_weight: distance_km,
            is_blocked: false,
            traffic_level: TrafficLevel::Low,
        }
    }
}

impl RoadKind {
    /// Free-flow speed assumption used for static duration estimates.
    pub fn free_flow_speed_kmh(self) -> f64 {
        match self {
            RoadKind::Highway => 80.0,
            RoadKind::Street => 40.0,
            RoadKind::Alley => 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connecting_initialises_weights_from_distance() {
        let edge = Edge::connecting("a-b", "a", "b", 4.0, RoadKind::Street);
        assert_eq!(edge.base_weight, 4.0);
        assert_eq!(edge.current_weight, 4.0);
        assert_eq!(edge.duration_minutes, 6.0);
        assert!(!edge.is_blocked);
        assert_eq!(edge.traffic_level, TrafficLevel::Low);
    }

    #[test]
    fn kinds_render_lowercase() {
        assert_eq!(NodeKind::Landmark.to_string(), "landmark");
        assert_eq!(RoadKind::Highway.to_string(), "highway");
        assert_eq!(TrafficLevel::Medium.to_string(), "medium");
    }
}
