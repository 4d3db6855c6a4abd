//! Synthetic road-network construction.
//!
//! The engine only requires the output shape here: valid node and edge sets
//! with `base_weight` and `current_weight` initialised and equal. Real-world
//! data sources can replace this generator behind the same signature; the
//! bundled one places concentric rings of nodes around a center so stores,
//! searches, and the CLI are usable without external data.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::geo::Coordinate;
use crate::model::{Edge, Node, NodeKind, RoadKind};
use crate::store::GraphStore;

/// Shape and seed for the synthetic generator.
#[derive(Debug, Clone, Copy)]
pub struct NetworkConfig {
    pub rings: usize,
    pub nodes_per_ring: usize,
    /// Seed for the road-kind variation; placement itself is deterministic.
    pub seed: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rings: 2,
            nodes_per_ring: 8,
            seed: 0,
        }
    }
}

/// Generate a network of nodes and directed edge pairs around `center`,
/// spanning out to `radius_km`.
///
/// One central city, then `rings` concentric rings of nodes joined by
/// street-or-alley ring roads and highway spokes. Every road is a pair of
/// directed edges with swapped endpoints carrying independent traffic state.
pub fn build_network(
    center: Coordinate,
    radius_km: f64,
    config: &NetworkConfig,
) -> (Vec<Node>, Vec<Edge>) {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut nodes = vec![Node {
        id: "central".to_string(),
        name: "Central".to_string(),
        location: center,
        kind: NodeKind::City,
    }];

    for ring in 1..=config.rings {
        let ring_radius = radius_km * ring as f64 / config.rings as f64;
        for slot in 0..config.nodes_per_ring {
            let angle = std::f64::consts::TAU * slot as f64 / config.nodes_per_ring as f64;
            let location = center.offset_km(ring_radius * angle.cos(), ring_radius * angle.sin());
            nodes.push(Node {
                id: format!("r{ring}-n{slot}"),
                name: node_name(ring, slot, config.rings),
                location,
                kind: node_kind(ring, slot, config.rings),
            });
        }
    }

    let mut edges = Vec::new();
    let locate = |id: &str, nodes: &[Node]| -> Coordinate {
        nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.location)
            .unwrap_or(center)
    };

    for ring in 1..=config.rings {
        for slot in 0..config.nodes_per_ring {
            let here = format!("r{ring}-n{slot}");

            // Ring road to the next node around the circle.
            let next_slot = (slot + 1) % config.nodes_per_ring;
            let around = format!("r{ring}-n{next_slot}");
            let kind = if rng.gen_bool(0.2) {
                RoadKind::Alley
            } else {
                RoadKind::Street
            };
            let span = locate(&here, &nodes).distance_km(&locate(&around, &nodes));
            push_pair(&mut edges, &here, &around, span, kind);

            // Highway spoke towards the ring below (or the center).
            let inward = if ring == 1 {
                "central".to_string()
            } else {
                format!("r{}-n{slot}", ring - 1)
            };
            let span = locate(&here, &nodes).distance_km(&locate(&inward, &nodes));
            push_pair(&mut edges, &here, &inward, span, RoadKind::Highway);
        }
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        radius_km,
        "synthetic network generated"
    );
    (nodes, edges)
}

/// Build a ready-to-query store around `center`.
pub fn build_graph(center: Coordinate, radius_km: f64, config: &NetworkConfig) -> Result<GraphStore> {
    let (nodes, edges) = build_network(center, radius_km, config);
    GraphStore::from_parts(nodes, edges)
}

fn push_pair(edges: &mut Vec<Edge>, a: &str, b: &str, distance_km: f64, kind: RoadKind) {
    // Road lengths round up to the next 100 m: weights stay on the tenth
    // grid used by traffic rounding and never drop below the straight-line
    // distance the A* heuristic relies on.
    let distance_km = (distance_km * 10.0).ceil() / 10.0;
    edges.push(Edge::connecting(
        format!("{a}->{b}"),
        a,
        b,
        distance_km,
        kind,
    ));
    edges.push(Edge::connecting(
        format!("{b}->{a}"),
        b,
        a,
        distance_km,
        kind,
    ));
}

fn node_kind(ring: usize, slot: usize, rings: usize) -> NodeKind {
    if ring == rings {
        NodeKind::City
    } else if slot % 4 == 0 {
        NodeKind::Landmark
    } else {
        NodeKind::Junction
    }
}

fn node_name(ring: usize, slot: usize, rings: usize) -> String {
    match node_kind(ring, slot, rings) {
        NodeKind::City => format!("Gate {slot}"),
        NodeKind::Landmark => format!("Landmark {ring}-{slot}"),
        NodeKind::Junction => format!("Junction {ring}-{slot}"),
    }
}
