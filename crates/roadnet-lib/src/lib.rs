//! roadnet library entry points.
//!
//! This crate maintains a road network as nodes and directed edges, applies
//! time-varying traffic weights and blockage states, and answers
//! shortest-path queries under three interchangeable strategies. Higher-level
//! consumers (CLI, services) should only depend on the functions exported
//! here instead of reimplementing behavior.

pub mod error;
pub mod geo;
pub mod model;
pub mod nearest;
pub mod network;
pub mod routing;
pub mod search;
pub mod store;
pub mod test_helpers;
pub mod traffic;

pub use error::{Error, Result};
pub use geo::Coordinate;
pub use model::{Edge, EdgeId, Node, NodeId, NodeKind, RoadKind, TrafficLevel};
pub use nearest::nearest;
pub use network::{build_graph, build_network, NetworkConfig};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use search::{
    find_path, select_strategy, Algorithm, PathResult, SearchOptions, SearchStrategy,
};
pub use store::{GraphSnapshot, GraphStore};
pub use traffic::{schedule_multiplier, tick, TrafficSimulator};
