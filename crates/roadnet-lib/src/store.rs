use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::model::{Edge, Node, NodeId};
use crate::nearest;

/// Owner of the node and edge collections and the derived adjacency index.
///
/// All mutation funnels through the operations below; the adjacency index is
/// never the source of truth, only an acceleration structure rebuilt whenever
/// topology changes. Nodes and edges live in insertion-ordered vectors so
/// adjacency lists, relaxation order, and tie-breaking stay reproducible.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    edge_index: HashMap<String, usize>,
    /// Outgoing edge positions per node, in edge insertion order.
    adjacency: HashMap<NodeId, Vec<usize>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from complete node and edge collections, validating id
    /// uniqueness and edge endpoint references.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut store = Self::new();
        for node in nodes {
            store.insert_node(node)?;
        }
        for edge in edges {
            store.insert_edge(edge)?;
        }
        store.rebuild_adjacency();
        Ok(store)
    }

    /// Insert a node. Fails with [`Error::DuplicateId`] when the id is taken.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        self.insert_node(node)?;
        self.rebuild_adjacency();
        Ok(())
    }

    /// Remove a node and every edge referencing it on either endpoint.
    /// A no-op when the node is absent.
    pub fn remove_node(&mut self, id: &str) {
        if !self.node_index.contains_key(id) {
            return;
        }

        self.nodes.retain(|node| node.id != id);
        let before = self.edges.len();
        self.edges.retain(|edge| edge.from != id && edge.to != id);
        let cascaded = before - self.edges.len();

        self.reindex();
        self.rebuild_adjacency();
        debug!(node = id, cascaded, "removed node and incident edges");
    }

    /// Insert a directed edge. Fails with [`Error::InvalidReference`] when an
    /// endpoint does not name an existing node.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.insert_edge(edge)?;
        self.rebuild_adjacency();
        Ok(())
    }

    /// Remove an edge. A no-op when the edge is absent.
    pub fn remove_edge(&mut self, id: &str) {
        if !self.edge_index.contains_key(id) {
            return;
        }

        self.edges.retain(|edge| edge.id != id);
        self.reindex();
        self.rebuild_adjacency();
        debug!(edge = id, "removed edge");
    }

    /// Overwrite an edge's traffic-adjusted weight.
    ///
    /// Fails with [`Error::NotFound`] when the edge is absent. Setting a
    /// weight below the edge's geometric distance voids the A* optimality
    /// guarantee, since the great-circle heuristic may then overestimate the
    /// true remaining cost.
    pub fn set_edge_weight(&mut self, id: &str, weight: f64) -> Result<()> {
        let edge = self.edge_mut(id)?;
        edge.current_weight = weight;
        Ok(())
    }

    /// Toggle an edge's blocked flag. Blocked edges keep receiving traffic
    /// updates but are excluded from every search expansion.
    pub fn set_blocked(&mut self, id: &str, blocked: bool) -> Result<()> {
        let edge = self.edge_mut(id)?;
        edge.is_blocked = blocked;
        Ok(())
    }

    /// Capture a consistent view for a single search run. The snapshot owns
    /// copies of the node and edge collections, so simulator ticks or admin
    /// mutations happening afterwards are never observed mid-traversal.
    pub fn snapshot(&self) -> GraphSnapshot {
        let outgoing = self
            .nodes
            .iter()
            .map(|node| {
                self.adjacency
                    .get(&node.id)
                    .map(|positions| {
                        positions
                            .iter()
                            .map(|&position| self.edges[position].clone())
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();

        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            node_index: self.node_index.clone(),
            outgoing,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&position| &self.nodes[position])
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|&position| &self.edges[position])
    }

    /// Lookup a node id by its exact display name.
    pub fn node_id_by_name(&self, name: &str) -> Option<&NodeId> {
        self.nodes
            .iter()
            .find(|node| node.name == name)
            .map(|node| &node.id)
    }

    /// Resolve the node closest to an arbitrary coordinate.
    pub fn nearest_node(&self, coordinate: &Coordinate) -> Result<&Node> {
        nearest::nearest(coordinate, &self.nodes)
    }

    /// Mutable access for the traffic simulator. Weight and level updates do
    /// not change topology, so the adjacency index stays valid.
    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    fn insert_node(&mut self, node: Node) -> Result<()> {
        if self.node_index.contains_key(&node.id) {
            return Err(Error::DuplicateId {
                id: node.id.clone(),
            });
        }
        self.node_index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        if self.edge_index.contains_key(&edge.id) {
            return Err(Error::DuplicateId {
                id: edge.id.clone(),
            });
        }
        for endpoint in [&edge.from, &edge.to] {
            if !self.node_index.contains_key(endpoint) {
                return Err(Error::InvalidReference {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
        self.edge_index.insert(edge.id.clone(), self.edges.len());
        self.edges.push(edge);
        Ok(())
    }

    fn edge_mut(&mut self, id: &str) -> Result<&mut Edge> {
        match self.edge_index.get(id) {
            Some(&position) => Ok(&mut self.edges[position]),
            None => Err(Error::NotFound { id: id.to_string() }),
        }
    }

    /// Recompute the id-to-position maps after a removal compacts a vector.
    fn reindex(&mut self) {
        self.node_index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id.clone(), position))
            .collect();
        self.edge_index = self
            .edges
            .iter()
            .enumerate()
            .map(|(position, edge)| (edge.id.clone(), position))
            .collect();
    }

    /// Full rebuild: an empty outgoing list per node, then every edge
    /// appended to its origin's list in insertion order. O(|V| + |E|).
    fn rebuild_adjacency(&mut self) {
        let mut adjacency: HashMap<NodeId, Vec<usize>> = self
            .nodes
            .iter()
            .map(|node| (node.id.clone(), Vec::new()))
            .collect();
        for (position, edge) in self.edges.iter().enumerate() {
            if let Some(outgoing) = adjacency.get_mut(&edge.from) {
                outgoing.push(position);
            }
        }
        self.adjacency = adjacency;
    }
}

/// Immutable view of the graph taken for the duration of one search.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    /// Outgoing edges per node position, in edge insertion order.
    outgoing: Vec<Vec<Edge>>,
}

impl GraphSnapshot {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Every edge in insertion order; Bellman-Ford relaxes over this.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub(crate) fn node_at(&self, position: usize) -> &Node {
        &self.nodes[position]
    }

    pub(crate) fn outgoing_at(&self, position: usize) -> &[Edge] {
        &self.outgoing[position]
    }

    /// Outgoing edges for a node id, empty when the node is unknown.
    pub fn outgoing(&self, id: &str) -> &[Edge] {
        self.position_of(id)
            .map(|position| self.outgoing[position].as_slice())
            .unwrap_or(&[])
    }
}
