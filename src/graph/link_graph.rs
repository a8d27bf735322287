//! LinkGraph - node arena and directed link storage.
//!
//! Topology lives in petgraph's StableGraph. Positions are kept in SoA
//! (Structure of Arrays) buffers so they can be handed to JavaScript as
//! zero-copy views. Nodes are never removed, so a node's slot in the position
//! buffers equals its graph index.

use petgraph::Directed;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use super::node::NodeId;
use super::proximity::ProximityNodes;

/// Node store for zones.
///
/// Every link is a directed edge `new node -> existing member`, so one edge
/// represents both the outgoing side and the incoming side of a link.
/// Link storage is set-like: recording the same `from -> to` link again, as
/// happens when a zone holds a duplicate member, keeps a single edge.
pub struct LinkGraph {
    /// Nodes store their stable NodeId, links carry no weight.
    graph: StableGraph<NodeId, (), Directed>,

    /// X positions (SoA layout)
    pos_x: Vec<f64>,

    /// Y positions (SoA layout)
    pos_y: Vec<f64>,
}

impl LinkGraph {
    /// Create a new empty link graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            pos_x: Vec::new(),
            pos_y: Vec::new(),
        }
    }

    /// Create a link graph with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize, link_capacity: usize) -> Self {
        Self {
            graph: StableGraph::with_capacity(node_capacity, link_capacity),
            pos_x: Vec::with_capacity(node_capacity),
            pos_y: Vec::with_capacity(node_capacity),
        }
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Add a node at the specified position.
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let id = NodeId(self.pos_x.len() as u32);
        let index = self.graph.add_node(id);
        debug_assert_eq!(index.index(), id.slot());

        self.pos_x.push(x);
        self.pos_y.push(y);
        id
    }

    /// Add multiple nodes from a positions array [x0, y0, x1, y1, ...].
    ///
    /// A trailing unpaired coordinate is ignored.
    pub fn add_nodes_from_positions(&mut self, positions: &[f64]) -> u32 {
        let count = positions.len() / 2;
        self.pos_x.reserve(count);
        self.pos_y.reserve(count);

        for pair in positions.chunks_exact(2) {
            self.add_node(pair[0], pair[1]);
        }
        count as u32
    }

    /// Check whether a node exists.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.slot() < self.pos_x.len()
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> u32 {
        self.graph.node_count() as u32
    }

    /// Get a node's position.
    pub fn get_node_position(&self, id: NodeId) -> Option<(f64, f64)> {
        self.contains_node(id)
            .then(|| (self.pos_x[id.slot()], self.pos_y[id.slot()]))
    }

    // =========================================================================
    // Link Operations
    // =========================================================================

    /// Get the number of directed links.
    pub fn link_count(&self) -> u32 {
        self.graph.edge_count() as u32
    }

    /// Check whether `from` links to `to`.
    pub fn has_link(&self, from: NodeId, to: NodeId) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) {
            return false;
        }
        self.graph
            .find_edge(NodeIndex::new(from.slot()), NodeIndex::new(to.slot()))
            .is_some()
    }

    /// Nodes that `id` links to, sorted by id.
    pub fn links_out(&self, id: NodeId) -> Vec<NodeId> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Nodes that link to `id`, sorted by id.
    pub fn links_in(&self, id: NodeId) -> Vec<NodeId> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Get all links as pairs [src0, tgt0, src1, tgt1, ...].
    pub fn get_links_flat(&self) -> Vec<u32> {
        let mut pairs = Vec::with_capacity(self.graph.edge_count() * 2);
        for edge in self.graph.edge_references() {
            pairs.push(self.graph[edge.source()].0);
            pairs.push(self.graph[edge.target()].0);
        }
        pairs
    }

    fn neighbors(&self, id: NodeId, direction: Direction) -> Vec<NodeId> {
        if !self.contains_node(id) {
            return Vec::new();
        }
        let mut ids: Vec<NodeId> = self
            .graph
            .neighbors_directed(NodeIndex::new(id.slot()), direction)
            .map(|n| self.graph[n])
            .collect();
        ids.sort_unstable();
        ids
    }

    fn link(&mut self, from: NodeId, to: NodeId) {
        if !self.contains_node(from) || !self.contains_node(to) {
            tracing::warn!(%from, %to, "ignoring link to a missing node");
            return;
        }
        self.graph
            .update_edge(NodeIndex::new(from.slot()), NodeIndex::new(to.slot()), ());
    }

    // =========================================================================
    // Buffer Access
    // =========================================================================

    /// Get X positions slice.
    pub fn positions_x(&self) -> &[f64] {
        &self.pos_x
    }

    /// Get Y positions slice.
    pub fn positions_y(&self) -> &[f64] {
        &self.pos_y
    }

    // =========================================================================
    // Utilities
    // =========================================================================

    /// Get the bounding box of all nodes as (min_x, min_y, max_x, max_y).
    pub fn get_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        if self.pos_x.is_empty() {
            return None;
        }

        let (min_x, max_x) = self
            .pos_x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let (min_y, max_y) = self
            .pos_y
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
                (lo.min(y), hi.max(y))
            });

        Some((min_x, min_y, max_x, max_y))
    }

    /// Clear all nodes and links.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.pos_x.clear();
        self.pos_y.clear();
    }
}

impl Default for LinkGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximityNodes for LinkGraph {
    fn is_valid(&self, node: NodeId) -> bool {
        self.contains_node(node)
    }

    /// Missing nodes are infinitely far away, so they never absorb or link.
    fn squared_distance(&self, a: NodeId, b: NodeId) -> f64 {
        match (self.get_node_position(a), self.get_node_position(b)) {
            (Some((ax, ay)), Some((bx, by))) => {
                let dx = ax - bx;
                let dy = ay - by;
                dx * dx + dy * dy
            }
            _ => f64::INFINITY,
        }
    }

    fn record_outgoing_link(&mut self, from: NodeId, to: NodeId) {
        self.link(from, to);
    }

    fn record_incoming_link(&mut self, to: NodeId, from: NodeId) {
        self.link(from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node() {
        let mut graph = LinkGraph::new();
        let id = graph.add_node(10.0, 20.0);

        assert_eq!(id, NodeId(0));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.get_node_position(id), Some((10.0, 20.0)));
        assert_eq!(graph.get_node_position(NodeId(1)), None);
    }

    #[test]
    fn test_add_nodes_from_positions() {
        let mut graph = LinkGraph::new();
        let count = graph.add_nodes_from_positions(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 9.0]);

        assert_eq!(count, 3);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.positions_x(), &[0.0, 1.0, 2.0]);
        assert_eq!(graph.positions_y(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_squared_distance() {
        let mut graph = LinkGraph::new();
        let a = graph.add_node(0.0, 0.0);
        let b = graph.add_node(3.0, 4.0);

        assert_eq!(graph.squared_distance(a, b), 25.0);
        assert_eq!(graph.squared_distance(b, a), 25.0);
        assert_eq!(graph.squared_distance(a, a), 0.0);
        assert_eq!(graph.squared_distance(a, NodeId(99)), f64::INFINITY);
    }

    #[test]
    fn test_is_valid() {
        let mut graph = LinkGraph::new();
        let a = graph.add_node(0.0, 0.0);

        assert!(graph.is_valid(a));
        assert!(!graph.is_valid(NodeId(1)));
    }

    #[test]
    fn test_outgoing_and_incoming_share_one_link() {
        let mut graph = LinkGraph::new();
        let a = graph.add_node(0.0, 0.0);
        let b = graph.add_node(1.0, 0.0);

        graph.record_outgoing_link(b, a);
        graph.record_incoming_link(a, b);

        assert_eq!(graph.link_count(), 1);
        assert!(graph.has_link(b, a));
        assert!(!graph.has_link(a, b));
        assert_eq!(graph.links_out(b), vec![a]);
        assert_eq!(graph.links_in(a), vec![b]);
        assert!(graph.links_out(a).is_empty());
        assert!(graph.links_in(b).is_empty());
    }

    #[test]
    fn test_link_to_missing_node_is_ignored() {
        let mut graph = LinkGraph::new();
        let a = graph.add_node(0.0, 0.0);

        graph.record_outgoing_link(a, NodeId(5));
        assert_eq!(graph.link_count(), 0);
        assert!(!graph.has_link(a, NodeId(5)));
        assert!(graph.links_out(NodeId(5)).is_empty());
    }

    #[test]
    fn test_links_flat() {
        let mut graph = LinkGraph::new();
        let a = graph.add_node(0.0, 0.0);
        let b = graph.add_node(1.0, 0.0);
        let c = graph.add_node(2.0, 0.0);

        graph.record_outgoing_link(c, a);
        graph.record_outgoing_link(c, b);

        let flat = graph.get_links_flat();
        assert_eq!(flat.len(), 4);
        let mut pairs: Vec<(u32, u32)> = flat.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(c.0, a.0), (c.0, b.0)]);
    }

    #[test]
    fn test_bounds() {
        let mut graph = LinkGraph::new();
        assert_eq!(graph.get_bounds(), None);

        graph.add_node(-10.0, -5.0);
        graph.add_node(10.0, 5.0);
        assert_eq!(graph.get_bounds(), Some((-10.0, -5.0, 10.0, 5.0)));
    }

    #[test]
    fn test_clear() {
        let mut graph = LinkGraph::new();
        let a = graph.add_node(0.0, 0.0);
        let b = graph.add_node(1.0, 1.0);
        graph.record_outgoing_link(b, a);

        graph.clear();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.link_count(), 0);
        assert!(!graph.contains_node(a));

        assert_eq!(graph.add_node(5.0, 5.0), NodeId(0));
    }
}
