//! The capabilities a zone needs from whatever stores its nodes.

use super::NodeId;

/// Node collaborator consumed by [`Zone`](crate::zone::Zone).
///
/// A zone only ever holds [`NodeId`] handles. Distances and link storage are
/// delegated to the implementor, which owns the nodes themselves.
pub trait ProximityNodes {
    /// Whether `node` refers to a live node. Invalid handles are never added
    /// to a zone.
    fn is_valid(&self, node: NodeId) -> bool;

    /// Squared Euclidean distance between two nodes. Must be non-negative.
    fn squared_distance(&self, a: NodeId, b: NodeId) -> f64;

    /// `from` gains an outgoing link to `to`.
    fn record_outgoing_link(&mut self, from: NodeId, to: NodeId);

    /// `to` gains an incoming link from `from`.
    fn record_incoming_link(&mut self, to: NodeId, from: NodeId);
}
