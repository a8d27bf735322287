//! Node storage and link graph.
//!
//! Zones refer to nodes through stable [`NodeId`] handles and reach them
//! through the [`ProximityNodes`] trait. [`LinkGraph`] is the petgraph-backed
//! store used by the WASM facade.

mod link_graph;
mod node;
mod proximity;

pub use link_graph::LinkGraph;
pub use node::NodeId;
pub use proximity::ProximityNodes;
