//! Zone Graph - WASM Module
//!
//! This module provides rectangular zones that build a proximity link graph
//! as nodes are inserted. It is compiled to WebAssembly and exposes a
//! JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `zone`: Zones, point classification and the absorb/link insertion rule
//! - `graph`: Node storage and directed links using petgraph's StableGraph
//! - `error`: Construction and configuration errors

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod graph;
pub mod zone;

pub use error::ZoneError;
use graph::{LinkGraph, NodeId};
use zone::{LinkRadii, Position, Zone};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Name of a position code returned by `classify`, e.g. `"UP_LEFT"`.
#[wasm_bindgen(js_name = positionName)]
pub fn position_name(code: u8) -> Option<String> {
    Position::from_code(code).map(|p| p.as_str().to_string())
}

/// Main entry point for zone graphs.
///
/// Owns the node store and a list of zones addressed by index. Which zones a
/// node is inserted into is up to the caller.
#[wasm_bindgen]
pub struct ZoneGraphWasm {
    graph: LinkGraph,
    zones: Vec<Zone>,
    radii: LinkRadii,
}

#[wasm_bindgen]
impl ZoneGraphWasm {
    /// Create an empty zone graph with default radii.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            graph: LinkGraph::new(),
            zones: Vec::new(),
            radii: LinkRadii::default(),
        }
    }

    /// Create a zone graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `node_capacity` - Expected number of nodes
    /// * `link_capacity` - Expected number of links
    #[wasm_bindgen(js_name = withCapacity)]
    pub fn with_capacity(node_capacity: usize, link_capacity: usize) -> Self {
        Self {
            graph: LinkGraph::with_capacity(node_capacity, link_capacity),
            zones: Vec::new(),
            radii: LinkRadii::default(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the default radii from `{ linkRadius, absorptionRadius }`.
    ///
    /// Missing keys keep their defaults. Rejects negative or non-finite radii
    /// and an absorption radius wider than the link radius.
    #[wasm_bindgen(js_name = setRadii)]
    pub fn set_radii(&mut self, config: JsValue) -> Result<(), JsError> {
        let radii: LinkRadii = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        if let Err(err) = radii.validate() {
            tracing::warn!(%err, "rejected link radii");
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
            return Err(err.into());
        }
        self.radii = radii;
        Ok(())
    }

    /// Current default link radius.
    #[wasm_bindgen(js_name = linkRadius)]
    pub fn link_radius(&self) -> f64 {
        self.radii.link_radius
    }

    /// Current default absorption radius.
    #[wasm_bindgen(js_name = absorptionRadius)]
    pub fn absorption_radius(&self) -> f64 {
        self.radii.absorption_radius
    }

    // =========================================================================
    // Zone Operations
    // =========================================================================

    /// Add a zone from its top-left corner and size.
    ///
    /// Returns the zone index.
    #[wasm_bindgen(js_name = addZone)]
    pub fn add_zone(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<u32, JsError> {
        let zone = Zone::new(x, y, width, height)?;
        self.zones.push(zone);
        Ok((self.zones.len() - 1) as u32)
    }

    /// Get the number of zones.
    #[wasm_bindgen(js_name = zoneCount)]
    pub fn zone_count(&self) -> u32 {
        self.zones.len() as u32
    }

    /// Get a zone's bounds as [x1, y1, x2, y2].
    #[wasm_bindgen(js_name = zoneBounds)]
    pub fn zone_bounds(&self, zone: u32) -> Result<Vec<f64>, JsError> {
        let zone = self.zone(zone)?;
        Ok(vec![zone.x1(), zone.y1(), zone.x2(), zone.y2()])
    }

    /// Classify a point against a zone.
    ///
    /// Returns a position code; see `positionName`. A negative or NaN
    /// tolerance is rejected.
    pub fn classify(
        &self,
        zone: u32,
        x: f64,
        y: f64,
        tolerance: f64,
    ) -> Result<u8, JsError> {
        Ok(self.zone(zone)?.try_classify(x, y, tolerance)?.code())
    }

    /// Classify a point using the current link radius as tolerance.
    #[wasm_bindgen(js_name = classifyWithLinkRadius)]
    pub fn classify_with_link_radius(
        &self,
        zone: u32,
        x: f64,
        y: f64,
    ) -> Result<u8, JsError> {
        self.classify(zone, x, y, self.radii.link_radius)
    }

    /// Check if a node is a member of a zone.
    #[wasm_bindgen(js_name = isMember)]
    pub fn is_member(&self, zone: u32, node_id: u32) -> Result<bool, JsError> {
        Ok(self.zone(zone)?.is_member(NodeId(node_id)))
    }

    /// Get a zone's members in insertion order.
    #[wasm_bindgen(js_name = getMembers)]
    pub fn get_members(&self, zone: u32) -> Result<Vec<u32>, JsError> {
        Ok(self.zone(zone)?.members().iter().map(|id| id.0).collect())
    }

    /// Try to insert a node into a zone with explicit radii.
    ///
    /// Returns true if the node joined the zone, false if it was absorbed or
    /// does not exist.
    #[wasm_bindgen(js_name = tryAdd)]
    pub fn try_add(
        &mut self,
        zone: u32,
        node_id: u32,
        link_radius: f64,
        absorption_radius: f64,
    ) -> Result<bool, JsError> {
        let radii = LinkRadii::new(link_radius, absorption_radius);
        self.try_add_with(zone, NodeId(node_id), radii)
    }

    /// Try to insert a node into a zone with the configured radii.
    #[wasm_bindgen(js_name = tryAddDefault)]
    pub fn try_add_default(&mut self, zone: u32, node_id: u32) -> Result<bool, JsError> {
        self.try_add_with(zone, NodeId(node_id), self.radii)
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Add a node at the specified position.
    ///
    /// Returns the stable node ID. The node belongs to no zone until
    /// `tryAdd` accepts it.
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, x: f64, y: f64) -> u32 {
        self.graph.add_node(x, y).0
    }

    /// Add multiple nodes from a Float64Array of positions [x0, y0, x1, y1, ...].
    ///
    /// Returns the number of nodes added.
    #[wasm_bindgen(js_name = addNodesFromPositions)]
    pub fn add_nodes_from_positions(&mut self, positions: &[f64]) -> u32 {
        self.graph.add_nodes_from_positions(positions)
    }

    /// Get the number of nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.graph.node_count()
    }

    /// Get a node's position as [x, y].
    #[wasm_bindgen(js_name = getNodePosition)]
    pub fn get_node_position(&self, node_id: u32) -> Option<Vec<f64>> {
        self.graph
            .get_node_position(NodeId(node_id))
            .map(|(x, y)| vec![x, y])
    }

    // =========================================================================
    // Link Queries
    // =========================================================================

    /// Get the number of directed links.
    #[wasm_bindgen(js_name = linkCount)]
    pub fn link_count(&self) -> u32 {
        self.graph.link_count()
    }

    /// Get the nodes a node links to.
    #[wasm_bindgen(js_name = getLinksOut)]
    pub fn get_links_out(&self, node_id: u32) -> Vec<u32> {
        self.graph.links_out(NodeId(node_id)).into_iter().map(|id| id.0).collect()
    }

    /// Get the nodes linking to a node.
    #[wasm_bindgen(js_name = getLinksIn)]
    pub fn get_links_in(&self, node_id: u32) -> Vec<u32> {
        self.graph.links_in(NodeId(node_id)).into_iter().map(|id| id.0).collect()
    }

    /// Get all links as a Uint32Array of pairs [src0, tgt0, src1, tgt1, ...].
    #[wasm_bindgen(js_name = getLinks)]
    pub fn get_links(&self) -> Vec<u32> {
        self.graph.get_links_flat()
    }

    // =========================================================================
    // Position Buffer Access (Zero-Copy)
    // =========================================================================

    /// Get a zero-copy view of X positions.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Use immediately, do not store.
    #[wasm_bindgen(js_name = getPositionsXView)]
    pub fn get_positions_x_view(&self) -> Float64Array {
        unsafe { Float64Array::view(self.graph.positions_x()) }
    }

    /// Get a zero-copy view of Y positions.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Use immediately, do not store.
    #[wasm_bindgen(js_name = getPositionsYView)]
    pub fn get_positions_y_view(&self) -> Float64Array {
        unsafe { Float64Array::view(self.graph.positions_y()) }
    }

    /// Get the bounding box of all nodes.
    ///
    /// Returns [min_x, min_y, max_x, max_y], or None if there are no nodes.
    #[wasm_bindgen(js_name = getBounds)]
    pub fn get_bounds(&self) -> Option<Vec<f64>> {
        self.graph
            .get_bounds()
            .map(|(min_x, min_y, max_x, max_y)| vec![min_x, min_y, max_x, max_y])
    }

    /// Remove all zones and nodes. Radii are kept.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.zones.clear();
    }
}

impl ZoneGraphWasm {
    fn zone(&self, zone: u32) -> error::Result<&Zone> {
        self.zones
            .get(zone as usize)
            .ok_or(ZoneError::UnknownZone(zone))
    }

    fn try_add_with(
        &mut self,
        zone: u32,
        node: NodeId,
        radii: LinkRadii,
    ) -> Result<bool, JsError> {
        let zone = self
            .zones
            .get_mut(zone as usize)
            .ok_or(ZoneError::UnknownZone(zone))?;
        Ok(zone.try_add(&mut self.graph, radii, node))
    }
}

impl Default for ZoneGraphWasm {
    fn default() -> Self {
        Self::new()
    }
}
