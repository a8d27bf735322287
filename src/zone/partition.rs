//! Zone - a rectangle owning an ordered set of member nodes.
//!
//! Inserting a node into a zone builds its proximity links: the new node is
//! compared with every member in insertion order. A member closer than the
//! absorption radius rejects the node outright and any links found so far are
//! discarded. Otherwise the node links to every member closer than the link
//! radius. All comparisons use squared distances and strict `<`.

use crate::error::{Result, ZoneError};
use crate::graph::{NodeId, ProximityNodes};

use super::bounds::ZoneBounds;
use super::position::Position;
use super::radii::LinkRadii;

/// A rectangular zone and its members.
///
/// Members are [`NodeId`] handles into a node store owned elsewhere. Bounds are
/// fixed at construction and membership only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    bounds: ZoneBounds,
    members: Vec<NodeId>,
}

impl Zone {
    /// Create a zone from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        ZoneBounds::from_origin_size(x, y, width, height).map(Self::from_bounds)
    }

    /// Create a zone from its top-left and bottom-right corners.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        ZoneBounds::new(x1, y1, x2, y2).map(Self::from_bounds)
    }

    /// Create a zone from bounds already checked by [`ZoneBounds::new`].
    pub fn from_bounds(bounds: ZoneBounds) -> Self {
        Self {
            bounds,
            members: Vec::new(),
        }
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    #[inline]
    pub fn bounds(&self) -> ZoneBounds {
        self.bounds
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        self.bounds.x1()
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.bounds.y1()
    }

    #[inline]
    pub fn x2(&self) -> f64 {
        self.bounds.x2()
    }

    #[inline]
    pub fn y2(&self) -> f64 {
        self.bounds.y2()
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Where `(x, y)` falls in this zone. See [`Position::classify`].
    pub fn classify(&self, x: f64, y: f64, tolerance: f64) -> Position {
        Position::classify(&self.bounds, x, y, tolerance)
    }

    /// Like [`Zone::classify`], but rejects a negative or NaN tolerance
    /// instead of treating it as a contract violation.
    pub fn try_classify(&self, x: f64, y: f64, tolerance: f64) -> Result<Position> {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(ZoneError::InvalidTolerance(tolerance));
        }
        Ok(self.classify(x, y, tolerance))
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Members in insertion order.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Linear scan over the current members.
    pub fn is_member(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    /// Try to add `node` to the zone.
    ///
    /// Builds the node's links (see [`Zone::build_links`]) and appends it to
    /// the members if it was not absorbed. Returns whether it was added.
    pub fn try_add<N>(&mut self, nodes: &mut N, radii: LinkRadii, node: NodeId) -> bool
    where
        N: ProximityNodes + ?Sized,
    {
        let accepted = self.build_links(nodes, radii, node);
        if accepted {
            self.members.push(node);
        }
        accepted
    }

    /// Link `node` to the members within `radii.link_radius`, unless a member
    /// within `radii.absorption_radius` absorbs it.
    ///
    /// Returns `false` when the node is invalid or absorbed; in both cases no
    /// link is recorded. Membership is left untouched.
    pub fn build_links<N>(&self, nodes: &mut N, radii: LinkRadii, node: NodeId) -> bool
    where
        N: ProximityNodes + ?Sized,
    {
        if !nodes.is_valid(node) {
            return false;
        }

        let (link_sq, absorption_sq) = radii.squared();
        let mut linked = Vec::new();

        for &member in &self.members {
            let distance = nodes.squared_distance(node, member);
            if distance < absorption_sq {
                tracing::debug!(%node, %member, distance, "node absorbed");
                return false;
            } else if distance < link_sq {
                linked.push(member);
            }
        }

        for &member in &linked {
            nodes.record_outgoing_link(node, member);
            nodes.record_incoming_link(member, node);
        }

        tracing::trace!(%node, links = linked.len(), "node accepted");
        true
    }
}
