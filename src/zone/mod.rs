//! Rectangular zones and proximity linking.
//!
//! A [`Zone`] owns an ordered list of member nodes and decides, for each new
//! node, whether it is absorbed by an existing member or which members it
//! links to. [`Position`] classifies points against a zone's corners, edges
//! and interior.

mod bounds;
mod partition;
mod position;
mod radii;

pub use bounds::ZoneBounds;
pub use partition::Zone;
pub use position::Position;
pub use radii::{DEFAULT_ABSORPTION_RADIUS, DEFAULT_LINK_RADIUS, LinkRadii};
