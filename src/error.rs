//! Error types for zone construction and configuration.
//!
//! The zone algorithms themselves never fail: a rejected insertion is a
//! `false` and an outside point is `Position::None`. Errors only surface when
//! building zones or validating radii.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ZoneError>;

/// Errors surfaced while setting up zones and link radii.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneError {
    #[error("invalid zone bounds ({x1}, {y1})-({x2}, {y2})")]
    InvalidBounds { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidRadius { name: &'static str, value: f64 },

    #[error("absorption radius {absorption} exceeds link radius {link}")]
    AbsorptionExceedsLink { absorption: f64, link: f64 },

    #[error("tolerance must be non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("zone {0} not found")]
    UnknownZone(u32),
}
