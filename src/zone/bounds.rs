//! Axis-aligned zone rectangle.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoneError};

/// Edge coordinates of a zone: `(x1, y1)` is the top-left corner and
/// `(x2, y2)` the bottom-right one.
///
/// Only constructible through [`ZoneBounds::new`] (deserialization included),
/// so `x1 <= x2`, `y1 <= y2` and finiteness always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct ZoneBounds {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Unchecked wire form of [`ZoneBounds`].
#[derive(Deserialize)]
struct RawBounds {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl TryFrom<RawBounds> for ZoneBounds {
    type Error = ZoneError;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Self::new(raw.x1, raw.y1, raw.x2, raw.y2)
    }
}

impl ZoneBounds {
    /// Build bounds from two corners. Fails on non-finite or inverted corners.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        let finite = [x1, y1, x2, y2].iter().all(|v| v.is_finite());
        if !finite || x1 > x2 || y1 > y2 {
            return Err(ZoneError::InvalidBounds { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Build bounds from a top-left corner and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    #[inline]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    #[inline]
    pub fn y2(&self) -> f64 {
        self.y2
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Inclusive containment on all four edges. NaN is never contained.
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }
}
