//! Where a point falls relative to a zone.
//!
//! Classification reports the corner, edge or interior region of a zone that a
//! point lies in. A point counts as near an edge when the edge line is within
//! `tolerance` of it along that axis only, so the near-corner regions are
//! squares rather than quarter circles. Callers use the result to decide which
//! neighbouring zones a node should also be tested against.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bounds::ZoneBounds;

/// Region of a zone containing a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Position {
    Center = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
    UpLeft = 5,
    UpRight = 6,
    DownLeft = 7,
    DownRight = 8,
    /// Outside the zone.
    None = 9,
}

impl Position {
    /// Classify `(x, y)` against `bounds`.
    ///
    /// Corners win over edges and edges over the center: a point near the top
    /// and left edges is always `UpLeft`.
    pub fn classify(bounds: &ZoneBounds, x: f64, y: f64, tolerance: f64) -> Position {
        debug_assert!(tolerance >= 0.0, "tolerance must be non-negative");

        if !bounds.contains_point(x, y) {
            return Position::None;
        }

        let left = bounds.x1() >= x - tolerance;
        let up = bounds.y1() >= y - tolerance;
        let right = bounds.x2() <= x + tolerance;
        let down = bounds.y2() <= y + tolerance;

        match (up, down, left, right) {
            (true, _, true, _) => Position::UpLeft,
            (true, _, _, true) => Position::UpRight,
            (_, true, true, _) => Position::DownLeft,
            (_, true, _, true) => Position::DownRight,
            (true, ..) => Position::Up,
            (_, true, ..) => Position::Down,
            (.., true, _) => Position::Left,
            (.., true) => Position::Right,
            _ => Position::Center,
        }
    }

    /// Numeric code used across the WASM boundary.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Position::code`].
    pub fn from_code(code: u8) -> Option<Position> {
        Some(match code {
            0 => Position::Center,
            1 => Position::Up,
            2 => Position::Down,
            3 => Position::Left,
            4 => Position::Right,
            5 => Position::UpLeft,
            6 => Position::UpRight,
            7 => Position::DownLeft,
            8 => Position::DownRight,
            9 => Position::None,
            _ => return None,
        })
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self != Position::None
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Position::UpLeft | Position::UpRight | Position::DownLeft | Position::DownRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            Position::Up | Position::Down | Position::Left | Position::Right
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Center => "CENTER",
            Position::Up => "UP",
            Position::Down => "DOWN",
            Position::Left => "LEFT",
            Position::Right => "RIGHT",
            Position::UpLeft => "UP_LEFT",
            Position::UpRight => "UP_RIGHT",
            Position::DownLeft => "DOWN_LEFT",
            Position::DownRight => "DOWN_RIGHT",
            Position::None => "NONE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ZoneBounds {
        ZoneBounds::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_reference_points() {
        let b = square();
        assert_eq!(Position::classify(&b, 0.5, 0.5, 1.0), Position::UpLeft);
        assert_eq!(Position::classify(&b, 5.0, 0.2, 1.0), Position::Up);
        assert_eq!(Position::classify(&b, 5.0, 5.0, 1.0), Position::Center);
        assert_eq!(Position::classify(&b, 11.0, 5.0, 1.0), Position::None);
    }

    #[test]
    fn test_all_corners() {
        let b = square();
        assert_eq!(Position::classify(&b, 0.5, 0.5, 1.0), Position::UpLeft);
        assert_eq!(Position::classify(&b, 9.5, 0.5, 1.0), Position::UpRight);
        assert_eq!(Position::classify(&b, 0.5, 9.5, 1.0), Position::DownLeft);
        assert_eq!(Position::classify(&b, 9.5, 9.5, 1.0), Position::DownRight);
    }

    #[test]
    fn test_all_edges() {
        let b = square();
        assert_eq!(Position::classify(&b, 5.0, 0.5, 1.0), Position::Up);
        assert_eq!(Position::classify(&b, 5.0, 9.5, 1.0), Position::Down);
        assert_eq!(Position::classify(&b, 0.5, 5.0, 1.0), Position::Left);
        assert_eq!(Position::classify(&b, 9.5, 5.0, 1.0), Position::Right);
    }

    #[test]
    fn test_interior_beyond_tolerance_is_center() {
        let b = square();
        for i in 0..=14 {
            for j in 0..=14 {
                let x = 1.5 + i as f64 * 0.5;
                let y = 1.5 + j as f64 * 0.5;
                if x < 9.0 && y < 9.0 {
                    assert_eq!(Position::classify(&b, x, y, 1.0), Position::Center, "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_outside_ignores_tolerance() {
        let b = square();
        for &(x, y) in &[(-0.1, 5.0), (10.1, 5.0), (5.0, -0.1), (5.0, 10.1), (-5.0, -5.0), (20.0, 20.0)] {
            assert_eq!(Position::classify(&b, x, y, 0.0), Position::None);
            assert_eq!(Position::classify(&b, x, y, 100.0), Position::None);
        }
        assert_eq!(Position::classify(&b, f64::NAN, 5.0, 1.0), Position::None);
    }

    #[test]
    fn test_corner_beats_edge() {
        let b = square();
        // Near top and left: never reported as a single edge.
        assert_eq!(Position::classify(&b, 1.0, 1.0, 1.0), Position::UpLeft);
        assert_eq!(Position::classify(&b, 0.0, 0.0, 0.0), Position::UpLeft);
    }

    #[test]
    fn test_tolerance_is_rectangular() {
        let b = square();
        // ~1.27 from the corner, but within 1 of both edges.
        assert_eq!(Position::classify(&b, 0.9, 0.9, 1.0), Position::UpLeft);
    }

    #[test]
    fn test_edges_are_inclusive() {
        let b = square();
        assert_eq!(Position::classify(&b, 0.0, 5.0, 0.0), Position::Left);
        assert_eq!(Position::classify(&b, 10.0, 5.0, 0.0), Position::Right);
        assert_eq!(Position::classify(&b, 10.0, 10.0, 0.0), Position::DownRight);
        assert_eq!(Position::classify(&b, 5.0, 5.0, 0.0), Position::Center);
    }

    #[test]
    fn test_up_takes_priority_over_down_in_thin_zone() {
        let b = ZoneBounds::new(0.0, 0.0, 10.0, 1.0).unwrap();
        assert_eq!(Position::classify(&b, 5.0, 0.5, 1.0), Position::Up);
        assert_eq!(Position::classify(&b, 0.5, 0.5, 1.0), Position::UpLeft);
    }

    #[test]
    fn test_large_tolerance_is_up_left_everywhere_inside() {
        let b = square();
        assert_eq!(Position::classify(&b, 9.0, 9.0, 50.0), Position::UpLeft);
    }

    #[test]
    fn test_codes() {
        for code in 0..=9 {
            let position = Position::from_code(code).unwrap();
            assert_eq!(position.code(), code);
        }
        assert_eq!(Position::from_code(10), None);
    }

    #[test]
    fn test_predicates() {
        assert!(Position::UpLeft.is_corner());
        assert!(!Position::UpLeft.is_edge());
        assert!(Position::Left.is_edge());
        assert!(Position::Center.is_inside());
        assert!(!Position::Center.is_corner());
        assert!(!Position::None.is_inside());
    }

    #[test]
    fn test_names() {
        assert_eq!(Position::DownRight.to_string(), "DOWN_RIGHT");
        assert_eq!(serde_json::to_string(&Position::UpLeft).unwrap(), "\"UP_LEFT\"");
        let parsed: Position = serde_json::from_str("\"NONE\"").unwrap();
        assert_eq!(parsed, Position::None);
    }
}
