//! Link and absorption radii.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoneError};

/// Default link radius.
pub const DEFAULT_LINK_RADIUS: f64 = 5.0;

/// Default absorption radius.
pub const DEFAULT_ABSORPTION_RADIUS: f64 = 2.0;

/// Thresholds used when inserting a node into a zone.
///
/// A new node closer than `absorption_radius` to any member is rejected.
/// Otherwise it links to every member closer than `link_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkRadii {
    /// Members closer than this get a link from the new node (default: 5.0).
    pub link_radius: f64,
    /// Members closer than this absorb the new node (default: 2.0).
    pub absorption_radius: f64,
}

impl Default for LinkRadii {
    fn default() -> Self {
        Self {
            link_radius: DEFAULT_LINK_RADIUS,
            absorption_radius: DEFAULT_ABSORPTION_RADIUS,
        }
    }
}

impl LinkRadii {
    pub fn new(link_radius: f64, absorption_radius: f64) -> Self {
        Self {
            link_radius,
            absorption_radius,
        }
    }

    /// `(link_radius², absorption_radius²)`
    #[inline]
    pub fn squared(&self) -> (f64, f64) {
        (
            self.link_radius * self.link_radius,
            self.absorption_radius * self.absorption_radius,
        )
    }

    /// Check the caller-side contract: both radii finite and non-negative,
    /// and absorption no wider than linking.
    ///
    /// Zones do not call this themselves.
    pub fn validate(&self) -> Result<()> {
        check_radius("link radius", self.link_radius)?;
        check_radius("absorption radius", self.absorption_radius)?;
        if self.absorption_radius > self.link_radius {
            return Err(ZoneError::AbsorptionExceedsLink {
                absorption: self.absorption_radius,
                link: self.link_radius,
            });
        }
        Ok(())
    }
}

fn check_radius(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ZoneError::InvalidRadius { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let radii = LinkRadii::default();
        assert_eq!(radii.link_radius, 5.0);
        assert_eq!(radii.absorption_radius, 2.0);
        assert_eq!(radii.squared(), (25.0, 4.0));
        assert!(radii.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert_eq!(
            LinkRadii::new(-1.0, 0.0).validate(),
            Err(ZoneError::InvalidRadius {
                name: "link radius",
                value: -1.0
            })
        );
        assert!(matches!(
            LinkRadii::new(5.0, f64::NAN).validate(),
            Err(ZoneError::InvalidRadius {
                name: "absorption radius",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_absorption_wider_than_link() {
        assert_eq!(
            LinkRadii::new(1.0, 3.0).validate(),
            Err(ZoneError::AbsorptionExceedsLink {
                absorption: 3.0,
                link: 1.0
            })
        );
        assert!(LinkRadii::new(2.0, 2.0).validate().is_ok());
        assert!(LinkRadii::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let radii: LinkRadii = serde_json::from_str(r#"{ "linkRadius": 8.0 }"#).unwrap();
        assert_eq!(radii, LinkRadii::new(8.0, DEFAULT_ABSORPTION_RADIUS));

        let radii: LinkRadii =
            serde_json::from_str(r#"{ "linkRadius": 3.0, "absorptionRadius": 1.0 }"#).unwrap();
        assert_eq!(radii, LinkRadii::new(3.0, 1.0));
    }
}
