//! Point types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A point carrying an optional classification label
///
/// The label is opaque to every geometric operation; it travels with the
/// position so that a consumer can style the object it represents
/// (e.g. "Blue Super Giant" or "Dense Dust Cloud").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedPoint3d {
    pub position: Point3d,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl TaggedPoint3d {
    /// Create a labeled point
    pub fn new(x: f64, y: f64, z: f64, kind: impl Into<String>) -> Self {
        Self {
            position: Point3d::new(x, y, z),
            kind: Some(kind.into()),
        }
    }

    /// Create a point without a label
    pub fn untagged(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3d::new(x, y, z),
            kind: None,
        }
    }

    /// The label, if any
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl Default for TaggedPoint3d {
    fn default() -> Self {
        Self {
            position: Point3d::origin(),
            kind: None,
        }
    }
}

impl From<Point3d> for TaggedPoint3d {
    fn from(position: Point3d) -> Self {
        Self { position, kind: None }
    }
}

impl From<TaggedPoint3d> for Point3d {
    fn from(point: TaggedPoint3d) -> Self {
        point.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_point_keeps_label() {
        let p = TaggedPoint3d::new(20.0, -4.0, 28.0, "Yellow Main Sequence");
        assert_eq!(p.kind(), Some("Yellow Main Sequence"));
        assert_eq!(p.position, Point3d::new(20.0, -4.0, 28.0));
    }

    #[test]
    fn test_untagged_round_trip_through_point() {
        let p = TaggedPoint3d::untagged(1.0, 2.0, 3.0);
        assert!(p.kind().is_none());
        let raw: Point3d = p.clone().into();
        assert_eq!(TaggedPoint3d::from(raw), p);
    }
}
