//! Core traits for starfield

use crate::{bounds::AxisBounds, error::Result, point::*, point_set::*, transform::Transform3D};

/// Anything that occupies a single position in space
pub trait Positioned {
    fn position(&self) -> Point3d;
}

impl Positioned for Point3d {
    fn position(&self) -> Point3d {
        *self
    }
}

impl Positioned for TaggedPoint3d {
    fn position(&self) -> Point3d {
        self.position
    }
}

/// Trait for objects with an axis-aligned extent
pub trait Bounded {
    /// Get the axis-aligned bounding box of the object
    fn bounding_box(&self) -> Result<AxisBounds>;

    /// Get the center point of the bounding box
    fn center(&self) -> Result<Point3d> {
        Ok(self.bounding_box()?.center())
    }
}

/// Trait for objects that can be transformed
pub trait Transformable {
    /// Apply a transformation to the object
    fn transform(&mut self, transform: &Transform3D);
}

impl<T: Positioned> Bounded for PointSet<T> {
    fn bounding_box(&self) -> Result<AxisBounds> {
        AxisBounds::enclosing(self.iter().map(Positioned::position))
    }
}

impl Transformable for Point3d {
    fn transform(&mut self, transform: &Transform3D) {
        *self = transform.transform_point(self);
    }
}

impl Transformable for TaggedPoint3d {
    fn transform(&mut self, transform: &Transform3D) {
        self.position = transform.transform_point(&self.position);
    }
}

impl<T: Transformable> Transformable for PointSet<T> {
    fn transform(&mut self, transform: &Transform3D) {
        for point in &mut self.points {
            point.transform(transform);
        }
    }
}
