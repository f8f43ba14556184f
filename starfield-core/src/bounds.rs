//! Axis-aligned bounds and sector bounding volumes
//!
//! The bounding volume of a point set is the smallest axis-aligned box that
//! encloses every point, reduced to a single framing radius: half of the
//! largest axis extent plus a fixed margin of [`RADIUS_MARGIN`].
//!
//! Bounds are accumulated with [`AxisBounds`], a plain value that is folded
//! over the points. Merging two accumulators is associative and commutative,
//! so the sequential and parallel entry points always agree.

use crate::error::{Error, Result};
use crate::point::*;
use crate::point_set::PointSet;
use crate::traits::Positioned;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Margin added to the half-extent when deriving a radius
pub const RADIUS_MARGIN: f64 = 1.0;

/// Running component-wise minimum and maximum of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: Point3d,
    pub max: Point3d,
}

impl AxisBounds {
    /// Degenerate bounds enclosing exactly one point
    pub fn from_point(point: Point3d) -> Self {
        Self { min: point, max: point }
    }

    /// Grow the bounds to enclose `point`
    ///
    /// Min and max are updated independently on every axis, so `min <= max`
    /// holds regardless of which side a coordinate lands on.
    pub fn include(self, point: Point3d) -> Self {
        Self {
            min: self.min.inf(&point),
            max: self.max.sup(&point),
        }
    }

    /// Smallest bounds enclosing both `self` and `other`
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Bounds of every point yielded by `points`
    ///
    /// Fails with [`Error::EmptyInput`] when the iterator is empty.
    pub fn enclosing<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point3d>,
    {
        let mut points = points.into_iter();
        let first = points.next().ok_or(Error::EmptyInput)?;
        Ok(points.fold(Self::from_point(first), Self::include))
    }

    /// Per-axis size of the box
    pub fn extents(&self) -> Vector3d {
        self.max - self.min
    }

    /// The largest of the three axis extents
    pub fn largest_extent(&self) -> f64 {
        self.extents().max()
    }

    pub fn center(&self) -> Point3d {
        nalgebra::center(&self.min, &self.max)
    }

    /// Check whether `point` lies inside the box, boundary included
    pub fn contains(&self, point: &Point3d) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }
}

/// Bounding volume of a point set, framed around a reference origin
///
/// `origin` is carried through from the caller and has no influence on the
/// extents or the radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingVolume {
    pub origin: Point3d,
    pub min: Point3d,
    pub max: Point3d,
    pub radius: f64,
}

impl BoundingVolume {
    /// Derive the volume from precomputed bounds
    pub fn from_bounds(origin: Point3d, bounds: AxisBounds) -> Self {
        Self {
            origin,
            min: bounds.min,
            max: bounds.max,
            radius: bounds.largest_extent() / 2.0 + RADIUS_MARGIN,
        }
    }

    /// Zero-extent volume at `origin`, for callers that need a fallback
    /// when their point set is empty
    pub fn unit_at(origin: Point3d) -> Self {
        Self::from_bounds(origin, AxisBounds::from_point(origin))
    }

    pub fn bounds(&self) -> AxisBounds {
        AxisBounds {
            min: self.min,
            max: self.max,
        }
    }

    pub fn extents(&self) -> Vector3d {
        self.bounds().extents()
    }
}

/// Compute the bounding volume of `points` relative to `origin`
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `points` is empty.
pub fn compute_bounding_volume<T: Positioned>(
    origin: Point3d,
    points: &PointSet<T>,
) -> Result<BoundingVolume> {
    let bounds = AxisBounds::enclosing(points.positions())?;
    let volume = BoundingVolume::from_bounds(origin, bounds);
    debug!(
        points = points.len(),
        radius = volume.radius,
        "computed bounding volume"
    );
    Ok(volume)
}

/// Parallel variant of [`compute_bounding_volume`]
///
/// Returns exactly the same volume as the sequential version.
pub fn compute_bounding_volume_par<T>(
    origin: Point3d,
    points: &PointSet<T>,
) -> Result<BoundingVolume>
where
    T: Positioned + Sync,
{
    let bounds = points
        .points
        .par_iter()
        .map(|point| AxisBounds::from_point(point.position()))
        .reduce_with(AxisBounds::merge)
        .ok_or(Error::EmptyInput)?;
    let volume = BoundingVolume::from_bounds(origin, bounds);
    debug!(
        points = points.len(),
        radius = volume.radius,
        "computed bounding volume in parallel"
    );
    Ok(volume)
}
