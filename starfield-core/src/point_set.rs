//! Point set container

use crate::point::*;
use crate::traits::Positioned;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of points
///
/// A `PointSet` may be empty while it is being assembled, but every bounding
/// computation over it rejects the empty case with [`crate::Error::EmptyInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet<T> {
    pub points: Vec<T>,
}

/// A point set of bare coordinates
pub type PointSet3d = PointSet<Point3d>;

/// A point set of labeled coordinates
pub type TaggedPointSet3d = PointSet<TaggedPoint3d>;

impl<T> PointSet<T> {
    /// Create a new empty point set
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new point set with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point set from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the set
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the set
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    /// The first point, if any
    pub fn first(&self) -> Option<&T> {
        self.points.first()
    }
}

impl<T: Positioned> PointSet<T> {
    /// Iterate over bare positions, dropping any labels
    pub fn positions(&self) -> impl Iterator<Item = Point3d> + '_ {
        self.points.iter().map(Positioned::position)
    }
}

impl<T> Default for PointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for PointSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IntoIterator for PointSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> Extend<T> for PointSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<T> FromIterator<T> for PointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_strip_labels() {
        let set: TaggedPointSet3d = vec![
            TaggedPoint3d::new(1.0, 2.0, 3.0, "Light Dust Cloud"),
            TaggedPoint3d::untagged(-1.0, 0.0, 4.0),
        ]
        .into_iter()
        .collect();

        let positions: Vec<Point3d> = set.positions().collect();
        assert_eq!(positions, vec![Point3d::new(1.0, 2.0, 3.0), Point3d::new(-1.0, 0.0, 4.0)]);
        assert_eq!(set[0].kind(), Some("Light Dust Cloud"));
    }

    #[test]
    fn test_empty_by_default() {
        let set = PointSet3d::default();
        assert!(set.is_empty());
        assert!(set.first().is_none());
    }
}
