//! Core data structures and traits for starfield
//!
//! This crate provides the fundamental types for describing a sector of star
//! systems as a set of 3D points and for computing the bounding volume that a
//! renderer uses to frame them.

pub mod point;
pub mod point_set;
pub mod bounds;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use point_set::*;
pub use bounds::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4};
