//! # starfield
//!
//! Star sector point sets and the bounding volumes used to frame them.
//!
//! This is the umbrella crate that provides convenient access to all starfield
//! functionality. You can use this crate to get everything in one place, or use
//! the individual crates for more granular control over dependencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use starfield::prelude::*;
//!
//! let systems = vec![
//!     TaggedPoint3d::new(20.0, -4.0, 28.0, "Yellow Main Sequence"),
//!     TaggedPoint3d::new(-25.0, -23.0, 5.0, "Blue Super Giant"),
//! ];
//! let volume = compute_bounding_volume(Point3d::origin(), &PointSet::from_points(systems))?;
//! assert_eq!(volume.radius, 23.5);
//! # Ok::<(), starfield::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io
//! - `io`: Catalog files and sector sources

// Re-export core functionality
pub use starfield_core::*;

#[cfg(feature = "io")]
pub use starfield_io as io;

/// Convenient imports for common use cases
pub mod prelude {
    pub use starfield_core::*;

    #[cfg(feature = "io")]
    pub use starfield_io::*;
}
