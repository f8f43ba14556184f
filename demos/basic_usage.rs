//! Basic usage example for starfield
//!
//! This example demonstrates fundamental operations:
//! - Building a point set of labeled systems
//! - Computing its bounding volume
//! - Falling back when a sector turns out to be empty

use starfield_core::{compute_bounding_volume, BoundingVolume, Error, PointSet, Point3d, TaggedPoint3d};
use starfield_io::{BuiltinCatalog, SectorSource};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("starfield Basic Usage Example");
    println!("=============================");

    let systems = vec![
        TaggedPoint3d::new(0.0, 0.0, 0.0, "Yellow Main Sequence"),
        TaggedPoint3d::new(4.0, 0.0, 0.0, "Dense Dust Cloud"),
        TaggedPoint3d::new(0.0, 6.0, 0.0, "Blue Super Giant"),
        TaggedPoint3d::untagged(0.0, 0.0, -2.0),
    ];
    let set = PointSet::from_points(systems);
    println!("Created point set with {} systems", set.len());

    let volume = compute_bounding_volume(Point3d::origin(), &set)?;
    println!("- min: {:?}", volume.min);
    println!("- max: {:?}", volume.max);
    println!("- radius: {}", volume.radius);

    let sector = BuiltinCatalog.fetch_sector(Point3d::origin())?;
    println!("\nBuiltin sector: {} systems, radius {}", sector.systems.len(), sector.bounding_volume()?.radius);

    // an empty sector is an error, callers choose their own fallback
    let empty: PointSet<TaggedPoint3d> = PointSet::new();
    let volume = match compute_bounding_volume(Point3d::origin(), &empty) {
        Ok(volume) => volume,
        Err(Error::EmptyInput) => BoundingVolume::unit_at(Point3d::origin()),
        Err(e) => return Err(e.into()),
    };
    println!("\nEmpty sector falls back to radius {}", volume.radius);

    println!("\nExample completed successfully!");
    Ok(())
}
