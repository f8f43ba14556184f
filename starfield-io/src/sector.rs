//! Sectors and the sources that populate them

use crate::catalog;
use serde::{Deserialize, Serialize};
use starfield_core::{
    compute_bounding_volume, BoundingVolume, Error, PointSet, Point3d, Result, TaggedPoint3d,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Label under which untagged systems are counted by [`Sector::kinds`]
pub const UNCLASSIFIED: &str = "unclassified";

/// The star systems fetched around an origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub origin: Point3d,
    pub systems: PointSet<TaggedPoint3d>,
}

impl Sector {
    pub fn new(origin: Point3d, systems: PointSet<TaggedPoint3d>) -> Self {
        Self { origin, systems }
    }

    /// Bounding volume of the sector's systems, framed around its origin
    pub fn bounding_volume(&self) -> Result<BoundingVolume> {
        compute_bounding_volume(self.origin, &self.systems)
    }

    /// Number of systems per kind
    pub fn kinds(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for system in &self.systems {
            let kind = system.kind().unwrap_or(UNCLASSIFIED);
            *counts.entry(kind.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Anything that can supply the systems of a sector
pub trait SectorSource {
    fn fetch_sector(&self, origin: Point3d) -> Result<Sector>;
}

/// The fixed sector shipped with the star viewer
///
/// The same 18 systems are returned whatever the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

const BUILTIN_SYSTEMS: [(f64, f64, f64, &str); 18] = [
    (20.0, -4.0, 28.0, "Yellow Main Sequence"),
    (18.0, -3.0, 17.0, "Dense Dust Cloud"),
    (18.0, -2.0, 17.0, "Medium Dust Cloud"),
    (19.0, 7.0, -3.0, "Blue Super Giant"),
    (10.0, -5.0, 0.0, "Blue Super Giant"),
    (-18.0, 7.0, -2.0, "Yellow Main Sequence"),
    (13.0, 7.0, 17.0, "Medium Dust Cloud"),
    (8.0, 11.0, -23.0, "Dense Dust Cloud"),
    (21.0, 10.0, 7.0, "Yellow Main Sequence"),
    (19.0, -14.0, -5.0, "Yellow Main Sequence"),
    (-5.0, 9.0, 24.0, "Blue Super Giant"),
    (-3.0, 17.0, -21.0, "Light Dust Cloud"),
    (20.0, 0.0, -7.0, "Yellow Main Sequence"),
    (8.0, 22.0, -18.0, "Yellow Main Sequence"),
    (-25.0, -23.0, 5.0, "Blue Super Giant"),
    (-24.0, 1.0, 23.0, "Blue Super Giant"),
    (1.0, -22.0, 11.0, "Dense Dust Cloud"),
    (20.0, -23.0, -2.0, "Light Dust Cloud"),
];

impl SectorSource for BuiltinCatalog {
    fn fetch_sector(&self, origin: Point3d) -> Result<Sector> {
        let systems = BUILTIN_SYSTEMS
            .iter()
            .map(|&(x, y, z, kind)| TaggedPoint3d::new(x, y, z, kind))
            .collect();
        Ok(Sector::new(origin, systems))
    }
}

/// A sector source backed by a catalog file
///
/// The file is re-read on every fetch; the requested origin replaces any
/// origin recorded in the file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SectorSource for FileCatalog {
    fn fetch_sector(&self, origin: Point3d) -> Result<Sector> {
        let sector = read_sector(&self.path)?;
        Ok(Sector::new(origin, sector.systems))
    }
}

/// On-disk JSON layout
#[derive(Debug, Serialize, Deserialize)]
struct SectorFile {
    #[serde(default)]
    origin: Option<Coordinates>,
    systems: Vec<SystemRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Coordinates {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SystemRecord {
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    kind: Option<String>,
}

fn parse_json_sector(text: &str) -> Result<Sector> {
    let file: SectorFile = serde_json::from_str(text)
        .map_err(|e| Error::InvalidData(format!("invalid sector JSON: {e}")))?;

    let origin = file
        .origin
        .map(|c| Point3d::new(c.x, c.y, c.z))
        .unwrap_or_else(Point3d::origin);
    let systems = file
        .systems
        .into_iter()
        .map(|r| TaggedPoint3d {
            position: Point3d::new(r.x, r.y, r.z),
            kind: r.kind,
        })
        .collect();

    Ok(Sector::new(origin, systems))
}

/// Read a sector, choosing the format from the file extension
///
/// `csv`, `xyz` and `txt` are delimited catalogs with an origin at zero;
/// `json` files may record their own origin. Extensions match in any case.
pub fn read_sector<P: AsRef<Path>>(path: P) -> Result<Sector> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    let sector = match extension.as_deref() {
        Some("csv") | Some("xyz") | Some("txt") => {
            Sector::new(Point3d::origin(), catalog::read_catalog(path)?)
        }
        Some("json") => parse_json_sector(&fs::read_to_string(path)?)?,
        _ => {
            return Err(Error::UnsupportedFormat(format!(
                "Unsupported catalog format: {:?}",
                path.extension()
            )))
        }
    };
    debug!(path = %path.display(), systems = sector.systems.len(), "read sector");
    Ok(sector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sector_radius() {
        let sector = BuiltinCatalog.fetch_sector(Point3d::origin()).unwrap();
        assert_eq!(sector.systems.len(), 18);
        assert_eq!(sector.bounding_volume().unwrap().radius, 26.5);
    }

    #[test]
    fn test_builtin_kinds() {
        let kinds = BuiltinCatalog.fetch_sector(Point3d::origin()).unwrap().kinds();
        assert_eq!(kinds["Yellow Main Sequence"], 6);
        assert_eq!(kinds["Blue Super Giant"], 5);
        assert_eq!(kinds["Dense Dust Cloud"], 3);
        assert_eq!(kinds["Medium Dust Cloud"], 2);
        assert_eq!(kinds["Light Dust Cloud"], 2);
        assert_eq!(kinds.values().sum::<usize>(), 18);
    }

    #[test]
    fn test_origin_is_carried_through() {
        let origin = Point3d::new(3.0, -7.0, 1.0);
        let volume = BuiltinCatalog.fetch_sector(origin).unwrap().bounding_volume().unwrap();
        assert_eq!(volume.origin, origin);
        assert_eq!(volume.radius, 26.5);
    }

    #[test]
    fn test_json_sector() {
        let sector = parse_json_sector(
            r#"{"origin": {"x": 1, "y": 2, "z": 3},
                "systems": [{"x": 0, "y": 0, "z": 0, "kind": "Blue Super Giant"},
                            {"x": 4, "y": -2, "z": 1}]}"#,
        )
        .unwrap();
        assert_eq!(sector.origin, Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(sector.systems[1].kind(), None);
        assert_eq!(sector.kinds()[UNCLASSIFIED], 1);
        assert_eq!(sector.bounding_volume().unwrap().radius, 3.0);
    }

    #[test]
    fn test_empty_sector_fails_to_bound() {
        let sector = parse_json_sector(r#"{"systems": []}"#).unwrap();
        assert!(matches!(sector.bounding_volume(), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(read_sector("sector.ply"), Err(Error::UnsupportedFormat(_))));
    }
}
