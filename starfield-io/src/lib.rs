//! I/O operations for star catalogs and sectors
//!
//! This crate reads and writes the catalogs a sector is built from, either
//! delimited text (CSV/XYZ) or JSON, and provides the [`SectorSource`]
//! implementations that hand a populated [`Sector`] to a consumer.

pub mod catalog;
pub mod sector;

pub use catalog::{parse_catalog, read_catalog, write_catalog, CatalogSchema, ColumnType, Delimiter};
pub use sector::{read_sector, BuiltinCatalog, FileCatalog, Sector, SectorSource};
