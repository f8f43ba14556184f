//! Compute the bounding volume of a star sector
//!
//! Fetches a sector from the builtin catalog or a catalog file, optionally
//! scales it, and prints the bounds a renderer would use to frame it.
//!
//! ```text
//! sector_bounds --origin 0,0,0
//! sector_bounds --catalog sector.csv --scale 2 --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use starfield_core::{
    compute_bounding_volume, compute_bounding_volume_par, BoundingVolume, Point3d, Transform3D,
    Transformable, Vector3d,
};
use starfield_io::{BuiltinCatalog, FileCatalog, Sector, SectorSource};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "sector_bounds", about = "Compute the bounding volume of a star sector")]
struct Args {
    /// Catalog file (csv, xyz, txt or json); the builtin sector is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Sector origin as x,y,z
    #[arg(short, long, default_value = "0,0,0", value_parser = parse_origin)]
    origin: Point3d,

    /// Uniform scale applied to every system before bounding
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_scale)]
    scale: f64,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reduce the bounds on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_finite(value: &str) -> std::result::Result<f64, String> {
    let parsed = value.trim().parse::<f64>().map_err(|e| format!("'{value}': {e}"))?;
    if !parsed.is_finite() {
        return Err(format!("'{value}' is not a finite number"));
    }
    Ok(parsed)
}

fn parse_scale(value: &str) -> std::result::Result<f64, String> {
    parse_finite(value)
}

fn parse_origin(value: &str) -> std::result::Result<Point3d, String> {
    let parts = value
        .split(',')
        .map(parse_finite)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Point3d::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z, got {} components", parts.len())),
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    origin: Point3d,
    min: Point3d,
    max: Point3d,
    extents: Vector3d,
    radius: f64,
    systems: usize,
    kinds: &'a BTreeMap<String, usize>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fetch(args: &Args) -> Result<Sector> {
    match &args.catalog {
        Some(path) => FileCatalog::new(path)
            .fetch_sector(args.origin)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(BuiltinCatalog.fetch_sector(args.origin)?),
    }
}

fn print_text(volume: &BoundingVolume, sector: &Sector, kinds: &BTreeMap<String, usize>) {
    let extents = volume.extents();
    println!(
        "origin  ({}, {}, {})",
        volume.origin.x, volume.origin.y, volume.origin.z
    );
    println!("systems {}", sector.systems.len());
    println!("x       {} .. {} ({})", volume.min.x, volume.max.x, extents.x);
    println!("y       {} .. {} ({})", volume.min.y, volume.max.y, extents.y);
    println!("z       {} .. {} ({})", volume.min.z, volume.max.z, extents.z);
    println!("radius  {}", volume.radius);
    for (kind, count) in kinds {
        println!("  {count:>3}  {kind}");
    }
}

/// Scale the sector as requested and compute its bounding volume
fn bound_sector(sector: &mut Sector, scale: f64, parallel: bool) -> Result<BoundingVolume> {
    if scale != 1.0 {
        debug!(scale, "scaling sector");
        sector.systems.transform(&Transform3D::uniform_scaling(scale));
    }

    let volume = if parallel {
        compute_bounding_volume_par(sector.origin, &sector.systems)
    } else {
        compute_bounding_volume(sector.origin, &sector.systems)
    }
    .context("sector has no systems to bound")?;
    Ok(volume)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut sector = fetch(&args)?;
    info!(systems = sector.systems.len(), "fetched sector");

    let volume = bound_sector(&mut sector, args.scale, args.parallel)?;

    let kinds = sector.kinds();
    match args.format {
        OutputFormat::Text => print_text(&volume, &sector, &kinds),
        OutputFormat::Json => {
            let report = Report {
                origin: volume.origin,
                min: volume.min,
                max: volume.max,
                extents: volume.extents(),
                radius: volume.radius,
                systems: sector.systems.len(),
                kinds: &kinds,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
