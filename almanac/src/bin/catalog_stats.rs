//! Offline catalog inspection tool.
//!
//! Loads the star / deep-sky / constellation sources with an optional name
//! filter and prints counts, the brightest matches, and the constellation
//! join coverage.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use almanac::{ingest_constellations, ingest_deep_sky, ingest_stars, NameFilter};

#[derive(Parser, Debug)]
#[command(name = "catalog_stats", about = "Print statistics for sky catalog files")]
struct Args {
    /// Star catalog CSV (HYG-style columns)
    #[arg(long)]
    stars: Option<PathBuf>,

    /// Deep-sky catalog CSV (NGC-style columns)
    #[arg(long)]
    deep_sky: Option<PathBuf>,

    /// Constellation line CSV
    #[arg(long)]
    constellations: Option<PathBuf>,

    /// Name filter; matching is a case-insensitive substring test
    #[arg(long, default_value = "")]
    filter: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let filter = NameFilter::new(&args.filter);

    println!("Sky Catalog Statistics");
    println!("======================");
    if filter.is_empty() {
        println!("No filter given: star and deep-sky categories load empty.");
    } else {
        println!("Filter: {:?}", filter.as_str());
    }

    let stars = match (&args.stars, filter.is_empty()) {
        (Some(path), false) => ingest_stars(&std::fs::read_to_string(path)?, &filter),
        _ => Vec::new(),
    };
    let deep_sky = match (&args.deep_sky, filter.is_empty()) {
        (Some(path), false) => ingest_deep_sky(&std::fs::read_to_string(path)?, &filter),
        _ => Vec::new(),
    };
    let lines = match &args.constellations {
        Some(path) => ingest_constellations(&std::fs::read_to_string(path)?),
        None => Vec::new(),
    };

    println!("\nStars: {}", stars.len());
    let mut by_magnitude: Vec<_> = stars.iter().collect();
    by_magnitude.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
    for star in by_magnitude.iter().take(5) {
        println!(
            "  {} (HIP {}): mag {:.2}, RA {:.4} deg, Dec {:.4} deg, {}",
            star.name, star.hip, star.magnitude, star.position.ra_deg, star.position.dec_deg,
            star.spectral_type
        );
    }

    println!("\nDeep-sky objects: {}", deep_sky.len());
    for object in deep_sky.iter().take(5) {
        println!(
            "  {} ({}): mag {:.2}, RA {:.4} deg, Dec {:.4} deg",
            object.name,
            object.object_type,
            object.magnitude,
            object.position.ra_deg,
            object.position.dec_deg
        );
    }

    println!("\nConstellation lines: {}", lines.len());
    let loaded_hips: std::collections::HashSet<u32> = stars.iter().map(|s| s.hip).collect();
    let mut complete = 0usize;
    let mut broken = 0usize;
    for line in &lines {
        if line.hip_sequence.iter().all(|hip| loaded_hips.contains(hip)) {
            complete += 1;
        } else {
            broken += 1;
        }
    }
    println!("  fully joined against loaded stars: {complete}");
    println!("  with missing endpoints (partial render): {broken}");

    Ok(())
}
