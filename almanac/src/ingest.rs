//! Row-level ingestion of the three comma-separated catalog sources.
//!
//! Malformed records are skipped per-record and never abort a batch: short
//! rows are dropped outright, unparseable numeric fields default to zero,
//! and non-numeric constellation sequence entries are ignored.

use crate::filter::NameFilter;
use crate::objects::{ConstellationLine, DeepSkyObject, Equatorial, Star};

/// Minimum field count for a star row.
const STAR_MIN_FIELDS: usize = 16;
/// Minimum field count for a deep-sky row.
const DEEP_SKY_MIN_FIELDS: usize = 5;
/// Minimum field count for a constellation row.
const CONSTELLATION_MIN_FIELDS: usize = 3;

/// Star catalog columns: [1]=HIP, [6]=proper name, [7]=RA deg, [8]=Dec deg,
/// [13]=magnitude, [15]=spectral type. The first line is a header.
pub fn ingest_stars(content: &str, filter: &NameFilter) -> Vec<Star> {
    let mut stars = Vec::new();
    for line in content.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < STAR_MIN_FIELDS {
            continue;
        }

        let proper_name = fields[6].trim();
        let display_name = if proper_name.is_empty() {
            format!("HIP {}", fields[1].trim())
        } else {
            proper_name.to_string()
        };

        if !filter.matches(&display_name) {
            continue;
        }

        stars.push(Star {
            hip: parse_u32(fields[1]),
            name: display_name,
            position: Equatorial::new(parse_f64(fields[7]), parse_f64(fields[8])),
            magnitude: parse_f64(fields[13]),
            spectral_type: fields[15].trim().to_string(),
        });
    }
    stars
}

/// Deep-sky catalog columns: [0]=name, [1]=type, [2]=RA deg, [3]=Dec deg,
/// [10]=visual magnitude. The first line is a header. Rows long enough to
/// pass the minimum-field check but lacking the magnitude column get
/// magnitude 0.
pub fn ingest_deep_sky(content: &str, filter: &NameFilter) -> Vec<DeepSkyObject> {
    let mut objects = Vec::new();
    for line in content.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < DEEP_SKY_MIN_FIELDS {
            continue;
        }

        let name = fields[0].trim();
        if !filter.matches(name) {
            continue;
        }

        objects.push(DeepSkyObject {
            name: name.to_string(),
            object_type: fields[1].trim().to_string(),
            position: Equatorial::new(parse_f64(fields[2]), parse_f64(fields[3])),
            magnitude: fields.get(10).map(|f| parse_f64(f)).unwrap_or(0.0),
        });
    }
    objects
}

/// Constellation rows: [0]=abbreviation, [1] reserved, [2..]=HIP sequence.
/// Ingestion is filter-independent and has no header line. Non-numeric
/// sequence entries are dropped without aborting the record.
pub fn ingest_constellations(content: &str) -> Vec<ConstellationLine> {
    let mut lines = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < CONSTELLATION_MIN_FIELDS {
            continue;
        }

        lines.push(ConstellationLine {
            abbreviation: fields[0].to_string(),
            hip_sequence: fields[2..]
                .iter()
                .filter_map(|f| f.parse::<u32>().ok())
                .collect(),
        });
    }
    lines
}

fn parse_f64(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

fn parse_u32(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}
