//! Celestial catalog store.
//!
//! This crate owns the sky-object data model and the ingestion pipeline
//! that builds a [`CatalogStore`] from the three catalog sources (stars,
//! deep-sky objects, constellation lines) plus an ephemeris provider for
//! the solar-system bodies. A store is rebuilt wholesale on every load;
//! there is no incremental update path.

mod filter;
mod ingest;
mod objects;
mod store;

pub use filter::NameFilter;
pub use ingest::{ingest_constellations, ingest_deep_sky, ingest_stars};
pub use objects::{
    ConstellationLine, DeepSkyObject, Equatorial, Moon, Planet, Rgb, SkyObject, Star, Sun, Target,
};
pub use store::{CatalogSource, CatalogSources, CatalogStore};

/// Kilometers per astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;

/// Stand-in lunar phase until phase is derived from ephemeris data.
/// 0 and 1 are new moon, 0.5 is full.
pub const MOON_PHASE_PLACEHOLDER: f64 = 0.5;
