//! Common fixtures for reticle integration tests.

use almanac::{CatalogStore, ConstellationLine, Equatorial, Star, AU_KM};
use ephemeris::{Body, FixedEphemeris};
use reticle::{Attitude, FrameSnapshot, GeoLocation, LockOffset};
use time::OffsetDateTime;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn test_location() -> GeoLocation {
    GeoLocation {
        latitude_deg: 40.0,
        longitude_deg: -74.0,
    }
}

pub fn star(hip: u32, name: &str, ra_deg: f64, dec_deg: f64) -> Star {
    Star {
        hip,
        name: name.to_string(),
        position: Equatorial::new(ra_deg, dec_deg),
        magnitude: 1.0,
        spectral_type: "G2V".to_string(),
    }
}

/// A store holding only the given stars and constellation lines.
pub fn star_store(stars: Vec<Star>, lines: Vec<ConstellationLine>) -> CatalogStore {
    CatalogStore::from_parts(stars, Vec::new(), Vec::new(), None, None, lines)
}

/// Device attitude aimed straight at `position` as seen from `location`.
pub fn aimed_at(position: Equatorial, location: GeoLocation, utc: OffsetDateTime) -> Attitude {
    let horizontal = sky_math::ra_dec_to_alt_az(
        position.ra_deg,
        position.dec_deg,
        location.latitude_deg,
        location.longitude_deg,
        utc,
    );
    Attitude {
        yaw_deg: horizontal.az_deg,
        pitch_deg: horizontal.alt_deg,
    }
}

pub fn snapshot(
    attitude: Option<Attitude>,
    location: Option<GeoLocation>,
    lock_offset: Option<LockOffset>,
    utc: OffsetDateTime,
) -> FrameSnapshot {
    FrameSnapshot {
        attitude,
        location,
        lock_offset,
        utc,
    }
}

/// A provider with all ten solar-system bodies placed at distinct spots.
pub fn provider_with_all_bodies() -> FixedEphemeris {
    let mut provider = FixedEphemeris::new();
    for (i, body) in Body::PLANETS.iter().enumerate() {
        provider = provider.with_body(
            body.target_name(),
            30.0 * i as f64,
            5.0 * i as f64 - 10.0,
            AU_KM * (i as f64 + 0.5),
        );
    }
    provider
        .with_body(Body::Sun.target_name(), 90.0, 23.4, AU_KM)
        .with_body(Body::Moon.target_name(), 134.0, 18.0, 384_400.0)
}
