//! The catalog store and its load pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use ephemeris::{
    format_spice_utc, AberrationCorrection, Body, EphemerisProvider, Frame, OBSERVER_EARTH,
};
use time::OffsetDateTime;

use crate::filter::NameFilter;
use crate::ingest::{ingest_constellations, ingest_deep_sky, ingest_stars};
use crate::objects::{
    ConstellationLine, DeepSkyObject, Equatorial, Moon, Planet, Star, Sun, Target,
};
use crate::{AU_KM, MOON_PHASE_PLACEHOLDER};

/// Where a catalog category comes from. A missing or unreadable source
/// yields an empty category, never an error.
#[derive(Debug, Clone, Default)]
pub enum CatalogSource {
    #[default]
    Unavailable,
    Path(PathBuf),
    Inline(String),
}

impl CatalogSource {
    fn read(&self, category: &str) -> Option<String> {
        match self {
            CatalogSource::Unavailable => None,
            CatalogSource::Path(path) => match fs::read_to_string(path) {
                Ok(content) => Some(content),
                Err(e) => {
                    log::warn!("{category} catalog unavailable at {}: {e}", path.display());
                    None
                }
            },
            CatalogSource::Inline(content) => Some(content.clone()),
        }
    }
}

/// The three catalog sources consumed by a load.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub stars: CatalogSource,
    pub deep_sky: CatalogSource,
    pub constellations: CatalogSource,
}

/// All loaded sky objects for one `(timestamp, filter)` pair.
///
/// The solar-system bodies are always ephemeris-backed; stars and deep-sky
/// objects are present only when a non-empty filter matched them.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    stars: Vec<Star>,
    deep_sky_objects: Vec<DeepSkyObject>,
    planets: Vec<Planet>,
    sun: Option<Sun>,
    moon: Option<Moon>,
    constellation_lines: Vec<ConstellationLine>,
    hip_index: HashMap<u32, usize>,
}

impl CatalogStore {
    /// Assemble a store from already-ingested parts, building the HIP join
    /// index.
    pub fn from_parts(
        stars: Vec<Star>,
        deep_sky_objects: Vec<DeepSkyObject>,
        planets: Vec<Planet>,
        sun: Option<Sun>,
        moon: Option<Moon>,
        constellation_lines: Vec<ConstellationLine>,
    ) -> Self {
        let mut hip_index = HashMap::with_capacity(stars.len());
        for (index, star) in stars.iter().enumerate() {
            // First occurrence wins for duplicate HIP ids.
            hip_index.entry(star.hip).or_insert(index);
        }
        Self {
            stars,
            deep_sky_objects,
            planets,
            sun,
            moon,
            constellation_lines,
            hip_index,
        }
    }

    /// Build a complete store for `timestamp` and `filter`.
    ///
    /// Never fails: a provider error omits the affected body with a warning,
    /// a missing source empties its category, and malformed records are
    /// skipped row by row. The three file ingestion steps are independent of
    /// one another.
    pub fn load<P: EphemerisProvider>(
        provider: &P,
        timestamp: OffsetDateTime,
        filter: &NameFilter,
        sources: &CatalogSources,
    ) -> Self {
        let mut planets = Vec::with_capacity(Body::PLANETS.len());
        let mut sun = None;
        let mut moon = None;

        match provider.time_to_et(&format_spice_utc(timestamp)) {
            Ok(et) => {
                for body in Body::PLANETS {
                    match query_body(provider, body, et) {
                        Ok((position, range_km)) => planets.push(Planet {
                            body,
                            position,
                            distance_au: range_km / AU_KM,
                        }),
                        Err(e) => log::warn!("skipping {}: {e}", body.common_name()),
                    }
                }

                match query_body(provider, Body::Sun, et) {
                    Ok((position, _)) => sun = Some(Sun { position }),
                    Err(e) => log::warn!("skipping Sun: {e}"),
                }

                match query_body(provider, Body::Moon, et) {
                    Ok((position, _)) => {
                        moon = Some(Moon {
                            position,
                            phase: MOON_PHASE_PLACEHOLDER,
                        })
                    }
                    Err(e) => log::warn!("skipping Moon: {e}"),
                }
            }
            Err(e) => log::warn!("ephemeris time conversion failed, no solar-system bodies: {e}"),
        }

        let mut stars = Vec::new();
        let mut deep_sky_objects = Vec::new();
        if !filter.is_empty() {
            if let Some(content) = sources.stars.read("star") {
                stars = ingest_stars(&content, filter);
            }
            if let Some(content) = sources.deep_sky.read("deep-sky") {
                deep_sky_objects = ingest_deep_sky(&content, filter);
            }
        }

        let constellation_lines = sources
            .constellations
            .read("constellation")
            .map(|content| ingest_constellations(&content))
            .unwrap_or_default();

        log::info!(
            "catalog loaded: {} stars, {} deep-sky, {} planets, {} constellation lines (filter: {:?})",
            stars.len(),
            deep_sky_objects.len(),
            planets.len(),
            constellation_lines.len(),
            filter.as_str(),
        );

        Self::from_parts(
            stars,
            deep_sky_objects,
            planets,
            sun,
            moon,
            constellation_lines,
        )
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn deep_sky_objects(&self) -> &[DeepSkyObject] {
        &self.deep_sky_objects
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn sun(&self) -> Option<&Sun> {
        self.sun.as_ref()
    }

    pub fn moon(&self) -> Option<&Moon> {
        self.moon.as_ref()
    }

    pub fn constellation_lines(&self) -> &[ConstellationLine] {
        &self.constellation_lines
    }

    /// Star lookup by Hipparcos id.
    pub fn star_by_hip(&self, hip: u32) -> Option<&Star> {
        self.hip_index.get(&hip).map(|&index| &self.stars[index])
    }

    /// All lock-on candidates: planets, Moon, Sun, stars, deep-sky objects,
    /// in that order.
    pub fn targets(&self) -> Vec<Target> {
        let mut targets = Vec::new();
        for planet in &self.planets {
            targets.push(Target::of(planet));
        }
        if let Some(moon) = &self.moon {
            targets.push(Target::of(moon));
        }
        if let Some(sun) = &self.sun {
            targets.push(Target::of(sun));
        }
        for star in &self.stars {
            targets.push(Target::of(star));
        }
        for object in &self.deep_sky_objects {
            targets.push(Target::of(object));
        }
        targets
    }
}

fn query_body<P: EphemerisProvider>(
    provider: &P,
    body: Body,
    et: f64,
) -> ephemeris::Result<(Equatorial, f64)> {
    let (state, _light_time) = provider.state_vector(
        body.target_name(),
        et,
        Frame::J2000,
        AberrationCorrection::LightTimeStellar,
        OBSERVER_EARTH,
    )?;
    let spherical = provider.rectangular_to_spherical(state.position);
    // Longitude comes back in (-pi, pi]; the store keeps RA in [0, 360).
    let ra_deg = spherical.longitude_rad.to_degrees().rem_euclid(360.0);
    let dec_deg = spherical.latitude_rad.to_degrees();
    Ok((Equatorial::new(ra_deg, dec_deg), spherical.range_km))
}
