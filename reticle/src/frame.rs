//! Per-frame overlay composition.
//!
//! Turns the current catalog plus a frame snapshot into the placement data
//! the drawing layer consumes: screen positions for every on-screen object
//! and the constellation polyline segments whose endpoints both resolved.

use almanac::{CatalogStore, Rgb, SkyObject};
use serde::{Deserialize, Serialize};

use crate::observer::FrameSnapshot;
use crate::projector::{project, Projection, ScreenPoint, Viewport};

/// A planet placed on screen, with its display color for the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlanet {
    pub name: String,
    pub color: Rgb,
    pub point: ScreenPoint,
}

/// A named star or deep-sky object placed on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub name: String,
    pub point: ScreenPoint,
}

/// One constellation line segment with both endpoints on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: ScreenPoint,
    pub b: ScreenPoint,
}

/// Everything visible this frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameComposition {
    pub segments: Vec<Segment>,
    pub planets: Vec<PlacedPlanet>,
    pub sun: Option<ScreenPoint>,
    pub moon: Option<ScreenPoint>,
    pub stars: Vec<PlacedObject>,
    pub deep_sky: Vec<PlacedObject>,
}

impl FrameComposition {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
            && self.planets.is_empty()
            && self.sun.is_none()
            && self.moon.is_none()
            && self.stars.is_empty()
            && self.deep_sky.is_empty()
    }
}

/// Compose the overlay for one frame.
///
/// A constellation segment is dropped when either endpoint star is missing
/// from the loaded set or projects off-screen; the rest of the line still
/// renders.
pub fn compose_frame(
    catalog: &CatalogStore,
    snapshot: &FrameSnapshot,
    viewport: Viewport,
) -> FrameComposition {
    let mut composition = FrameComposition::default();

    for line in catalog.constellation_lines() {
        for pair in line.hip_sequence.windows(2) {
            let (Some(star_a), Some(star_b)) =
                (catalog.star_by_hip(pair[0]), catalog.star_by_hip(pair[1]))
            else {
                continue;
            };
            let (Projection::OnScreen(a), Projection::OnScreen(b)) = (
                project(star_a.position, snapshot, viewport),
                project(star_b.position, snapshot, viewport),
            ) else {
                continue;
            };
            composition.segments.push(Segment { a, b });
        }
    }

    for planet in catalog.planets() {
        if let Some(point) = project(planet.position, snapshot, viewport).point() {
            composition.planets.push(PlacedPlanet {
                name: planet.name().to_string(),
                color: planet.display_color(),
                point,
            });
        }
    }

    if let Some(sun) = catalog.sun() {
        composition.sun = project(sun.position, snapshot, viewport).point();
    }

    if let Some(moon) = catalog.moon() {
        composition.moon = project(moon.position, snapshot, viewport).point();
    }

    for star in catalog.stars() {
        if let Some(point) = project(star.position, snapshot, viewport).point() {
            composition.stars.push(PlacedObject {
                name: star.name.clone(),
                point,
            });
        }
    }

    for object in catalog.deep_sky_objects() {
        if let Some(point) = project(object.position, snapshot, viewport).point() {
            composition.deep_sky.push(PlacedObject {
                name: object.name.clone(),
                point,
            });
        }
    }

    composition
}
