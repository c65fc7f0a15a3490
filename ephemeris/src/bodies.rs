//! Typed identifiers for the solar-system bodies the overlay tracks.

use serde::{Deserialize, Serialize};

/// A solar-system body with a known ephemeris query target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Sun,
    Moon,
}

impl Body {
    /// The eight planets in fixed Mercury..Neptune order.
    pub const PLANETS: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// The target name understood by the ephemeris provider.
    pub fn target_name(self) -> &'static str {
        match self {
            Body::Mercury => "MERCURY BARYCENTER",
            Body::Venus => "VENUS BARYCENTER",
            Body::Earth => "EARTH BARYCENTER",
            Body::Mars => "MARS BARYCENTER",
            Body::Jupiter => "JUPITER BARYCENTER",
            Body::Saturn => "SATURN BARYCENTER",
            Body::Uranus => "URANUS BARYCENTER",
            Body::Neptune => "NEPTUNE BARYCENTER",
            Body::Sun => "SUN",
            Body::Moon => "MOON",
        }
    }

    /// The display name shown next to the body in the overlay.
    pub fn common_name(self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Sun => "Sun",
            Body::Moon => "Moon",
        }
    }
}
