//! The sky-object data model.

use ephemeris::Body;
use serde::{Deserialize, Serialize};

/// Equatorial celestial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in `[0, 360)`.
    pub ra_deg: f64,
    /// Declination in `[-90, 90]`.
    pub dec_deg: f64,
}

impl Equatorial {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }
}

/// An sRGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Anything with a name and a position on the celestial sphere.
pub trait SkyObject {
    fn name(&self) -> &str;
    fn position(&self) -> Equatorial;
}

/// A catalog star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Hipparcos identifier; the join key for constellation lines.
    pub hip: u32,
    pub name: String,
    pub position: Equatorial,
    pub magnitude: f64,
    pub spectral_type: String,
}

impl SkyObject for Star {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Equatorial {
        self.position
    }
}

/// A deep-sky object (nebula, cluster, galaxy, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepSkyObject {
    pub name: String,
    pub object_type: String,
    pub position: Equatorial,
    pub magnitude: f64,
}

impl SkyObject for DeepSkyObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Equatorial {
        self.position
    }
}

/// A planet placed by the ephemeris provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub body: Body,
    pub position: Equatorial,
    pub distance_au: f64,
}

impl Planet {
    /// Display color for the overlay, fixed per body.
    pub fn display_color(&self) -> Rgb {
        match self.body {
            Body::Mercury => Rgb::new(169, 169, 169),
            Body::Venus => Rgb::new(218, 165, 32),
            Body::Earth => Rgb::new(70, 130, 180),
            Body::Mars => Rgb::new(188, 39, 50),
            Body::Jupiter => Rgb::new(205, 133, 63),
            Body::Saturn => Rgb::new(210, 180, 140),
            Body::Uranus => Rgb::new(175, 238, 238),
            Body::Neptune => Rgb::new(72, 61, 139),
            Body::Sun | Body::Moon => Rgb::new(255, 255, 255),
        }
    }
}

impl SkyObject for Planet {
    fn name(&self) -> &str {
        self.body.common_name()
    }

    fn position(&self) -> Equatorial {
        self.position
    }
}

/// The Moon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moon {
    pub position: Equatorial,
    /// Phase in `[0, 1]`: 0 and 1 are new, 0.5 is full.
    pub phase: f64,
}

impl SkyObject for Moon {
    fn name(&self) -> &str {
        "Moon"
    }

    fn position(&self) -> Equatorial {
        self.position
    }
}

/// The Sun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    pub position: Equatorial,
}

impl SkyObject for Sun {
    fn name(&self) -> &str {
        "Sun"
    }

    fn position(&self) -> Equatorial {
        self.position
    }
}

/// A constellation polyline joining stars by HIP id in drawing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationLine {
    pub abbreviation: String,
    pub hip_sequence: Vec<u32>,
}

/// An owned snapshot of any sky object, used as a lock-on candidate and as
/// the locked-target record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub position: Equatorial,
}

impl Target {
    pub fn of(object: &dyn SkyObject) -> Self {
        Self {
            name: object.name().to_string(),
            position: object.position(),
        }
    }
}
