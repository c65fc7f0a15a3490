//! The provider trait consumed by catalog loading.

use std::path::Path;

use nalgebra::Vector3;

use crate::Result;

/// Observer name for geocentric queries.
pub const OBSERVER_EARTH: &str = "EARTH";

/// Inertial reference frame for a state-vector query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    J2000,
}

impl Frame {
    pub fn as_str(self) -> &'static str {
        match self {
            Frame::J2000 => "J2000",
        }
    }
}

/// Aberration correction applied by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AberrationCorrection {
    None,
    /// Light time plus stellar aberration ("LT+S").
    LightTimeStellar,
}

impl AberrationCorrection {
    pub fn as_str(self) -> &'static str {
        match self {
            AberrationCorrection::None => "NONE",
            AberrationCorrection::LightTimeStellar => "LT+S",
        }
    }
}

/// Cartesian state of a body relative to an observer, in km and km/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

/// Latitudinal coordinates derived from a Cartesian position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub range_km: f64,
    pub longitude_rad: f64,
    pub latitude_rad: f64,
}

/// Capability contract for the native ephemeris toolkit.
///
/// Angles come back in radians; callers convert to degrees.
pub trait EphemerisProvider {
    /// Register an ephemeris kernel (leap seconds, planetary data) with the
    /// provider.
    fn load_kernel(&mut self, path: &Path) -> Result<()>;

    /// Convert a UTC time string (see [`crate::format_spice_utc`]) to
    /// ephemeris time in seconds past J2000.
    fn time_to_et(&self, utc: &str) -> Result<f64>;

    /// State of `target` relative to `observer` at `et`, with the light time
    /// to the target in seconds.
    fn state_vector(
        &self,
        target: &str,
        et: f64,
        frame: Frame,
        correction: AberrationCorrection,
        observer: &str,
    ) -> Result<(StateVector, f64)>;

    /// Convert a rectangular position to range / longitude / latitude.
    ///
    /// Longitude lands in `(-pi, pi]`, latitude in `[-pi/2, pi/2]`. Native
    /// bindings may override this with their own routine.
    fn rectangular_to_spherical(&self, position: Vector3<f64>) -> Spherical {
        let range_km = position.norm();
        if range_km == 0.0 {
            return Spherical {
                range_km: 0.0,
                longitude_rad: 0.0,
                latitude_rad: 0.0,
            };
        }
        Spherical {
            range_km,
            longitude_rad: position.y.atan2(position.x),
            latitude_rad: position.z.atan2(position.x.hypot(position.y)),
        }
    }
}
