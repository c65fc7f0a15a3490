use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::angle::{wrap_degrees, wrap_hour_angle};
use crate::julian::julian_date;
use crate::sidereal::local_sidereal_time;

/// Horizontal (observer-relative) coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Altitude above the horizon, in `[-90, 90]`.
    pub alt_deg: f64,
    /// Azimuth measured from north through east, in `[0, 360)`.
    pub az_deg: f64,
}

/// Convert equatorial coordinates to the horizontal frame of an observer at
/// `(lat_deg, lon_deg)` at the given UTC instant.
///
/// The two-valued acos ambiguity in azimuth is resolved with the sign of the
/// hour angle. At the degenerate geometry `cos(alt) * cos(lat) == 0` (object
/// at the zenith, or observer at a pole) azimuth is reported as `0.0`.
pub fn ra_dec_to_alt_az(
    ra_deg: f64,
    dec_deg: f64,
    lat_deg: f64,
    lon_deg: f64,
    utc: OffsetDateTime,
) -> Horizontal {
    let jd = julian_date(utc);
    let lst = local_sidereal_time(jd, lon_deg);

    let hour_angle = wrap_hour_angle(wrap_degrees(lst - ra_deg).to_radians());
    let lat = lat_deg.to_radians();
    let dec = dec_deg.to_radians();

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * hour_angle.cos();
    let alt = sin_alt.clamp(-1.0, 1.0).asin();

    // cos(90 deg) does not round to exactly zero, so the degenerate
    // geometry is detected with a tolerance rather than an equality.
    let denominator = alt.cos() * lat.cos();
    let az = if denominator.abs() < 1e-12 {
        0.0
    } else {
        let cos_az = ((dec.sin() - alt.sin() * lat.sin()) / denominator).clamp(-1.0, 1.0);
        let az = cos_az.acos();
        if hour_angle.sin() > 0.0 {
            2.0 * PI - az
        } else {
            az
        }
    };

    Horizontal {
        alt_deg: alt.to_degrees(),
        az_deg: wrap_degrees(az.to_degrees()),
    }
}
