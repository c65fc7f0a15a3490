use crate::angle::wrap_degrees;
use crate::J2000_JD;

/// Greenwich Mean Sidereal Time in degrees, wrapped into `[0, 360)`.
pub fn gmst_degrees(julian_date: f64) -> f64 {
    wrap_degrees(280.460_618_37 + 360.985_647_366_29 * (julian_date - J2000_JD))
}

/// Local Sidereal Time in degrees for an observer at `longitude_deg`
/// (east-positive), wrapped into `[0, 360)`.
pub fn local_sidereal_time(julian_date: f64, longitude_deg: f64) -> f64 {
    wrap_degrees(gmst_degrees(julian_date) + longitude_deg)
}
