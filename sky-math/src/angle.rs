use std::f64::consts::PI;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return 360.0 when the input is a tiny negative value.
    if wrapped >= 360.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Wrap an angular difference in degrees into `[-180, 180]`.
pub fn wrap_delta_degrees(delta: f64) -> f64 {
    let mut wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

/// Wrap an hour angle in radians into `(-pi, pi]`.
pub fn wrap_hour_angle(radians: f64) -> f64 {
    let mut wrapped = radians;
    while wrapped <= -PI {
        wrapped += 2.0 * PI;
    }
    while wrapped > PI {
        wrapped -= 2.0 * PI;
    }
    wrapped
}
