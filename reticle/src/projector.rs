//! Field-of-view projection from equatorial coordinates to the viewport.

use almanac::Equatorial;
use serde::{Deserialize, Serialize};
use sky_math::{ra_dec_to_alt_az, wrap_delta_degrees, Horizontal};

use crate::observer::FrameSnapshot;

/// Horizontal field of view in degrees.
pub const FOV_HORIZONTAL_DEG: f64 = 60.0;
/// Vertical field of view in degrees.
pub const FOV_VERTICAL_DEG: f64 = 40.0;

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A projected position in viewport coordinates; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Projection result for one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    OnScreen(ScreenPoint),
    OffScreen,
}

impl Projection {
    pub fn point(self) -> Option<ScreenPoint> {
        match self {
            Projection::OnScreen(point) => Some(point),
            Projection::OffScreen => None,
        }
    }

    pub fn is_on_screen(self) -> bool {
        matches!(self, Projection::OnScreen(_))
    }
}

/// Project an object onto the viewport for the given frame snapshot.
///
/// Without both an attitude and a location fix the object is reported
/// off-screen. An active lock offset shifts the device-facing direction
/// before differencing, which is what keeps the locked object centered
/// despite residual mount misalignment. The azimuth delta is wrapped into
/// `[-180, 180]`; the altitude delta is used raw. An object exactly on the
/// field-of-view edge counts as on-screen.
pub fn project(position: Equatorial, snapshot: &FrameSnapshot, viewport: Viewport) -> Projection {
    let (Some(attitude), Some(location)) = (snapshot.attitude, snapshot.location) else {
        return Projection::OffScreen;
    };

    let Horizontal { alt_deg, az_deg } = ra_dec_to_alt_az(
        position.ra_deg,
        position.dec_deg,
        location.latitude_deg,
        location.longitude_deg,
        snapshot.utc,
    );

    let mut facing_yaw = attitude.yaw_deg;
    let mut facing_pitch = attitude.pitch_deg;
    if let Some(offset) = snapshot.lock_offset {
        facing_yaw += offset.yaw_deg;
        facing_pitch += offset.pitch_deg;
    }

    let delta_az = wrap_delta_degrees(az_deg - facing_yaw);
    let delta_alt = alt_deg - facing_pitch;

    if !in_field_of_view(delta_az, delta_alt) {
        return Projection::OffScreen;
    }

    Projection::OnScreen(ScreenPoint {
        x: (delta_az / FOV_HORIZONTAL_DEG + 0.5) * viewport.width,
        y: (1.0 - (delta_alt / FOV_VERTICAL_DEG + 0.5)) * viewport.height,
    })
}

/// Whether an angular offset from the view center is inside the field of
/// view. The boundary itself is in bounds; only strictly greater offsets
/// are excluded.
pub fn in_field_of_view(delta_az_deg: f64, delta_alt_deg: f64) -> bool {
    delta_az_deg.abs() <= FOV_HORIZONTAL_DEG / 2.0
        && delta_alt_deg.abs() <= FOV_VERTICAL_DEG / 2.0
}
