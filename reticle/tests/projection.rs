//! Projection and frame-composition behavior against a fixed sky.

mod common;

use almanac::{ConstellationLine, Equatorial};
use approx::assert_relative_eq;
use common::{aimed_at, init_logging, snapshot, star, star_store, test_location};
use reticle::{compose_frame, project, LockOffset, Projection, Viewport};
use time::macros::datetime;

const UTC: time::OffsetDateTime = datetime!(2024-06-21 12:00:00 UTC);

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

#[test]
fn projection_requires_both_fixes() {
    init_logging();
    let position = Equatorial::new(180.0, 0.0);
    let attitude = aimed_at(position, test_location(), UTC);

    let without_location = snapshot(Some(attitude), None, None, UTC);
    assert_eq!(
        project(position, &without_location, viewport()),
        Projection::OffScreen
    );

    let without_attitude = snapshot(None, Some(test_location()), None, UTC);
    assert_eq!(
        project(position, &without_attitude, viewport()),
        Projection::OffScreen
    );
}

#[test]
fn aimed_object_lands_at_viewport_center() {
    init_logging();
    let position = Equatorial::new(180.0, 0.0);
    let attitude = aimed_at(position, test_location(), UTC);
    let frame = snapshot(Some(attitude), Some(test_location()), None, UTC);

    let point = project(position, &frame, viewport()).point().unwrap();
    assert_relative_eq!(point.x, 400.0, epsilon = 1e-6);
    assert_relative_eq!(point.y, 300.0, epsilon = 1e-6);
}

#[test]
fn azimuth_delta_maps_linearly_and_cuts_off() {
    init_logging();
    let position = Equatorial::new(180.0, 0.0);
    let mut attitude = aimed_at(position, test_location(), UTC);

    // 29.5 degrees east of the facing direction: still visible, near the
    // right edge.
    attitude.yaw_deg -= 29.5;
    let frame = snapshot(Some(attitude), Some(test_location()), None, UTC);
    let point = project(position, &frame, viewport()).point().unwrap();
    assert_relative_eq!(point.x, (29.5 / 60.0 + 0.5) * 800.0, epsilon = 1e-6);

    // 31 degrees: outside the 60-degree horizontal field.
    attitude.yaw_deg -= 1.5;
    let frame = snapshot(Some(attitude), Some(test_location()), None, UTC);
    assert_eq!(project(position, &frame, viewport()), Projection::OffScreen);
}

#[test]
fn positive_altitude_delta_goes_to_upper_screen() {
    init_logging();
    let position = Equatorial::new(180.0, 0.0);
    let mut attitude = aimed_at(position, test_location(), UTC);

    // Device pitched 10 degrees below the object.
    attitude.pitch_deg -= 10.0;
    let frame = snapshot(Some(attitude), Some(test_location()), None, UTC);
    let point = project(position, &frame, viewport()).point().unwrap();
    assert_relative_eq!(point.y, (1.0 - (10.0 / 40.0 + 0.5)) * 600.0, epsilon = 1e-6);
    assert!(point.y < 300.0);
}

#[test]
fn azimuth_delta_wraps_across_north() {
    init_logging();
    // An object whose azimuth sits just east of north, seen with the device
    // facing just west of north: the raw difference is near 360 but the
    // wrapped delta is small.
    let position = Equatorial::new(180.0, 0.0);
    let mut attitude = aimed_at(position, test_location(), UTC);
    attitude.yaw_deg += 355.0;
    let frame = snapshot(Some(attitude), Some(test_location()), None, UTC);

    let point = project(position, &frame, viewport()).point().unwrap();
    assert_relative_eq!(point.x, (-355.0f64 + 360.0) / 60.0 * 800.0 + 400.0, epsilon = 1e-6);
}

#[test]
fn lock_offset_recenters_the_target() {
    init_logging();
    let position = Equatorial::new(180.0, 0.0);
    let mut attitude = aimed_at(position, test_location(), UTC);

    // The mount drifted 5 degrees in yaw and -3 in pitch; the committed
    // offset compensates exactly.
    attitude.yaw_deg -= 5.0;
    attitude.pitch_deg += 3.0;
    let offset = LockOffset {
        yaw_deg: 5.0,
        pitch_deg: -3.0,
    };

    let frame = snapshot(Some(attitude), Some(test_location()), Some(offset), UTC);
    let point = project(position, &frame, viewport()).point().unwrap();
    assert_relative_eq!(point.x, 400.0, epsilon = 1e-6);
    assert_relative_eq!(point.y, 300.0, epsilon = 1e-6);
}

#[test]
fn missing_hip_endpoint_drops_only_its_segment() {
    init_logging();
    let anchor = Equatorial::new(180.0, 0.0);
    let stars = vec![
        star(1, "A", 180.0, 0.0),
        star(2, "B", 181.0, 1.0),
        star(3, "C", 182.0, 0.5),
    ];
    // HIP 4 is not loaded: the B-C segment must still render while C-4 is
    // dropped.
    let lines = vec![ConstellationLine {
        abbreviation: "Tst".to_string(),
        hip_sequence: vec![1, 2, 3, 4],
    }];
    let store = star_store(stars, lines);

    let attitude = aimed_at(anchor, test_location(), UTC);
    let frame = snapshot(Some(attitude), Some(test_location()), None, UTC);
    let composition = compose_frame(&store, &frame, viewport());

    assert_eq!(composition.segments.len(), 2);
    assert_eq!(composition.stars.len(), 3);
}

#[test]
fn off_screen_endpoint_drops_only_its_segment() {
    init_logging();
    let anchor = Equatorial::new(180.0, 0.0);
    let stars = vec![
        star(1, "A", 180.0, 0.0),
        star(2, "B", 181.0, 1.0),
        // Far outside the field of view.
        star(3, "C", 90.0, 60.0),
    ];
    let lines = vec![ConstellationLine {
        abbreviation: "Tst".to_string(),
        hip_sequence: vec![1, 2, 3],
    }];
    let store = star_store(stars, lines);

    let attitude = aimed_at(anchor, test_location(), UTC);
    let frame = snapshot(Some(attitude), Some(test_location()), None, UTC);
    let composition = compose_frame(&store, &frame, viewport());

    assert_eq!(composition.segments.len(), 1);
    assert_eq!(composition.stars.len(), 2);
}
