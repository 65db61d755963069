//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_unit_radius_is_half_unit_size() {
    assert_eq!(UNIT_RADIUS * 2.0, UNIT_SIZE);
}

#[test]
fn test_default_segments_above_minimum() {
    assert!(
        DEFAULT_SEGMENTS >= MIN_SEGMENTS,
        "DEFAULT_SEGMENTS must form a closed polygon"
    );
}

#[test]
fn test_squash_halves_height() {
    assert_eq!(SQUASH_Y_SCALE, 0.5);
}

// =============================================================================
// COLOUR TESTS
// =============================================================================

#[test]
fn test_sentinel_is_outside_colour_range() {
    // Never mistaken for a real alpha value
    assert!(!(0.0..=1.0).contains(&VERTEX_COLOR_SENTINEL));
}

#[test]
fn test_colour_constants_fit_24_bits() {
    for value in [
        DEFAULT_BACKGROUND,
        PHONG_SPECULAR,
        MERGED_EMISSIVE,
        MERGED_BASE_COLOR,
        LIGHT_COLOR,
    ] {
        assert!(value <= 0xff_ffff);
    }
}

// =============================================================================
// CAMERA TESTS
// =============================================================================

#[test]
fn test_camera_planes_ordered() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_DISTANCE > CAMERA_NEAR);
}

#[test]
fn test_fov_is_sane() {
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
}

// =============================================================================
// ANIMATION TESTS
// =============================================================================

#[test]
fn test_rotation_step_is_small() {
    assert!(ROTATION_STEP > 0.0 && ROTATION_STEP < 0.1);
}
