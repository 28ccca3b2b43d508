//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_weld_epsilon_is_positive() {
    assert!(WELD_EPSILON > 0.0, "WELD_EPSILON must be positive");
}

#[test]
fn test_weld_epsilon_matches_subdivision_tolerance() {
    assert_eq!(WELD_EPSILON, 1e-5);
}

#[test]
fn test_weld_epsilon_above_f32_resolution() {
    // Components live in [-1, 1]; the tolerance must exceed their ulp
    assert!(WELD_EPSILON > f32::EPSILON * 4.0);
}

#[test]
fn test_normal_tolerance_is_small() {
    assert!(NORMAL_LENGTH_TOLERANCE <= 1e-4);
}

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_unit_primitives_have_unit_size() {
    assert_eq!(UNIT_HALF_EXTENT * 2.0, 1.0);
}

// =============================================================================
// PARAMETER TESTS
// =============================================================================

#[test]
fn test_polygon_needs_a_triangle() {
    assert_eq!(MIN_POLYGON_SIDES, 3);
}

#[test]
fn test_grid_minimums_are_one() {
    assert_eq!(MIN_GRID_TILES, 1);
    assert_eq!(MIN_SPHERE_RINGS, 1);
    assert_eq!(MIN_SPHERE_SEGMENTS, 1);
}

#[test]
fn test_capsule_minimum_yields_a_ring() {
    // Capsule hemispheres use sides / 2 rings
    assert!(MIN_POLYGON_SIDES / 2 >= 1);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_fits_u32_indices() {
    assert_eq!(MAX_VERTICES as u64, u32::MAX as u64);
}

// =============================================================================
// TEXTURE LAYOUT TESTS
// =============================================================================

#[test]
fn test_cube_strip_has_six_faces() {
    assert_eq!(CUBE_STRIP_FACES, 6.0);
}

#[test]
fn test_icosphere_divisor() {
    assert_eq!(ICOSPHERE_U_DIVISOR, 30.0);
}

#[test]
fn test_atlas_scale_normalizes_body_width() {
    let body_end = (1.0 + std::f32::consts::PI) * atlas_u_scale();
    assert!((body_end - 1.0).abs() < 1e-6);
    assert!(atlas_u_scale() > 0.0 && atlas_u_scale() < 1.0);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_tolerance() {
    assert!(approx_equal(0.25, 0.25 + 5e-6));
    assert!(approx_equal(-0.5, -0.5));
}

#[test]
fn test_approx_equal_outside_tolerance() {
    assert!(!approx_equal(0.25, 0.2501));
}

#[test]
fn test_is_unit_or_zero() {
    assert!(is_unit_or_zero(1.0));
    assert!(is_unit_or_zero(1.0 + 5e-6));
    assert!(is_unit_or_zero(0.0));
    assert!(!is_unit_or_zero(1e-3));
    assert!(!is_unit_or_zero(2.0));
}
