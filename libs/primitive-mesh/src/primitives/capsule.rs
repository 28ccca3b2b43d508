//! # Capsule Primitive
//!
//! Generates a capsule: an open unit cylinder closed by two hemispheres of
//! radius 0.5, spanning `y ∈ [-1, 1]`.

use std::f64::consts::{FRAC_PI_2, TAU};

use config::constants::{atlas_u_scale, MIN_POLYGON_SIDES, UNIT_HALF_EXTENT};
use glam::{Vec2, Vec3};

use super::cylinder::cylinder_body;
use super::uv_sphere::spherical_point;
use super::{cell_corners, cell_triangles};
use crate::error::MeshError;
use crate::merge::merge;
use crate::mesh::Mesh;
use crate::process::finish;
use crate::settings::GeneratorSetting;

/// Builds both hemispheres without normals or post-processing.
///
/// Each hemisphere is a UV-sphere grid over a quarter meridian with
/// `sides / 2` rings and `sides` segments. The upper one is emitted first;
/// the lower one mirrors it in y and lists every cell's indices in reverse so
/// it still faces outward. Texture coordinates pack the upper cap into the
/// top half and the lower cap into the bottom half of the unit-wide atlas
/// column.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::capsule::capsule_head;
///
/// let head = capsule_head(8).unwrap();
/// assert_eq!(head.vertex_count(), 2 * 5 * 9);
/// assert_eq!(head.triangle_count(), 2 * 2 * 4 * 8);
/// ```
pub fn capsule_head(sides: u32) -> Result<Mesh, MeshError> {
    MeshError::require_at_least("sides", sides, MIN_POLYGON_SIDES)?;
    let rings = sides / 2;
    let segments = sides;
    let per_hemisphere = (u64::from(rings) + 1) * (u64::from(segments) + 1);
    MeshError::require_addressable(2 * per_hemisphere)?;

    let u_scale = atlas_u_scale();
    let mut mesh = Mesh::with_capacity(
        2 * per_hemisphere as usize,
        4 * rings as usize * segments as usize,
    );

    for (hemisphere, side) in [1.0f32, -1.0].into_iter().enumerate() {
        let v_offset = if hemisphere == 0 { 0.25 } else { 0.75 };
        for i in 0..=rings {
            let theta = f64::from(i) / f64::from(rings) * FRAC_PI_2;
            for j in 0..=segments {
                let phi = -(f64::from(j) / f64::from(segments)) * TAU;
                let p = spherical_point(theta, phi);
                mesh.add_vertex(
                    Vec3::new(p.x, (p.y + UNIT_HALF_EXTENT) * side, p.z),
                    Vec2::new((UNIT_HALF_EXTENT + p.x) * u_scale, v_offset + p.z * 0.5),
                );
            }
        }
    }

    for hemisphere in 0..2u32 {
        let base = hemisphere * per_hemisphere as u32;
        for i in 0..rings {
            for j in 0..segments {
                let [first, second] = cell_triangles(cell_corners(i, j, segments), base);
                if hemisphere == 0 {
                    mesh.add_triangle(first[0], first[1], first[2]);
                    mesh.add_triangle(second[0], second[1], second[2]);
                } else {
                    mesh.add_triangle(second[2], second[1], second[0]);
                    mesh.add_triangle(first[2], first[1], first[0]);
                }
            }
        }
    }

    Ok(mesh)
}

/// Creates a capsule from `sides` segments around the axis.
///
/// # Returns
///
/// A mesh merged from the hemispheres and the open cylinder body, with
/// `2·(r + 1)·(sides + 1) + 2·(sides + 1)` vertices for `r = sides / 2`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{capsule, GeneratorSetting};
///
/// let mesh = capsule(8, &GeneratorSetting::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 108);
/// assert_eq!(mesh.triangle_count(), 144);
/// ```
pub fn capsule(sides: u32, settings: &GeneratorSetting) -> Result<Mesh, MeshError> {
    let head = capsule_head(sides)?;
    let body = cylinder_body(sides)?;

    let mesh = merge([&head, &body]);

    log::debug!(
        "capsule with {sides} sides: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(finish(mesh, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_head_hemispheres() {
        let head = capsule_head(6).unwrap();
        let half = head.vertex_count() / 2;
        for p in &head.positions()[..half] {
            assert!(p.y >= 0.5 && p.y <= 1.0);
        }
        for p in &head.positions()[half..] {
            assert!(p.y <= -0.5 && p.y >= -1.0);
        }
        // Each hemisphere starts at its pole
        assert_eq!(head.positions()[0], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(head.positions()[half], Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_head_lower_cells_reversed() {
        // sides = 3 gives one ring and three segments per hemisphere
        let head = capsule_head(3).unwrap();
        assert_eq!(head.triangles()[0], [4, 1, 0]);
        assert_eq!(head.triangles()[1], [4, 5, 1]);
        assert_eq!(head.triangles()[6], [9, 13, 12]);
        assert_eq!(head.triangles()[7], [8, 9, 12]);
    }

    #[test]
    fn test_head_uv_quadrants() {
        let head = capsule_head(10).unwrap();
        let half = head.vertex_count() / 2;
        let scale = atlas_u_scale();
        for uv in head.uvs() {
            assert!(uv.x >= 0.0 && uv.x <= scale + 1e-6);
        }
        for uv in &head.uvs()[..half] {
            assert!(uv.y >= -1e-6 && uv.y <= 0.5 + 1e-6);
        }
        for uv in &head.uvs()[half..] {
            assert!(uv.y >= 0.5 - 1e-6 && uv.y <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_head_uvs_follow_positions() {
        let sides = 7;
        let head = capsule_head(sides).unwrap();
        let half = head.vertex_count() / 2;
        let scale = atlas_u_scale();

        for (k, (p, uv)) in head.positions().iter().zip(head.uvs()).enumerate() {
            let v_offset = if k < half { 0.25 } else { 0.75 };
            assert_abs_diff_eq!(uv.x, (0.5 + p.x) * scale, epsilon = 1e-6);
            assert_abs_diff_eq!(uv.y, v_offset + p.z * 0.5, epsilon = 1e-6);
        }

        // The lower hemisphere mirrors the upper one in y only
        for (upper, lower) in head.positions()[..half].iter().zip(&head.positions()[half..]) {
            assert_eq!(lower.x, upper.x);
            assert_eq!(lower.y, -upper.y);
            assert_eq!(lower.z, upper.z);
        }
    }

    #[test]
    fn test_capsule_counts() {
        let mesh = capsule(3, &GeneratorSetting::default()).unwrap();
        // r = 1: 2·2·4 head + 2·4 body vertices, 4·1·3 + 6 triangles
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 18);
    }

    #[test]
    fn test_capsule_bounds() {
        let (min, max) = capsule(16, &GeneratorSetting::default())
            .unwrap()
            .bounding_box();
        assert_abs_diff_eq!(min.y, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(max.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(max.x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_capsule_normals_point_away_from_axis() {
        let mesh = capsule(12, &GeneratorSetting::default()).unwrap();
        for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
            if *n == Vec3::ZERO {
                continue;
            }
            // Direction from the nearest point on the inner segment y ∈ [-0.5, 0.5]
            let center = Vec3::new(0.0, p.y.clamp(-0.5, 0.5), 0.0);
            assert!(n.dot(*p - center) > 0.0, "normal {n:?} at {p:?}");
        }
    }

    #[test]
    fn test_capsule_rejects_two_sides() {
        assert!(matches!(
            capsule(2, &GeneratorSetting::default()),
            Err(MeshError::InvalidArgument { parameter: "sides", .. })
        ));
    }
}
