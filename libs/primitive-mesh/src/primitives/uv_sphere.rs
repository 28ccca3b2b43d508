//! # UV Sphere Primitive
//!
//! Generates a latitude/longitude sphere with an equirectangular texture
//! mapping.

use std::f64::consts::{PI, TAU};

use config::constants::{MIN_SPHERE_RINGS, MIN_SPHERE_SEGMENTS, UNIT_HALF_EXTENT};
use glam::{Vec2, Vec3};

use super::{cell_corners, cell_triangles, grid_vertex_count};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::process::finish;
use crate::settings::GeneratorSetting;

/// Point on the sphere of radius 0.5 at polar angle `theta` and azimuth
/// `phi`. `theta = 0` is the north pole (+y).
///
/// Evaluated in `f64` so that `sin(π)` keeps its sign and the south pole
/// ring does not fold over.
#[inline]
pub(crate) fn spherical_point(theta: f64, phi: f64) -> Vec3 {
    let radius = f64::from(UNIT_HALF_EXTENT);
    let sin_theta = theta.sin();
    Vec3::new(
        (phi.cos() * sin_theta * radius) as f32,
        (theta.cos() * radius) as f32,
        (phi.sin() * sin_theta * radius) as f32,
    )
}

/// Creates a UV sphere of radius 0.5.
///
/// Rows run from the north pole (`v = 0`) to the south pole (`v = 1`);
/// columns sweep the azimuth with `φ = -2π·u`. The seam column and the pole
/// rows are duplicated so the texture wraps cleanly.
///
/// # Arguments
///
/// * `rings` - Latitude rows (at least 1)
/// * `segments` - Longitude columns (at least 1)
/// * `settings` - Post-processing settings
///
/// # Returns
///
/// A mesh with `(rings + 1) × (segments + 1)` vertices and
/// `2 × rings × segments` triangles.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{uv_sphere, GeneratorSetting};
///
/// let mesh = uv_sphere(8, 16, &GeneratorSetting::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 9 * 17);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 16);
/// ```
pub fn uv_sphere(rings: u32, segments: u32, settings: &GeneratorSetting) -> Result<Mesh, MeshError> {
    MeshError::require_at_least("rings", rings, MIN_SPHERE_RINGS)?;
    MeshError::require_at_least("segments", segments, MIN_SPHERE_SEGMENTS)?;
    let vertex_count = grid_vertex_count(rings, segments)?;

    let triangle_count = 2 * rings as usize * segments as usize;
    let mut mesh = Mesh::with_capacity(vertex_count as usize, triangle_count);

    for i in 0..=rings {
        let latitude = f64::from(i) / f64::from(rings);
        let theta = latitude * PI;
        for j in 0..=segments {
            let longitude = f64::from(j) / f64::from(segments);
            let phi = -longitude * TAU;
            mesh.add_vertex(
                spherical_point(theta, phi),
                Vec2::new(longitude as f32, latitude as f32),
            );
        }
    }

    for i in 0..rings {
        for j in 0..segments {
            for [a, b, c] in cell_triangles(cell_corners(i, j, segments), 0) {
                mesh.add_triangle(a, b, c);
            }
        }
    }

    log::debug!(
        "uv sphere {rings}x{segments}: {} vertices, {} triangles",
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
    fn test_uv_sphere_counts() {
        let mesh = uv_sphere(4, 6, &GeneratorSetting::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 35);
        assert_eq!(mesh.triangle_count(), 48);
    }

    #[test]
    fn test_uv_sphere_vertices_on_radius() {
        let mesh = uv_sphere(6, 10, &GeneratorSetting::default()).unwrap();
        for p in mesh.positions() {
            assert_abs_diff_eq!(p.length(), 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_uv_sphere_poles_and_uvs() {
        let mesh = uv_sphere(3, 4, &GeneratorSetting::default()).unwrap();
        assert_abs_diff_eq!(mesh.positions()[0].y, 0.5, epsilon = 1e-6);
        let last = *mesh.positions().last().unwrap();
        assert_abs_diff_eq!(last.y, -0.5, epsilon = 1e-6);
        assert_eq!(mesh.uvs()[0], Vec2::ZERO);
        assert_eq!(*mesh.uvs().last().unwrap(), Vec2::ONE);
    }

    #[test]
    fn test_uv_sphere_uvs_follow_grid() {
        let (rings, segments) = (5u32, 7u32);
        let mesh = uv_sphere(rings, segments, &GeneratorSetting::default()).unwrap();
        let columns = segments as usize + 1;

        for (k, (p, uv)) in mesh.positions().iter().zip(mesh.uvs()).enumerate() {
            let (i, j) = (k / columns, k % columns);
            let longitude = j as f32 / segments as f32;
            let latitude = i as f32 / rings as f32;
            assert_abs_diff_eq!(uv.x, longitude, epsilon = 1e-6);
            assert_abs_diff_eq!(uv.y, latitude, epsilon = 1e-6);
            let expected_y = 0.5 * (latitude * std::f32::consts::PI).cos();
            assert_abs_diff_eq!(p.y, expected_y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_uv_sphere_normals_point_outward() {
        let mesh = uv_sphere(8, 12, &GeneratorSetting::default()).unwrap();
        for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
            // Slivers at the north pole leave zero normals
            if *n != Vec3::ZERO {
                assert!(n.dot(*p) > 0.0, "normal {n:?} at {p:?}");
            }
        }
    }

    #[test]
    fn test_uv_sphere_rejects_zero_counts() {
        let settings = GeneratorSetting::default();
        assert!(matches!(
            uv_sphere(0, 8, &settings),
            Err(MeshError::InvalidArgument { parameter: "rings", .. })
        ));
        assert!(matches!(
            uv_sphere(8, 0, &settings),
            Err(MeshError::InvalidArgument { parameter: "segments", .. })
        ));
    }
}
