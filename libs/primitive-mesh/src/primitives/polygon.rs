//! # Polygon Primitive
//!
//! Generates a regular polygon as a triangle fan in the xy plane facing +z.

use std::f32::consts::TAU;

use config::constants::{MIN_POLYGON_SIDES, UNIT_HALF_EXTENT};
use glam::{Vec2, Vec3};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::process::finish;
use crate::settings::GeneratorSetting;

/// Builds the raw fan without normals or post-processing.
///
/// Vertex 0 is the center; rim vertex `i` (1-based) sits at angle
/// `2π·i/sides` on the circle of radius 0.5.
pub(crate) fn polygon_fan(sides: u32) -> Result<Mesh, MeshError> {
    MeshError::require_at_least("sides", sides, MIN_POLYGON_SIDES)?;
    MeshError::require_addressable(u64::from(sides) + 1)?;

    let mut mesh = Mesh::with_capacity(sides as usize + 1, sides as usize);
    mesh.add_vertex(Vec3::ZERO, Vec2::splat(UNIT_HALF_EXTENT));

    for i in 1..=sides {
        let angle = i as f32 / sides as f32 * TAU;
        let x = angle.cos() * UNIT_HALF_EXTENT;
        let y = angle.sin() * UNIT_HALF_EXTENT;
        mesh.add_vertex(
            Vec3::new(x, y, 0.0),
            Vec2::new(x + UNIT_HALF_EXTENT, UNIT_HALF_EXTENT - y),
        );
    }

    for i in 1..=sides {
        mesh.add_triangle(0, i, i % sides + 1);
    }

    Ok(mesh)
}

/// Creates a regular polygon with `sides` rim vertices.
///
/// # Returns
///
/// A mesh with `sides + 1` vertices (center first) and `sides` triangles.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{polygon, GeneratorSetting};
///
/// let mesh = polygon(6, &GeneratorSetting::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 7);
/// assert_eq!(mesh.triangle_count(), 6);
/// ```
pub fn polygon(sides: u32, settings: &GeneratorSetting) -> Result<Mesh, MeshError> {
    let mesh = polygon_fan(sides)?;
    log::debug!(
        "polygon with {sides} sides: {} vertices, {} triangles",
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
    fn test_polygon_square() {
        let mesh = polygon(4, &GeneratorSetting::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.uvs()[0], Vec2::new(0.5, 0.5));
        assert_eq!(mesh.triangles()[3], [0, 4, 1]);
    }

    #[test]
    fn test_polygon_faces_positive_z() {
        let mesh = polygon(7, &GeneratorSetting::default()).unwrap();
        for n in mesh.normals() {
            assert_abs_diff_eq!(n.z, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_polygon_rim_on_circle() {
        let mesh = polygon(12, &GeneratorSetting::default()).unwrap();
        for p in &mesh.positions()[1..] {
            assert_abs_diff_eq!(p.length(), 0.5, epsilon = 1e-6);
        }
        // The last rim vertex closes the loop at angle 2π
        let last = mesh.positions()[12];
        assert_abs_diff_eq!(last.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_polygon_rim_uvs() {
        let mesh = polygon(5, &GeneratorSetting::default()).unwrap();
        for (p, uv) in mesh.positions().iter().zip(mesh.uvs()) {
            assert_abs_diff_eq!(uv.x, p.x + 0.5, epsilon = 1e-6);
            assert_abs_diff_eq!(uv.y, 0.5 - p.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_polygon_rejects_two_sides() {
        assert_eq!(
            polygon(2, &GeneratorSetting::default()),
            Err(MeshError::InvalidArgument {
                parameter: "sides",
                value: 2,
                minimum: 3,
            })
        );
    }
}
