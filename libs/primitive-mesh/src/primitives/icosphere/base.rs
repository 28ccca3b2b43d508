//! The 22-vertex icosahedron that seeds subdivision.

use std::f32::consts::TAU;

use config::constants::{ICOSPHERE_U_DIVISOR, UNIT_HALF_EXTENT};
use glam::{Vec2, Vec3};

use crate::mesh::Mesh;
use crate::tables::{ICOSPHERE_INDICES, ICOSPHERE_U, ICOSPHERE_V};

/// Number of base vertices: the 12 icosahedron corners with the poles split
/// five ways and one ring vertex duplicated on each ring for the UV seam.
pub const BASE_VERTEX_COUNT: usize = 22;

/// Number of base triangles.
pub const BASE_TRIANGLE_COUNT: usize = 20;

/// Builds the base icosahedron of radius 0.5 without normals.
///
/// The two rings sit at `y = ±0.5·sin(atan(0.5))`; the lower ring is turned
/// by a tenth of a revolution against the upper one.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::icosphere::icosphere_base;
///
/// let base = icosphere_base();
/// assert_eq!(base.vertex_count(), 22);
/// assert_eq!(base.triangle_count(), 20);
/// assert!(base.normals().is_empty());
/// ```
pub fn icosphere_base() -> Mesh {
    let ring_angle = 0.5f32.atan();
    let ring_radius = ring_angle.cos() * UNIT_HALF_EXTENT;
    let ring_height = ring_angle.sin() * UNIT_HALF_EXTENT;

    let mut positions = [Vec3::ZERO; BASE_VERTEX_COUNT];
    for i in 0..5 {
        positions[i] = Vec3::new(0.0, UNIT_HALF_EXTENT, 0.0);
        positions[17 + i] = Vec3::new(0.0, -UNIT_HALF_EXTENT, 0.0);
    }
    for i in 0..=5 {
        let upper = i as f32 / 5.0 * TAU;
        let lower = upper - 0.1 * TAU;
        positions[5 + i] = Vec3::new(
            ring_radius * upper.cos(),
            ring_height,
            ring_radius * upper.sin(),
        );
        positions[11 + i] = Vec3::new(
            ring_radius * lower.cos(),
            -ring_height,
            ring_radius * lower.sin(),
        );
    }

    let mut mesh = Mesh::with_capacity(BASE_VERTEX_COUNT, BASE_TRIANGLE_COUNT);
    for (k, position) in positions.into_iter().enumerate() {
        let uv = Vec2::new(ICOSPHERE_U[k] / ICOSPHERE_U_DIVISOR, ICOSPHERE_V[k]);
        mesh.add_vertex(position, uv);
    }
    for &[a, b, c] in &ICOSPHERE_INDICES {
        mesh.add_triangle(a, b, c);
    }
    mesh
}
