//! # Quad Primitive
//!
//! Generates a unit quad in the xy plane facing +z.

use glam::{Vec2, Vec3};

use crate::mesh::Mesh;
use crate::process::finish;
use crate::settings::GeneratorSetting;
use crate::tables::{QUAD_INDICES, QUAD_UVS, QUAD_VERTICES};

/// Creates a unit quad centered at the origin.
///
/// # Returns
///
/// A mesh with 4 vertices and 2 triangles, normals `+z` for the default
/// counter-clockwise winding.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{quad, GeneratorSetting};
///
/// let mesh = quad(&GeneratorSetting::default());
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices(), &[0, 1, 2, 3, 1, 0]);
/// ```
pub fn quad(settings: &GeneratorSetting) -> Mesh {
    let mut mesh = Mesh::with_capacity(4, 2);

    for (position, uv) in QUAD_VERTICES.iter().zip(&QUAD_UVS) {
        mesh.add_vertex(Vec3::from_array(*position), Vec2::from_array(*uv));
    }
    for tri in QUAD_INDICES.chunks_exact(3) {
        mesh.add_triangle(tri[0], tri[1], tri[2]);
    }

    log::debug!("quad: {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
    finish(mesh, settings)
}
