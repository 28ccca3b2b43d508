//! # Cube Primitive
//!
//! Generates a unit cube with four vertices per face for flat shading.

use config::constants::CUBE_STRIP_FACES;
use glam::{Vec2, Vec3};

use crate::mesh::Mesh;
use crate::process::finish;
use crate::settings::GeneratorSetting;
use crate::tables::{CUBE_FACES, CUBE_UVS, QUAD_INDICES};

/// Creates a unit cube centered at the origin.
///
/// Faces are emitted in the order Left, Front, Right, Back, Top, Bottom and
/// laid out left to right in a 6×1 texture strip.
///
/// # Returns
///
/// A mesh with 24 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{cube, GeneratorSetting};
///
/// let mesh = cube(&GeneratorSetting::default());
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn cube(settings: &GeneratorSetting) -> Mesh {
    let mut mesh = Mesh::with_capacity(24, 12);

    for (face, uvs) in CUBE_FACES.iter().zip(&CUBE_UVS) {
        let base = mesh.vertex_count() as u32;
        for (position, uv) in face.iter().zip(uvs) {
            let uv = Vec2::from_array(*uv);
            mesh.add_vertex(
                Vec3::from_array(*position),
                Vec2::new(uv.x / CUBE_STRIP_FACES, uv.y),
            );
        }
        for tri in QUAD_INDICES.chunks_exact(3) {
            mesh.add_triangle(base + tri[0], base + tri[1], base + tri[2]);
        }
    }

    log::debug!("cube: {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
    finish(mesh, settings)
}
