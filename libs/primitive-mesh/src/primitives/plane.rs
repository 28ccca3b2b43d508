//! # Plane Primitive
//!
//! Generates a tiled unit plane in the xz plane facing +y.

use config::constants::{MIN_GRID_TILES, UNIT_HALF_EXTENT};
use glam::{Vec2, Vec3};

use super::{cell_corners, cell_triangles, grid_vertex_count};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::process::finish;
use crate::settings::GeneratorSetting;

/// Creates a unit plane split into `width_tiles × height_tiles` cells.
///
/// # Arguments
///
/// * `width_tiles` - Cells along x (at least 1)
/// * `height_tiles` - Cells along z (at least 1)
/// * `settings` - Post-processing settings
///
/// # Returns
///
/// A mesh with `(width_tiles + 1) × (height_tiles + 1)` vertices and
/// `2 × width_tiles × height_tiles` triangles. UVs are `(x + 0.5, 0.5 - z)`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{plane, GeneratorSetting};
///
/// let mesh = plane(2, 3, &GeneratorSetting::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn plane(
    width_tiles: u32,
    height_tiles: u32,
    settings: &GeneratorSetting,
) -> Result<Mesh, MeshError> {
    MeshError::require_at_least("width_tiles", width_tiles, MIN_GRID_TILES)?;
    MeshError::require_at_least("height_tiles", height_tiles, MIN_GRID_TILES)?;
    let vertex_count = grid_vertex_count(height_tiles, width_tiles)?;

    let triangle_count = 2 * width_tiles as usize * height_tiles as usize;
    let mut mesh = Mesh::with_capacity(vertex_count as usize, triangle_count);

    for i in 0..=height_tiles {
        let z = i as f32 / height_tiles as f32 - UNIT_HALF_EXTENT;
        for j in 0..=width_tiles {
            let x = j as f32 / width_tiles as f32 - UNIT_HALF_EXTENT;
            mesh.add_vertex(
                Vec3::new(x, 0.0, z),
                Vec2::new(x + UNIT_HALF_EXTENT, UNIT_HALF_EXTENT - z),
            );
        }
    }

    for i in 0..height_tiles {
        for j in 0..width_tiles {
            for [a, b, c] in cell_triangles(cell_corners(i, j, width_tiles), 0) {
                mesh.add_triangle(a, b, c);
            }
        }
    }

    log::debug!(
        "plane {width_tiles}x{height_tiles}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(finish(mesh, settings))
}
