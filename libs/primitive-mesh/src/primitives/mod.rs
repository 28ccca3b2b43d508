//! # Primitives
//!
//! Mesh generation for unit primitives (quad, plane, polygon, cube, spheres,
//! cylinder, capsule, skyboxes).
//!
//! Every generator builds counter-clockwise geometry, computes flat normals
//! and finally applies its [`GeneratorSetting`](crate::GeneratorSetting).

pub mod capsule;
pub mod cube;
pub mod cylinder;
pub mod icosphere;
pub mod plane;
pub mod polygon;
pub mod quad;
pub mod skybox;
pub mod uv_sphere;

pub use capsule::capsule;
pub use cube::cube;
pub use cylinder::cylinder;
pub use icosphere::icosphere;
pub use plane::plane;
pub use polygon::polygon;
pub use quad::quad;
pub use skybox::{skybox_cube, skybox_sphere};
pub use uv_sphere::uv_sphere;

use crate::error::MeshError;
use crate::tables::QUAD_MAP;

/// Vertices of a `rows × cols` cell grid: `(rows + 1) × (cols + 1)`, computed
/// in `u64` and checked against the `u32` index space.
pub(crate) fn grid_vertex_count(rows: u32, cols: u32) -> Result<u64, MeshError> {
    let count = (u64::from(rows) + 1) * (u64::from(cols) + 1);
    MeshError::require_addressable(count)?;
    Ok(count)
}

/// Corner indices of grid cell `(i, j)` in a row-major grid with `cols + 1`
/// vertices per row: `[(i, j), (i, j + 1), (i + 1, j), (i + 1, j + 1)]`.
#[inline]
pub(crate) fn cell_corners(i: u32, j: u32, cols: u32) -> [u32; 4] {
    let stride = cols + 1;
    [
        i * stride + j,
        i * stride + j + 1,
        (i + 1) * stride + j,
        (i + 1) * stride + j + 1,
    ]
}

/// Splits a grid cell into two triangles with the shared quad map.
#[inline]
pub(crate) fn cell_triangles(corners: [u32; 4], base: u32) -> [[u32; 3]; 2] {
    let c = |k: usize| base + corners[QUAD_MAP[k]];
    [[c(0), c(1), c(2)], [c(3), c(4), c(5)]]
}
