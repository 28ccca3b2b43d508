//! # Icosphere Primitive
//!
//! Sphere built by recursively subdividing an icosahedron and projecting the
//! new vertices onto the sphere of radius 0.5.
//!
//! ## Vertex count
//!
//! Positions follow Euler's formula, `10·4^N + 2` distinct points after `N`
//! subdivisions. The emitted vertex count is higher because vertices on the
//! texture seam and at the poles are split by UV: `10·4^N + 11·2^N + 1`.

mod base;
mod subdivide;

#[cfg(test)]
mod tests;

pub use base::{icosphere_base, BASE_TRIANGLE_COUNT, BASE_VERTEX_COUNT};
pub use subdivide::subdivide;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::process::finish;
use crate::settings::GeneratorSetting;

/// Number of vertices emitted after `subdivisions` passes, saturating at
/// `u64::MAX`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::icosphere::icosphere_vertex_count;
///
/// assert_eq!(icosphere_vertex_count(0), 22);
/// assert_eq!(icosphere_vertex_count(2), 205);
/// ```
pub fn icosphere_vertex_count(subdivisions: u32) -> u64 {
    let count = 4u64.checked_pow(subdivisions).and_then(|faces| {
        let seams = 2u64.checked_pow(subdivisions)?;
        faces.checked_mul(10)?.checked_add(seams.checked_mul(11)?)?.checked_add(1)
    });
    count.unwrap_or(u64::MAX)
}

/// Creates an icosphere of radius 0.5.
///
/// # Arguments
///
/// * `subdivisions` - Number of subdivision passes; 0 yields the base
///   icosahedron
/// * `settings` - Post-processing settings
///
/// # Returns
///
/// A mesh with `20·4^subdivisions` triangles, or
/// [`MeshError::TooManyVertices`] when the result cannot be indexed with
/// `u32`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{icosphere, GeneratorSetting};
///
/// let mesh = icosphere(2, &GeneratorSetting::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), 320);
/// ```
pub fn icosphere(subdivisions: u32, settings: &GeneratorSetting) -> Result<Mesh, MeshError> {
    MeshError::require_addressable(icosphere_vertex_count(subdivisions))?;

    let mesh = subdivide(icosphere_base(), subdivisions);

    log::debug!(
        "icosphere with {subdivisions} subdivisions: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(finish(mesh, settings))
}
