//! # Mesh Merging
//!
//! Concatenation of meshes into a single globally indexed mesh.

use crate::mesh::Mesh;

/// Merges meshes in order into one mesh.
///
/// Buffers are concatenated; the indices of the k-th mesh are offset by the
/// total vertex count of the meshes before it. No vertices are welded, so
/// seams between parts stay duplicated.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{merge, quad, GeneratorSetting};
///
/// let a = quad(&GeneratorSetting::default());
/// let b = quad(&GeneratorSetting::default());
/// let merged = merge([&a, &b]);
/// assert_eq!(merged.vertex_count(), 8);
/// assert_eq!(merged.triangles()[2], [4, 5, 6]);
/// ```
pub fn merge<'a, I>(meshes: I) -> Mesh
where
    I: IntoIterator<Item = &'a Mesh>,
{
    let meshes: Vec<&Mesh> = meshes.into_iter().collect();
    let vertex_count = meshes.iter().map(|m| m.vertex_count()).sum();
    let triangle_count = meshes.iter().map(|m| m.triangle_count()).sum();

    let mut merged = Mesh::with_capacity(vertex_count, triangle_count);
    for mesh in meshes {
        merged.append(mesh);
    }
    merged
}
