//! # Flat Normals
//!
//! Per-triangle normal computation scattered to the triangle's vertices.

use glam::Vec3;

/// Computes one flat normal per triangle and writes it to all three vertices.
///
/// The face normal is `normalize((v2 - v1) × (v3 - v1))`; a zero-length cross
/// product leaves the zero vector. Normals are not averaged: when a vertex is
/// shared by several triangles it keeps the normal of the last one processed.
/// Generators that want hard edges duplicate their vertices per face.
///
/// The cross product is evaluated in `f64` so that nearly degenerate
/// triangles (e.g. at sphere poles) still normalize to unit length.
///
/// # Panics
///
/// Panics if a triangle references a vertex outside `positions`. Meshes built
/// by hand can be checked with [`Mesh::validate`] first.
///
/// [`Mesh::validate`]: crate::Mesh::validate
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use primitive_mesh::normals::calculate_normals;
///
/// let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// let normals = calculate_normals(&positions, &[[0, 1, 2]]);
/// assert_eq!(normals, vec![Vec3::Z; 3]);
/// ```
pub fn calculate_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in triangles {
        let v1 = positions[tri[0] as usize].as_dvec3();
        let v2 = positions[tri[1] as usize].as_dvec3();
        let v3 = positions[tri[2] as usize].as_dvec3();

        let normal = (v2 - v1).cross(v3 - v1).normalize_or_zero().as_vec3();

        for &index in tri {
            normals[index as usize] = normal;
        }
    }

    normals
}
