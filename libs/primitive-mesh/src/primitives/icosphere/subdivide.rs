//! Midpoint subdivision with tolerance welding.

use config::constants::UNIT_HALF_EXTENT;
use glam::{Vec2, Vec3};

use crate::mesh::Mesh;
use crate::tables::SUBDIVISION_REMAP;
use crate::weld::{weld_key, VertexWelder};

/// Subdivides every triangle of `mesh` into four, `iterations` times.
///
/// Edge midpoints are pushed back onto the sphere of radius 0.5 and take the
/// mean of their endpoints' UVs. Each pass welds its output through a
/// [`VertexWelder`], so a midpoint shared by two neighbouring triangles is
/// emitted once. Every pass builds fresh buffers; normals are left empty.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::icosphere::{icosphere_base, subdivide};
///
/// let mesh = subdivide(icosphere_base(), 1);
/// assert_eq!(mesh.triangle_count(), 80);
/// assert!(mesh.normals().is_empty());
/// ```
pub fn subdivide(mesh: Mesh, iterations: u32) -> Mesh {
    let mut current = mesh;
    for iteration in 0..iterations {
        let next = subdivide_once(&current);
        log::trace!(
            "subdivision {}: {} triangles in, {} vertices out",
            iteration + 1,
            current.triangle_count(),
            next.vertex_count()
        );
        current = next;
    }
    current
}

fn subdivide_once(mesh: &Mesh) -> Mesh {
    let mut welder = VertexWelder::new();
    let mut out = Mesh::with_capacity(mesh.vertex_count() * 4, mesh.triangle_count() * 4);

    for &[i1, i2, i3] in mesh.triangles() {
        let v1 = corner(mesh, i1);
        let v2 = corner(mesh, i2);
        let v3 = corner(mesh, i3);

        let points = [v1, half(v1, v2), half(v1, v3), v2, half(v2, v3), v3];
        let indices = points.map(|(position, uv)| {
            let (index, inserted) = welder.insert(weld_key(position, uv));
            if inserted {
                out.add_vertex(position, uv);
            }
            index
        });

        for child in SUBDIVISION_REMAP.chunks_exact(3) {
            out.add_triangle(indices[child[0]], indices[child[1]], indices[child[2]]);
        }
    }

    out
}

fn corner(mesh: &Mesh, index: u32) -> (Vec3, Vec2) {
    (mesh.vertex(index), mesh.uvs()[index as usize])
}

/// Edge midpoint projected onto the sphere, with the linear UV midpoint.
fn half(a: (Vec3, Vec2), b: (Vec3, Vec2)) -> (Vec3, Vec2) {
    let sum = a.0 + b.0;
    let position = sum * (UNIT_HALF_EXTENT / sum.length());
    (position, (a.1 + b.1) * 0.5)
}
