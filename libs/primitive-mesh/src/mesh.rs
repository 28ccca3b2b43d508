//! # Mesh Data Structure
//!
//! Core mesh representation: positions, triangles, normals and texture
//! coordinates stored as parallel buffers.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::normals::calculate_normals;

/// A triangle mesh with per-vertex normals and texture coordinates.
///
/// Positions, normals and UVs are parallel buffers indexed by vertex.
/// Triangles are counter-clockwise when seen from the outside unless a
/// generator was asked for clockwise winding. UV `(0, 0)` is the bottom-left
/// corner of the texture.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Mesh;
/// use glam::{Vec2, Vec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0));
/// mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::new(1.0, 0.0));
/// mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0), Vec2::new(0.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
/// mesh.compute_normals();
/// assert_eq!(mesh.normals()[0], Vec3::Z);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    positions: Vec<Vec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Vertex normals, empty until computed
    normals: Vec<Vec3>,
    /// Vertex texture coordinates
    uvs: Vec<Vec2>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: Vec::new(),
            uvs: Vec::with_capacity(vertex_count),
        }
    }

    /// Builds a mesh from flat buffers (`xyz` positions, index triples,
    /// `xyz` normals, `uv` pairs).
    ///
    /// An empty `normals` buffer is accepted and leaves normals uncomputed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_mesh::Mesh;
    ///
    /// let mesh = Mesh::from_buffers(
    ///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    ///     &[0, 1, 2],
    ///     &[],
    ///     &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    /// )
    /// .unwrap();
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.triangle_count(), 1);
    /// ```
    pub fn from_buffers(
        vertices: &[f32],
        indices: &[u32],
        normals: &[f32],
        uvs: &[f32],
    ) -> Result<Self, MeshError> {
        if vertices.len() % 3 != 0 {
            return Err(MeshError::BufferMismatch {
                buffer: "vertices",
                expected: vertices.len() / 3 * 3,
                actual: vertices.len(),
            });
        }
        let vertex_count = vertices.len() / 3;

        if indices.len() % 3 != 0 {
            return Err(MeshError::BufferMismatch {
                buffer: "indices",
                expected: indices.len() / 3 * 3,
                actual: indices.len(),
            });
        }
        if !normals.is_empty() && normals.len() != vertex_count * 3 {
            return Err(MeshError::BufferMismatch {
                buffer: "normals",
                expected: vertex_count * 3,
                actual: normals.len(),
            });
        }
        if uvs.len() != vertex_count * 2 {
            return Err(MeshError::BufferMismatch {
                buffer: "uvs",
                expected: vertex_count * 2,
                actual: uvs.len(),
            });
        }

        let mesh = Self {
            positions: vertices
                .chunks_exact(3)
                .map(|v| Vec3::new(v[0], v[1], v[2]))
                .collect(),
            triangles: indices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect(),
            normals: normals
                .chunks_exact(3)
                .map(|n| Vec3::new(n[0], n[1], n[2]))
                .collect(),
            uvs: uvs.chunks_exact(2).map(|t| Vec2::new(t[0], t[1])).collect(),
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex with its texture coordinate and returns its index.
    pub fn add_vertex(&mut self, position: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the triangle indices as a flat `[i0, i1, i2, ...]` slice.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        self.triangles.as_flattened()
    }

    /// Returns the vertex normals (empty until computed).
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Returns the position of the given vertex.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Mesh::vertex_count`].
    #[inline]
    pub fn vertex(&self, index: u32) -> Vec3 {
        self.positions[index as usize]
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub(crate) fn uvs_mut(&mut self) -> &mut [Vec2] {
        &mut self.uvs
    }

    /// Sets vertex normals.
    pub fn set_normals(&mut self, normals: Vec<Vec3>) {
        self.normals = normals;
    }

    /// Computes flat normals from the current positions and triangles.
    ///
    /// See [`calculate_normals`] for how shared vertices are resolved.
    ///
    /// # Panics
    ///
    /// Panics if a triangle references a missing vertex, which only happens
    /// after [`Mesh::add_triangle`] was given a bad index. [`Mesh::validate`]
    /// reports that case as an error.
    pub fn compute_normals(&mut self) {
        self.normals = calculate_normals(&self.positions, &self.triangles);
    }

    /// Reverses every triangle (first and last index swapped) and negates
    /// every normal.
    ///
    /// Applying it twice restores the mesh.
    pub fn flip_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(0, 2);
        }
        for normal in &mut self.normals {
            *normal = -*normal;
        }
    }

    /// Appends another mesh, offsetting its indices by the current vertex
    /// count. Shared seams stay duplicated.
    pub fn append(&mut self, other: &Mesh) {
        let offset = self.positions.len() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);

        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the buffer invariants.
    ///
    /// Checks:
    /// - UVs (and normals, once computed) match the vertex count
    /// - All triangle indices are in range
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.positions.len();

        if self.uvs.len() != vertex_count {
            return Err(MeshError::invalid_topology(format!(
                "{} texture coordinates for {} vertices",
                self.uvs.len(),
                vertex_count
            )));
        }

        if !self.normals.is_empty() && self.normals.len() != vertex_count {
            return Err(MeshError::invalid_topology(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                vertex_count
            )));
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(bad) = tri.iter().find(|&&index| index as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {i} references vertex {bad} of {vertex_count}"
                )));
            }
        }

        Ok(())
    }

    /// Exports positions as a flattened `[x, y, z, x, y, z, ...]` array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports triangle indices as a flattened `[i0, i1, i2, ...]` array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices().to_vec()
    }

    /// Exports normals as a flattened `[nx, ny, nz, ...]` array.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Exports texture coordinates as a flattened `[u, v, u, v, ...]` array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs.iter().flat_map(|t| t.to_array()).collect()
    }
}
