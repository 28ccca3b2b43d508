//! Fixed vertex, index and texture tables for the table-driven primitives.
//!
//! Positions are listed as `[x, y, z]` with unit extent 1. Texture tables use
//! integer atlas columns that the generators divide into `[0, 1]`.

/// Quad corners, counter-clockwise facing +z.
pub(crate) const QUAD_VERTICES: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
    [0.5, -0.5, 0.0],
];

/// Two triangles over [`QUAD_VERTICES`]. Every cube face reuses this pattern.
pub(crate) const QUAD_INDICES: [u32; 6] = [0, 1, 2, 3, 1, 0];

pub(crate) const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 0.0], [0.0, 0.0], [1.0, 1.0]];

/// Triangulation of a grid cell whose corners are ordered
/// `[(i, j), (i, j + 1), (i + 1, j), (i + 1, j + 1)]`.
pub(crate) const QUAD_MAP: [usize; 6] = [2, 1, 0, 2, 3, 1];

/// Cube faces in atlas order: Left, Front, Right, Back, Top, Bottom.
///
/// Each face lists its corners in the same roles as [`QUAD_VERTICES`] so the
/// shared [`QUAD_INDICES`] pattern faces outward.
pub(crate) const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    // Left (-x)
    [
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
    ],
    // Front (+z)
    [
        [-0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [0.5, -0.5, 0.5],
    ],
    // Right (+x)
    [
        [0.5, -0.5, 0.5],
        [0.5, 0.5, -0.5],
        [0.5, 0.5, 0.5],
        [0.5, -0.5, -0.5],
    ],
    // Back (-z)
    [
        [0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, -0.5, -0.5],
    ],
    // Top (+y)
    [
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, 0.5, 0.5],
    ],
    // Bottom (-y)
    [
        [0.5, -0.5, 0.5],
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [-0.5, -0.5, 0.5],
    ],
];

/// Cube texture strip, in atlas columns before division by the face count.
///
/// The bottom face is mirrored compared to the others.
pub(crate) const CUBE_UVS: [[[f32; 2]; 4]; 6] = [
    [[0.0, 1.0], [1.0, 0.0], [0.0, 0.0], [1.0, 1.0]],
    [[1.0, 1.0], [2.0, 0.0], [1.0, 0.0], [2.0, 1.0]],
    [[2.0, 1.0], [3.0, 0.0], [2.0, 0.0], [3.0, 1.0]],
    [[3.0, 1.0], [4.0, 0.0], [3.0, 0.0], [4.0, 1.0]],
    [[4.0, 1.0], [5.0, 0.0], [4.0, 0.0], [5.0, 1.0]],
    [[6.0, 0.0], [5.0, 1.0], [6.0, 1.0], [5.0, 0.0]],
];

/// Base icosahedron triangles over the 22 texture-split vertices.
///
/// Vertices 0..5 are the north pole copies, 5..11 the upper ring, 11..17 the
/// lower ring and 17..22 the south pole copies.
pub(crate) const ICOSPHERE_INDICES: [[u32; 3]; 20] = [
    [6, 5, 0],
    [7, 6, 1],
    [8, 7, 2],
    [9, 8, 3],
    [10, 9, 4],
    [12, 11, 5],
    [5, 6, 12],
    [13, 12, 6],
    [6, 7, 13],
    [14, 13, 7],
    [7, 8, 14],
    [15, 14, 8],
    [8, 9, 15],
    [16, 15, 9],
    [9, 10, 16],
    [11, 12, 17],
    [12, 13, 18],
    [13, 14, 19],
    [14, 15, 20],
    [15, 16, 21],
];

/// U column of the icosphere base texture, in thirtieths.
pub(crate) const ICOSPHERE_U: [f32; 22] = [
    3.0, 9.0, 15.0, 21.0, 27.0, // north poles
    0.0, 6.0, 12.0, 18.0, 24.0, 30.0, // upper ring
    -3.0, 3.0, 9.0, 15.0, 21.0, 27.0, // lower ring
    6.0, 12.0, 18.0, 24.0, 30.0, // south poles
];

/// V row of the icosphere base texture.
pub(crate) const ICOSPHERE_V: [f32; 22] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    1.0 / 3.0,
    1.0 / 3.0,
    1.0 / 3.0,
    1.0 / 3.0,
    1.0 / 3.0,
    1.0 / 3.0,
    2.0 / 3.0,
    2.0 / 3.0,
    2.0 / 3.0,
    2.0 / 3.0,
    2.0 / 3.0,
    2.0 / 3.0,
    1.0,
    1.0,
    1.0,
    1.0,
    1.0,
];

/// Children of one subdivided triangle over its six local points
/// `[v1, mid(v1, v2), mid(v1, v3), v2, mid(v2, v3), v3]`.
pub(crate) const SUBDIVISION_REMAP: [usize; 12] = [0, 1, 2, 1, 3, 4, 2, 4, 5, 2, 1, 4];
