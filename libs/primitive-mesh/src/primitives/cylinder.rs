//! # Cylinder Primitive
//!
//! Generates a capped unit cylinder along the y axis.
//!
//! Caps and body share one texture atlas: the caps occupy a unit-wide column
//! (top cap in the upper half, bottom cap in the lower half) and the body a
//! `π`-wide column to its right, all scaled by `1/(1+π)`.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use config::constants::{atlas_u_scale, MIN_POLYGON_SIDES, UNIT_HALF_EXTENT};
use glam::{Quat, Vec2, Vec3};

use super::polygon::polygon_fan;
use crate::error::MeshError;
use crate::merge::merge;
use crate::mesh::Mesh;
use crate::process::{finish, process_mesh};
use crate::settings::{GeneratorSetting, WindingOrder};

/// Builds the open tube without caps, normals or post-processing.
///
/// Two rings of `sides + 1` vertices sit at `y = 0.5` (first) and
/// `y = -0.5`; the seam column is duplicated. Each column emits its upper
/// then its lower triangle before the next column starts. U runs from `1` to `1 + π`
/// before the atlas scale, V is 0 on the top ring and 1 on the bottom ring.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::cylinder::cylinder_body;
///
/// let body = cylinder_body(8).unwrap();
/// assert_eq!(body.vertex_count(), 18);
/// assert_eq!(body.triangle_count(), 16);
/// ```
pub fn cylinder_body(sides: u32) -> Result<Mesh, MeshError> {
    MeshError::require_at_least("sides", sides, MIN_POLYGON_SIDES)?;
    MeshError::require_addressable(2 * (u64::from(sides) + 1))?;

    let u_scale = atlas_u_scale();
    let mut mesh = Mesh::with_capacity(2 * (sides as usize + 1), 2 * sides as usize);

    for (y, v) in [(UNIT_HALF_EXTENT, 0.0), (-UNIT_HALF_EXTENT, 1.0)] {
        for j in 0..=sides {
            let fraction = j as f32 / sides as f32;
            let angle = fraction * TAU;
            let u = 1.0 + (1.0 - fraction) * PI;
            mesh.add_vertex(
                Vec3::new(angle.cos() * UNIT_HALF_EXTENT, y, angle.sin() * UNIT_HALF_EXTENT),
                Vec2::new(u * u_scale, v),
            );
        }
    }

    let bottom = sides + 1;
    for j in 0..sides {
        mesh.add_triangle(j, j + 1, bottom + j);
        mesh.add_triangle(bottom + j, j + 1, bottom + j + 1);
    }

    Ok(mesh)
}

/// Builds one cap: a polygon fan turned to face up (top) or down (bottom)
/// and moved to the matching end of the body. Normals are left to the
/// merged cylinder.
fn cap(sides: u32, top: bool) -> Result<Mesh, MeshError> {
    let (y, winding_order) = if top {
        (UNIT_HALF_EXTENT, WindingOrder::Ccw)
    } else {
        (-UNIT_HALF_EXTENT, WindingOrder::Cw)
    };
    let settings = GeneratorSetting::default()
        .with_offset(Vec3::new(0.0, y, 0.0))
        .with_rotation(Quat::from_rotation_x(-FRAC_PI_2))
        .with_winding_order(winding_order);

    let mut mesh = process_mesh(polygon_fan(sides)?, &settings);

    let u_scale = atlas_u_scale();
    let v_offset = if top { 0.0 } else { 0.5 };
    for uv in mesh.uvs_mut() {
        uv.x *= u_scale;
        uv.y = uv.y * 0.5 + v_offset;
    }
    Ok(mesh)
}

/// Creates a capped cylinder of radius 0.5 and height 1.
///
/// The parts are merged as bottom cap, top cap, body; seams are not welded.
///
/// # Returns
///
/// A mesh with `4·(sides + 1)` vertices and `4·sides` triangles.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{cylinder, GeneratorSetting};
///
/// let mesh = cylinder(16, &GeneratorSetting::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 68);
/// assert_eq!(mesh.triangle_count(), 64);
/// ```
pub fn cylinder(sides: u32, settings: &GeneratorSetting) -> Result<Mesh, MeshError> {
    let body = cylinder_body(sides)?;
    let top = cap(sides, true)?;
    let bottom = cap(sides, false)?;

    let mesh = merge([&bottom, &top, &body]);

    log::debug!(
        "cylinder with {sides} sides: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(finish(mesh, settings))
}
