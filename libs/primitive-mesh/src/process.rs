//! Transform stage applied to every generated mesh.
//!
//! Normals must already be computed on the counter-clockwise geometry: this
//! stage moves positions and, for clockwise output, reverses the triangles
//! and negates the normals together.

use crate::math::scale_rotate_translate;
use crate::mesh::Mesh;
use crate::settings::{GeneratorSetting, WindingOrder};

/// Applies `settings` to `mesh` and returns it.
///
/// 1. Every position becomes `rotate(scale ⊙ v, rotation) + offset`, skipped
///    entirely when the transform is exactly the identity.
/// 2. With [`WindingOrder::Cw`], every triangle has its first and last index
///    swapped and every normal is negated.
///
/// Normals are not rotated; they describe the generated orientation.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use primitive_mesh::{process::process_mesh, quad, GeneratorSetting};
///
/// let mesh = quad(&GeneratorSetting::default());
/// let moved = process_mesh(mesh, &GeneratorSetting::default().with_offset(Vec3::X));
/// let (min, max) = moved.bounding_box();
/// assert_eq!(min.x, 0.5);
/// assert_eq!(max.x, 1.5);
/// ```
pub fn process_mesh(mut mesh: Mesh, settings: &GeneratorSetting) -> Mesh {
    if settings.is_identity_transform() {
        log::trace!("identity transform, positions left untouched");
    } else {
        for position in mesh.positions_mut() {
            *position = scale_rotate_translate(
                *position,
                settings.scale,
                settings.rotation,
                settings.offset,
            );
        }
    }

    if settings.winding_order == WindingOrder::Cw {
        mesh.flip_winding();
    }

    mesh
}

/// Computes normals on the counter-clockwise geometry, then applies
/// `settings`. This is the tail of every public generator.
pub(crate) fn finish(mut mesh: Mesh, settings: &GeneratorSetting) -> Mesh {
    mesh.compute_normals();
    process_mesh(mesh, settings)
}
