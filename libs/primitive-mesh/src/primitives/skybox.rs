//! # Skybox Primitives
//!
//! Cube and sphere meant to be seen from the inside. They are the regular
//! generators; the inward-facing winding comes from
//! [`GeneratorSetting::skybox`].

use super::cube::cube;
use super::uv_sphere::uv_sphere;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::settings::GeneratorSetting;

/// Creates a skybox cube.
///
/// The winding comes from `settings` alone. Pass [`GeneratorSetting::skybox`]
/// for clockwise, inward-facing triangles; [`Primitive::SkyboxCube`] does so
/// by default. With [`GeneratorSetting::default`] the result equals [`cube`].
///
/// [`Primitive::SkyboxCube`]: crate::Primitive::SkyboxCube
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use primitive_mesh::{skybox_cube, GeneratorSetting};
///
/// let mesh = skybox_cube(&GeneratorSetting::skybox());
/// // The left face now faces +x, towards the center
/// assert_eq!(mesh.normals()[0], Vec3::X);
/// ```
pub fn skybox_cube(settings: &GeneratorSetting) -> Mesh {
    cube(settings)
}

/// Creates a skybox UV sphere.
///
/// The winding comes from `settings` alone. Pass [`GeneratorSetting::skybox`]
/// for clockwise, inward-facing triangles; [`Primitive::SkyboxSphere`] does
/// so by default. With [`GeneratorSetting::default`] the result equals
/// [`uv_sphere`].
///
/// [`Primitive::SkyboxSphere`]: crate::Primitive::SkyboxSphere
pub fn skybox_sphere(
    rings: u32,
    segments: u32,
    settings: &GeneratorSetting,
) -> Result<Mesh, MeshError> {
    uv_sphere(rings, segments, settings)
}
