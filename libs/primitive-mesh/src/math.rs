//! Thin layer over `glam` shared by the generators.
//!
//! Vectors and quaternions are plain `glam` types. Rotation goes through the
//! sandwich product `q * (v, 0) * conjugate(q)` so that quaternions that are
//! not exactly unit length behave the same way on every code path.

pub use glam::{Quat, Vec2, Vec3};

/// Builds the pure quaternion `(v, 0)`.
#[inline]
pub fn pure_quat(v: Vec3) -> Quat {
    Quat::from_xyzw(v.x, v.y, v.z, 0.0)
}

/// Rotates `v` by `rotation` using `rotation * (v, 0) * conjugate(rotation)`.
///
/// # Examples
/// ```
/// use primitive_mesh::math::{rotate_vector, Quat, Vec3};
///
/// let quarter_turn = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
/// let v = rotate_vector(quarter_turn, Vec3::X);
/// assert!((v - Vec3::NEG_Z).length() < 1e-6);
/// ```
#[inline]
pub fn rotate_vector(rotation: Quat, v: Vec3) -> Vec3 {
    let rotated = rotation * pure_quat(v) * rotation.conjugate();
    rotated.xyz()
}

/// Applies scale, then rotation, then translation to a single position.
#[inline]
pub fn scale_rotate_translate(v: Vec3, scale: Vec3, rotation: Quat, offset: Vec3) -> Vec3 {
    rotate_vector(rotation, v * scale) + offset
}
