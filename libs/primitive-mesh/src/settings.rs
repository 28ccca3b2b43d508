//! # Generator Settings
//!
//! Post-processing options shared by every generator.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Order in which triangle corners are listed when seen from the front face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindingOrder {
    /// Counter-clockwise, the outward-facing default
    #[default]
    Ccw,
    /// Clockwise, used for meshes viewed from the inside (skyboxes)
    Cw,
}

/// Transform and winding applied to a mesh after it is generated.
///
/// Every vertex becomes `rotate(scale ⊙ v, rotation) + offset`; with
/// [`WindingOrder::Cw`] the triangles are reversed and normals negated.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use primitive_mesh::{GeneratorSetting, WindingOrder};
///
/// let settings = GeneratorSetting::default()
///     .with_offset(Vec3::new(0.0, 2.0, 0.0))
///     .with_scale(Vec3::splat(3.0));
/// assert_eq!(settings.winding_order, WindingOrder::Ccw);
/// assert!(!settings.is_identity_transform());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSetting {
    /// Translation applied last
    pub offset: Vec3,
    /// Per-axis scale applied first
    pub scale: Vec3,
    /// Rotation applied after scaling
    pub rotation: Quat,
    /// Winding of the emitted triangles
    pub winding_order: WindingOrder,
}

impl Default for GeneratorSetting {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            winding_order: WindingOrder::Ccw,
        }
    }
}

impl GeneratorSetting {
    /// Default settings for meshes seen from the inside (clockwise winding).
    pub fn skybox() -> Self {
        Self::default().with_winding_order(WindingOrder::Cw)
    }

    /// Returns a copy with the given offset.
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Returns a copy with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with the given winding order.
    pub fn with_winding_order(mut self, winding_order: WindingOrder) -> Self {
        self.winding_order = winding_order;
        self
    }

    /// True when offset, scale and rotation are exactly the defaults.
    ///
    /// Exact comparison: only used to skip the per-vertex transform.
    pub fn is_identity_transform(&self) -> bool {
        self.offset == Vec3::ZERO && self.scale == Vec3::ONE && self.rotation == Quat::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity_ccw() {
        let settings = GeneratorSetting::default();
        assert!(settings.is_identity_transform());
        assert_eq!(settings.winding_order, WindingOrder::Ccw);
    }

    #[test]
    fn test_skybox_is_identity_cw() {
        let settings = GeneratorSetting::skybox();
        assert!(settings.is_identity_transform());
        assert_eq!(settings.winding_order, WindingOrder::Cw);
    }

    #[test]
    fn test_any_change_breaks_identity() {
        let base = GeneratorSetting::default();
        assert!(!base.with_offset(Vec3::X).is_identity_transform());
        assert!(!base.with_scale(Vec3::new(1.0, 1.0, 2.0)).is_identity_transform());
        assert!(!base
            .with_rotation(Quat::from_rotation_y(0.1))
            .is_identity_transform());
        assert!(base
            .with_winding_order(WindingOrder::Cw)
            .is_identity_transform());
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = GeneratorSetting::skybox()
            .with_offset(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Quat::from_rotation_x(0.5));
        let json = serde_json::to_string(&settings).unwrap();
        let back: GeneratorSetting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
