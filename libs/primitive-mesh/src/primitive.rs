//! # Primitive Descriptors
//!
//! A serializable description of which shape to generate, so shape requests
//! can be stored in data files and turned into meshes later.

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{
    capsule, cube, cylinder, icosphere, plane, polygon, quad, skybox_cube, skybox_sphere,
    uv_sphere,
};
use crate::settings::GeneratorSetting;

/// One of the supported shapes together with its shape parameters.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Primitive;
///
/// let shape = Primitive::UvSphere { rings: 8, segments: 16 };
/// let mesh = shape.generate().unwrap();
/// assert_eq!(mesh.triangle_count(), 256);
/// assert_eq!(shape.name(), "uv_sphere");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Primitive {
    /// Unit quad facing +z
    Quad,
    /// Tiled unit plane facing +y
    Plane {
        /// Cells along x
        width_tiles: u32,
        /// Cells along z
        height_tiles: u32,
    },
    /// Regular polygon facing +z
    Polygon {
        /// Rim vertex count
        sides: u32,
    },
    /// Unit cube with a 6×1 texture strip
    Cube,
    /// Latitude/longitude sphere
    UvSphere {
        /// Latitude rows
        rings: u32,
        /// Longitude columns
        segments: u32,
    },
    /// Subdivided icosahedron
    Icosphere {
        /// Subdivision passes
        subdivisions: u32,
    },
    /// Capped cylinder
    Cylinder {
        /// Segments around the axis
        sides: u32,
    },
    /// Cylinder closed by two hemispheres
    Capsule {
        /// Segments around the axis
        sides: u32,
    },
    /// Cube seen from the inside
    SkyboxCube,
    /// UV sphere seen from the inside
    SkyboxSphere {
        /// Latitude rows
        rings: u32,
        /// Longitude columns
        segments: u32,
    },
}

impl Primitive {
    /// Stable snake_case name of the shape, matching its serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Quad => "quad",
            Primitive::Plane { .. } => "plane",
            Primitive::Polygon { .. } => "polygon",
            Primitive::Cube => "cube",
            Primitive::UvSphere { .. } => "uv_sphere",
            Primitive::Icosphere { .. } => "icosphere",
            Primitive::Cylinder { .. } => "cylinder",
            Primitive::Capsule { .. } => "capsule",
            Primitive::SkyboxCube => "skybox_cube",
            Primitive::SkyboxSphere { .. } => "skybox_sphere",
        }
    }

    /// Settings used by [`Primitive::generate`]: clockwise for skyboxes,
    /// the plain default otherwise.
    pub fn default_settings(&self) -> GeneratorSetting {
        match self {
            Primitive::SkyboxCube | Primitive::SkyboxSphere { .. } => GeneratorSetting::skybox(),
            _ => GeneratorSetting::default(),
        }
    }

    /// Generates the shape with its default settings.
    pub fn generate(&self) -> Result<Mesh, MeshError> {
        self.generate_with(&self.default_settings())
    }

    /// Generates the shape with explicit settings.
    pub fn generate_with(&self, settings: &GeneratorSetting) -> Result<Mesh, MeshError> {
        match *self {
            Primitive::Quad => Ok(quad(settings)),
            Primitive::Plane {
                width_tiles,
                height_tiles,
            } => plane(width_tiles, height_tiles, settings),
            Primitive::Polygon { sides } => polygon(sides, settings),
            Primitive::Cube => Ok(cube(settings)),
            Primitive::UvSphere { rings, segments } => uv_sphere(rings, segments, settings),
            Primitive::Icosphere { subdivisions } => icosphere(subdivisions, settings),
            Primitive::Cylinder { sides } => cylinder(sides, settings),
            Primitive::Capsule { sides } => capsule(sides, settings),
            Primitive::SkyboxCube => Ok(skybox_cube(settings)),
            Primitive::SkyboxSphere { rings, segments } => {
                skybox_sphere(rings, segments, settings)
            }
        }
    }
}
