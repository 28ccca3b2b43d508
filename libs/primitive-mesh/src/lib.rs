//! # Primitive Mesh
//!
//! Procedural generation of CPU-side triangle meshes for canonical shapes.
//! Every generator returns positions, triangle indices, flat normals and
//! texture coordinates, ready to upload to any rendering backend.
//!
//! ## Architecture
//!
//! ```text
//! parametric generators ─┐
//! constant tables ───────┼→ merge (composites) → flat normals → process → Mesh
//! icosphere subdivision ─┘
//! ```
//!
//! ## Shapes
//!
//! All shapes are unit sized and centered at the origin:
//! - **Flat**: [`quad`], [`plane`], [`polygon`]
//! - **Solid**: [`cube`], [`uv_sphere`], [`icosphere`], [`cylinder`], [`capsule`]
//! - **Interior**: [`skybox_cube`], [`skybox_sphere`]
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use primitive_mesh::{icosphere, GeneratorSetting};
//!
//! let settings = GeneratorSetting::default()
//!     .with_offset(Vec3::new(0.0, 1.0, 0.0))
//!     .with_scale(Vec3::splat(2.0));
//! let mesh = icosphere(1, &settings).unwrap();
//! assert_eq!(mesh.triangle_count(), 80);
//! ```

pub mod error;
pub mod math;
pub mod merge;
pub mod mesh;
pub mod normals;
pub mod primitive;
pub mod primitives;
pub mod process;
pub mod settings;
pub mod weld;

mod tables;

pub use error::MeshError;
pub use merge::merge;
pub use mesh::Mesh;
pub use primitive::Primitive;
pub use primitives::{
    capsule, cube, cylinder, icosphere, plane, polygon, quad, skybox_cube, skybox_sphere,
    uv_sphere,
};
pub use settings::{GeneratorSetting, WindingOrder};
