//! # Configuration Constants
//!
//! Centralized constants for primitive mesh generation. Tolerances, unit
//! dimensions, parameter minimums and texture atlas factors are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Dimensions**: Size of the unit primitives
//! - **Parameters**: Minimum values accepted by the generators
//! - **Limits**: Maximum values for safety bounds
//! - **Texture Layout**: Atlas and strip factors

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for vertex welding during icosphere subdivision.
///
/// Two candidate vertices whose position and texture coordinates all differ
/// by no more than this value on every component are emitted once.
///
/// # Example
///
/// ```rust
/// use config::constants::WELD_EPSILON;
///
/// fn same_component(a: f32, b: f32) -> bool {
///     (a - b).abs() <= WELD_EPSILON
/// }
///
/// assert!(same_component(0.5, 0.500_001));
/// assert!(!same_component(0.5, 0.51));
/// ```
pub const WELD_EPSILON: f32 = 1e-5;

/// Tolerance used by tests and helpers to compare normal lengths against 1.0.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_LENGTH_TOLERANCE;
///
/// let length: f32 = 0.999_999;
/// assert!((length - 1.0).abs() <= NORMAL_LENGTH_TOLERANCE);
/// ```
pub const NORMAL_LENGTH_TOLERANCE: f32 = 1e-5;

// =============================================================================
// DIMENSION CONSTANTS
// =============================================================================

/// Half of the side length of every unit primitive.
///
/// All generators build shapes that fit in the `[-0.5, 0.5]` cube (the capsule
/// is the exception: its caps reach `±1.0` along y). Spheres have this radius.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_HALF_EXTENT;
///
/// let diameter = UNIT_HALF_EXTENT * 2.0;
/// assert_eq!(diameter, 1.0);
/// ```
pub const UNIT_HALF_EXTENT: f32 = 0.5;

// =============================================================================
// PARAMETER CONSTANTS
// =============================================================================

/// Minimum number of sides for polygons, cylinders and capsules.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Minimum number of tiles along either axis of a plane.
pub const MIN_GRID_TILES: u32 = 1;

/// Minimum number of latitude rings of a UV sphere.
pub const MIN_SPHERE_RINGS: u32 = 1;

/// Minimum number of longitude segments of a UV sphere.
pub const MIN_SPHERE_SEGMENTS: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Indices are stored as `u32`, so any mesh with more vertices than this
/// cannot be addressed.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count: u64 = 10 * 4u64.pow(8) + 2;
/// assert!(vertex_count < MAX_VERTICES as u64);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// TEXTURE LAYOUT CONSTANTS
// =============================================================================

/// Number of faces laid out side by side in the cube texture strip.
///
/// Faces appear in the order Left, Front, Right, Back, Top, Bottom.
pub const CUBE_STRIP_FACES: f32 = 6.0;

/// Divisor applied to the U column of the icosphere base texture table.
pub const ICOSPHERE_U_DIVISOR: f32 = 30.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Horizontal scale of the cylinder/capsule texture atlas.
///
/// Caps and hemispheres occupy a unit-wide column and the body a `π`-wide
/// column; dividing by `1 + π` maps the joint atlas to `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use config::constants::atlas_u_scale;
///
/// let scale = atlas_u_scale();
/// assert!((scale * (1.0 + std::f32::consts::PI) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn atlas_u_scale() -> f32 {
    1.0 / (1.0 + std::f32::consts::PI)
}

/// Checks if two f32 values are equal within [`WELD_EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-6));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= WELD_EPSILON
}

/// Checks if a vector length is either unit (within
/// [`NORMAL_LENGTH_TOLERANCE`]) or exactly zero.
///
/// # Example
///
/// ```rust
/// use config::constants::is_unit_or_zero;
///
/// assert!(is_unit_or_zero(1.0));
/// assert!(is_unit_or_zero(0.0));
/// assert!(!is_unit_or_zero(0.5));
/// ```
#[inline]
pub fn is_unit_or_zero(length: f32) -> bool {
    length == 0.0 || (length - 1.0).abs() <= NORMAL_LENGTH_TOLERANCE
}
