//! # Config Crate
//!
//! Centralized configuration constants for primitive mesh generation.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_POLYGON_SIDES, WELD_EPSILON};
//!
//! // Use WELD_EPSILON for tolerant vertex comparisons
//! let a: f32 = 0.5;
//! let b: f32 = 0.500_002;
//! assert!((a - b).abs() <= WELD_EPSILON);
//!
//! // Use parameter minimums for validation
//! let sides = 8;
//! assert!(sides >= MIN_POLYGON_SIDES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit Primitives**: Every shape is generated at unit size
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
