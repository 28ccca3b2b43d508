//! # Mesh Errors
//!
//! Error types for primitive mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A count parameter is below the minimum the generator accepts
    #[error("Invalid argument: {parameter} = {value} (minimum: {minimum})")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value that was passed
        value: u32,
        /// Smallest accepted value
        minimum: u32,
    },

    /// Too many vertices for 32-bit indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of vertices the request would produce
        count: u64,
        /// Largest addressable vertex count
        max: u64,
    },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the broken invariant
        message: String,
    },

    /// Flat input buffer does not match the vertex count
    #[error("Buffer mismatch: {buffer} has {actual} elements, expected {expected}")]
    BufferMismatch {
        /// Name of the buffer
        buffer: &'static str,
        /// Expected number of scalar elements
        expected: usize,
        /// Actual number of scalar elements
        actual: usize,
    },
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Checks `value >= minimum`, logging and returning
    /// [`MeshError::InvalidArgument`] otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_mesh::MeshError;
    ///
    /// assert!(MeshError::require_at_least("sides", 4, 3).is_ok());
    /// assert!(MeshError::require_at_least("sides", 2, 3).is_err());
    /// ```
    pub fn require_at_least(parameter: &'static str, value: u32, minimum: u32) -> Result<(), Self> {
        if value < minimum {
            log::warn!("rejecting {parameter} = {value}, minimum is {minimum}");
            return Err(Self::InvalidArgument {
                parameter,
                value,
                minimum,
            });
        }
        Ok(())
    }

    /// Checks that `count` vertices can be addressed by `u32` indices.
    pub fn require_addressable(count: u64) -> Result<(), Self> {
        let max = config::constants::MAX_VERTICES as u64;
        if count > max {
            log::warn!("rejecting mesh with {count} vertices, maximum is {max}");
            return Err(Self::TooManyVertices { count, max });
        }
        Ok(())
    }
}
