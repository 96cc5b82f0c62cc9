//! Error types for isosmooth-core
//!
//! Provides a unified error type for image construction, pixel access and
//! the array/image conversion boundary.

use thiserror::Error;

/// isosmooth-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Array shape does not match the image
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for isosmooth-core operations
pub type Result<T> = std::result::Result<T, Error>;
