//! Error types for isosmooth-filter

use thiserror::Error;

/// Errors that can occur during smoothing
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] isosmooth_core::Error),

    /// No curvature-flow engine could be acquired
    #[error("curvature flow capability unavailable: {reason}")]
    CapabilityUnavailable {
        /// Why acquisition failed
        reason: String,
    },

    /// Input is not two-dimensional
    #[error("expected a 2-dimensional field, got {ndim} dimension(s)")]
    ShapeError {
        /// Number of dimensions of the rejected input
        ndim: usize,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Failure reported by an engine
    #[error("{engine} engine error: {message}")]
    Engine {
        /// Engine name
        engine: String,
        /// Engine-provided description
        message: String,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
