//! isosmooth - Curvature-flow smoothing for 2D scalar fields
//!
//! Smooths fields such as meteorological imagery by reducing the curvature
//! of their isolines, which removes noise while keeping sharp gradients.
//!
//! # Example
//!
//! ```
//! use isosmooth::{FilterError, smooth_iterations};
//! use ndarray::Array2;
//!
//! let mut field = Array2::<f64>::zeros((3, 5));
//! field[[1, 2]] = 10.0;
//!
//! match smooth_iterations(field.view(), 1) {
//!     Ok(smoothed) => {
//!         assert_eq!(smoothed.dim(), (3, 5));
//!         assert!(smoothed[[1, 2]] < 10.0);
//!     }
//!     Err(err) => assert!(matches!(err, FilterError::CapabilityUnavailable { .. })),
//! }
//! ```
//!
//! # Features
//!
//! - `curvature-flow` (default): the native curvature-flow engine. Without
//!   it, smoothing calls return `FilterError::CapabilityUnavailable`.

// Re-export core types (field image, sample types, errors)
pub use isosmooth_core::*;

// Re-export the filter crate as a module and its entry points at the root
pub use isosmooth_filter as filter;
pub use isosmooth_filter::{
    Capability, CurvatureFlowEngine, CurvatureFlowParams, DEFAULT_ITERATIONS, FilterError,
    FilterResult, SmoothingAdapter, smooth, smooth_dyn, smooth_iterations,
};

// Re-export ndarray so callers build fields against the same version
pub use ndarray;
