//! isosmooth-filter - Curvature-flow smoothing of 2D scalar fields
//!
//! This crate provides:
//!
//! - [`SmoothingAdapter`] and the [`smooth`] family - convert an `ndarray`
//!   field to an image, run curvature flow, convert back
//! - [`CurvatureFlowEngine`] - the engine interface the adapter calls
//! - [`CurvatureFlow`] - the native engine (feature `curvature-flow`, on by default)
//! - [`Capability`] - process-wide record of whether an engine is available
//!
//! If no engine can be acquired, a notice is printed once and every
//! smoothing call returns [`FilterError::CapabilityUnavailable`].

pub mod adapter;
pub mod capability;
#[cfg(feature = "curvature-flow")]
pub mod curvature_flow;
pub mod engine;
mod error;

pub use error::{FilterError, FilterResult};

pub use adapter::{SmoothingAdapter, smooth, smooth_dyn, smooth_iterations};
pub use capability::Capability;
#[cfg(feature = "curvature-flow")]
pub use curvature_flow::CurvatureFlow;
pub use engine::{CurvatureFlowEngine, CurvatureFlowParams, DEFAULT_ITERATIONS, DEFAULT_TIME_STEP};
