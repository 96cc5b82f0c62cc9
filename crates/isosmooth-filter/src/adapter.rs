//! Field smoothing adapter
//!
//! Bridges plain `ndarray` fields and a curvature-flow engine: the field is
//! converted into a [`FieldImage`], smoothed by the engine of a
//! [`Capability`], and converted back with the original shape and sample
//! type. The input is only borrowed and stays usable after the call.
//!
//! # Example
//!
//! ```
//! use isosmooth_filter::{FilterError, smooth};
//! use ndarray::Array2;
//!
//! let field = Array2::<f64>::from_elem((4, 4), 1.0);
//! match smooth(field.view()) {
//!     Ok(smoothed) => assert_eq!(smoothed, field),
//!     // Built without `curvature-flow`, or disabled via the environment
//!     Err(err) => assert!(matches!(err, FilterError::CapabilityUnavailable { .. })),
//! }
//! ```

use crate::capability::{self, Capability};
use crate::engine::CurvatureFlowParams;
use crate::{FilterError, FilterResult};
use isosmooth_core::{FieldImage, Sample};
use ndarray::{Array2, ArrayView2, ArrayViewD, Ix2};

/// Smooths fields with the engine held by a [`Capability`]
#[derive(Debug, Clone, Copy)]
pub struct SmoothingAdapter<'a> {
    capability: &'a Capability,
}

impl SmoothingAdapter<'static> {
    /// Adapter over the process-wide capability
    pub fn global() -> Self {
        Self::new(capability::global())
    }
}

impl<'a> SmoothingAdapter<'a> {
    pub fn new(capability: &'a Capability) -> Self {
        Self { capability }
    }

    /// Smooth with the default iteration count (5).
    pub fn smooth<T: Sample>(&self, field: ArrayView2<'_, T>) -> FilterResult<Array2<T>> {
        self.smooth_with(field, &CurvatureFlowParams::default())
    }

    /// Smooth with `iterations` curvature-flow iterations.
    pub fn smooth_iterations<T: Sample>(
        &self,
        field: ArrayView2<'_, T>,
        iterations: u32,
    ) -> FilterResult<Array2<T>> {
        self.smooth_with(field, &CurvatureFlowParams::with_iterations(iterations))
    }

    /// Smooth with a full parameter set.
    ///
    /// # Errors
    ///
    /// - `FilterError::CapabilityUnavailable` if no engine was acquired
    /// - `FilterError::Core` for an empty field or a wrongly sized engine result
    /// - any error the engine reports, unchanged
    pub fn smooth_with<T: Sample>(
        &self,
        field: ArrayView2<'_, T>,
        params: &CurvatureFlowParams,
    ) -> FilterResult<Array2<T>> {
        let engine = self.capability.engine()?;

        let shape = field.dim();
        let image = FieldImage::from_array(field)?;
        let smoothed = engine.curvature_flow(&image, params)?;

        Ok(smoothed.into_array_shaped(shape)?)
    }

    /// Smooth a field of dynamic dimensionality.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::ShapeError` unless `field` is 2-dimensional;
    /// otherwise behaves like [`Self::smooth_iterations`].
    pub fn smooth_dyn<T: Sample>(
        &self,
        field: ArrayViewD<'_, T>,
        iterations: u32,
    ) -> FilterResult<Array2<T>> {
        let ndim = field.ndim();
        let field = field
            .into_dimensionality::<Ix2>()
            .map_err(|_| FilterError::ShapeError { ndim })?;
        self.smooth_iterations(field, iterations)
    }
}

/// Smooth `field` with 5 iterations using the process-wide capability.
pub fn smooth<T: Sample>(field: ArrayView2<'_, T>) -> FilterResult<Array2<T>> {
    SmoothingAdapter::global().smooth(field)
}

/// Smooth `field` with `iterations` iterations using the process-wide capability.
pub fn smooth_iterations<T: Sample>(
    field: ArrayView2<'_, T>,
    iterations: u32,
) -> FilterResult<Array2<T>> {
    SmoothingAdapter::global().smooth_iterations(field, iterations)
}

/// Smooth a dynamic-dimension field using the process-wide capability.
pub fn smooth_dyn<T: Sample>(field: ArrayViewD<'_, T>, iterations: u32) -> FilterResult<Array2<T>> {
    SmoothingAdapter::global().smooth_dyn(field, iterations)
}
