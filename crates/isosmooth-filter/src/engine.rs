//! Curvature-flow engine interface
//!
//! An engine is the capability that does the numerical work: given an
//! image and a parameter set, it returns a smoothed image of the same size.
//! The adapter never depends on a concrete engine, only on this trait.

use crate::{FilterError, FilterResult};
use isosmooth_core::FieldImage;

/// Default number of curvature-flow iterations
pub const DEFAULT_ITERATIONS: u32 = 5;

/// Default time step of one iteration
pub const DEFAULT_TIME_STEP: f64 = 0.05;

/// Parameters of a curvature-flow run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureFlowParams {
    /// Number of iterations; 0 returns the input unchanged
    pub iterations: u32,
    /// Time step of each explicit update
    pub time_step: f64,
    /// Pixel spacing `(x, y)`; `None` uses the image's own spacing
    pub spacing: Option<(f64, f64)>,
}

impl Default for CurvatureFlowParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            time_step: DEFAULT_TIME_STEP,
            spacing: None,
        }
    }
}

impl CurvatureFlowParams {
    /// Default parameters with the given iteration count
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Set the time step of each explicit update
    pub fn time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Override the pixel spacing of the image being smoothed
    pub fn spacing(mut self, sx: f64, sy: f64) -> Self {
        self.spacing = Some((sx, sy));
        self
    }

    /// Check the parameters and resolve the spacing to use for `image`.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidParameters` if the time step or a
    /// spacing component is not finite and positive.
    pub fn resolve_spacing(&self, image: &FieldImage) -> FilterResult<(f64, f64)> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(FilterError::InvalidParameters(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }

        let (sx, sy) = self.spacing.unwrap_or_else(|| image.spacing());
        if !(sx.is_finite() && sx > 0.0 && sy.is_finite() && sy > 0.0) {
            return Err(FilterError::InvalidParameters(format!(
                "spacing must be finite and positive, got ({sx}, {sy})"
            )));
        }
        Ok((sx, sy))
    }
}

/// A curvature-flow smoothing capability
///
/// Implementations must return an image with the dimensions of the input
/// and must not modify the input.
pub trait CurvatureFlowEngine: Send + Sync {
    /// Short engine name used in logs and error messages
    fn name(&self) -> &str;

    /// Run curvature-flow smoothing on `image`
    fn curvature_flow(
        &self,
        image: &FieldImage,
        params: &CurvatureFlowParams,
    ) -> FilterResult<FieldImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = CurvatureFlowParams::default();
        assert_eq!(params.iterations, 5);
        assert_eq!(params.time_step, 0.05);
        assert_eq!(params.spacing, None);
    }

    #[test]
    fn test_builder() {
        let params = CurvatureFlowParams::with_iterations(12)
            .time_step(0.1)
            .spacing(2.0, 3.0);
        assert_eq!(params.iterations, 12);
        assert_eq!(params.time_step, 0.1);
        assert_eq!(params.spacing, Some((2.0, 3.0)));
    }

    #[test]
    fn test_resolve_spacing() {
        let mut image = FieldImage::new(3, 3).unwrap();
        image.set_spacing(0.5, 0.25).unwrap();

        let params = CurvatureFlowParams::default();
        assert_eq!(params.resolve_spacing(&image).unwrap(), (0.5, 0.25));
        assert_eq!(
            params.spacing(4.0, 4.0).resolve_spacing(&image).unwrap(),
            (4.0, 4.0)
        );
    }

    #[test]
    fn test_array_image_spacing_comes_from_params() {
        let field = ndarray::Array2::<f64>::zeros((2, 3));
        let image = FieldImage::from_array(field.view()).unwrap();
        assert_eq!(image.spacing(), (1.0, 1.0));

        let params = CurvatureFlowParams::default();
        assert_eq!(params.resolve_spacing(&image).unwrap(), (1.0, 1.0));
        assert_eq!(
            params.spacing(0.5, 2.0).resolve_spacing(&image).unwrap(),
            (0.5, 2.0)
        );
    }

    #[test]
    fn test_resolve_spacing_rejects_bad_values() {
        let image = FieldImage::new(3, 3).unwrap();
        for params in [
            CurvatureFlowParams::default().time_step(0.0),
            CurvatureFlowParams::default().time_step(-0.05),
            CurvatureFlowParams::default().time_step(f64::INFINITY),
            CurvatureFlowParams::default().spacing(0.0, 1.0),
            CurvatureFlowParams::default().spacing(1.0, f64::NAN),
        ] {
            assert!(matches!(
                params.resolve_spacing(&image),
                Err(FilterError::InvalidParameters(_))
            ));
        }
    }
}
