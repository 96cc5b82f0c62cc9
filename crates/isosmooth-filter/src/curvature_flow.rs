//! Native curvature-flow smoothing
//!
//! Curvature flow evolves a field by `u_t = κ |∇u|`, where κ is the
//! curvature of the isoline through each sample. Isolines shrink and
//! straighten while steep edges, which carry little isoline curvature,
//! survive; the result is edge-preserving noise reduction.
//!
//! # Algorithm
//!
//! Each iteration is an explicit (forward Euler) step over all pixels,
//! reading only the previous state:
//!
//! ```text
//! update = (uxx·uy² − 2·ux·uy·uxy + uyy·ux²) / (ux² + uy²)
//! u'     = u + time_step · update
//! ```
//!
//! with central differences scaled by the pixel spacing. Out-of-range
//! neighbours replicate the nearest edge sample (zero-flux boundary).
//!
//! At a critical point (vanishing gradient) the isoline direction is
//! undefined and the update falls back to `(uxx + uyy) / 2`, the second
//! derivative averaged over all directions. A flat field therefore stays
//! fixed, while an isolated extremum decays. The cutoff for "vanishing" is
//! relative to the input's value range and pixel spacing, so scaling a field
//! by a constant scales the result by the same constant.
//!
//! The explicit scheme is stable for `time_step <= 0.25 · min(sx, sy)²`.
//!
//! # Example
//!
//! ```
//! use isosmooth_core::FieldImage;
//! use isosmooth_filter::{CurvatureFlow, CurvatureFlowEngine, CurvatureFlowParams};
//!
//! let image = FieldImage::new_with_value(4, 4, 1.0).unwrap();
//! let smoothed = CurvatureFlow
//!     .curvature_flow(&image, &CurvatureFlowParams::default())
//!     .unwrap();
//! assert_eq!(smoothed, image);
//! ```

use crate::engine::{CurvatureFlowEngine, CurvatureFlowParams};
use crate::FilterResult;
use isosmooth_core::FieldImage;
use log::{debug, warn};

/// Squared gradient magnitude, relative to `(range / spacing)²`, below which
/// a sample counts as a critical point
const GRADIENT_EPSILON: f64 = 1e-9;

/// The native curvature-flow engine
#[derive(Debug, Clone, Copy, Default)]
pub struct CurvatureFlow;

impl CurvatureFlowEngine for CurvatureFlow {
    fn name(&self) -> &str {
        "native"
    }

    fn curvature_flow(
        &self,
        image: &FieldImage,
        params: &CurvatureFlowParams,
    ) -> FilterResult<FieldImage> {
        let (sx, sy) = params.resolve_spacing(image)?;

        let stable_limit = 0.25 * sx.min(sy).powi(2);
        if params.time_step > stable_limit {
            warn!(
                "curvature flow time step {} exceeds stability limit {} for spacing ({}, {})",
                params.time_step, stable_limit, sx, sy
            );
        }

        debug!(
            "curvature flow on {}x{} image: {} iterations, time step {}",
            image.width(),
            image.height(),
            params.iterations,
            params.time_step
        );

        let mut current = image.clone();
        if params.iterations == 0 {
            return Ok(current);
        }

        let cutoff = critical_cutoff(image, sx, sy);
        let mut next = image.create_template();
        for _ in 0..params.iterations {
            flow_step(&current, &mut next, params.time_step, sx, sy, cutoff);
            std::mem::swap(&mut current, &mut next);
        }

        Ok(current)
    }
}

/// Squared-gradient threshold for critical points in `image`
///
/// Zero for a constant (or all-NaN) image, where only an exactly vanishing
/// gradient is critical.
fn critical_cutoff(image: &FieldImage, sx: f64, sy: f64) -> f64 {
    let (lo, hi) = image.value_range();
    let range = hi - lo;
    if !(range.is_finite() && range > 0.0) {
        return 0.0;
    }
    let scale = range / sx.min(sy);
    GRADIENT_EPSILON * scale * scale
}

/// One explicit curvature-flow update from `src` into `dst`
fn flow_step(
    src: &FieldImage,
    dst: &mut FieldImage,
    time_step: f64,
    sx: f64,
    sy: f64,
    cutoff: f64,
) {
    let (w, h) = src.dimensions();
    let isx = 1.0 / sx;
    let isy = 1.0 / sy;

    for y in 0..h {
        let yi = y as isize;
        for x in 0..w {
            let xi = x as isize;
            let c = src.get_pixel_unchecked(x, y);
            let update = curvature_update(src, xi, yi, c, isx, isy, cutoff);
            dst.set_pixel_unchecked(x, y, c + time_step * update);
        }
    }
}

#[inline]
fn curvature_update(
    src: &FieldImage,
    x: isize,
    y: isize,
    c: f64,
    isx: f64,
    isy: f64,
    cutoff: f64,
) -> f64 {
    let east = src.get_pixel_clamped(x + 1, y);
    let west = src.get_pixel_clamped(x - 1, y);
    let north = src.get_pixel_clamped(x, y - 1);
    let south = src.get_pixel_clamped(x, y + 1);

    let ux = 0.5 * (east - west) * isx;
    let uy = 0.5 * (south - north) * isy;
    let uxx = (east - 2.0 * c + west) * isx * isx;
    let uyy = (south - 2.0 * c + north) * isy * isy;

    let grad_sq = ux * ux + uy * uy;
    if grad_sq <= cutoff {
        return 0.5 * (uxx + uyy);
    }

    let uxy = 0.25
        * (src.get_pixel_clamped(x + 1, y + 1)
            - src.get_pixel_clamped(x + 1, y - 1)
            - src.get_pixel_clamped(x - 1, y + 1)
            + src.get_pixel_clamped(x - 1, y - 1))
        * isx
        * isy;

    (uxx * uy * uy - 2.0 * ux * uy * uxy + uyy * ux * ux) / grad_sq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterError;
    use approx::assert_abs_diff_eq;

    fn run(image: &FieldImage, params: CurvatureFlowParams) -> FieldImage {
        CurvatureFlow.curvature_flow(image, &params).unwrap()
    }

    #[test]
    fn test_flat_image_is_fixed_point() {
        let image = FieldImage::new_with_value(6, 5, -3.25).unwrap();
        let out = run(&image, CurvatureFlowParams::with_iterations(50));
        assert_eq!(out, image);
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let image = FieldImage::from_data(3, 2, vec![1.0, 9.0, 2.0, 4.0, 0.0, 7.0]).unwrap();
        let out = run(&image, CurvatureFlowParams::with_iterations(0));
        assert_eq!(out, image);
    }

    #[test]
    fn test_isolated_peak_decays() {
        let mut image = FieldImage::new(5, 3).unwrap();
        image.set_pixel(2, 1, 10.0).unwrap();

        let out = run(&image, CurvatureFlowParams::with_iterations(1));
        // Critical point: uxx = uyy = -20, update = -20, step 0.05
        assert_abs_diff_eq!(out.get_pixel(2, 1).unwrap(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_ramp_is_fixed_point() {
        // Straight isolines have zero curvature
        let data = (0..4)
            .flat_map(|y| (0..6).map(move |x| 2.0 * x as f64 + y as f64))
            .collect();
        let image = FieldImage::from_data(6, 4, data).unwrap();
        let out = run(&image, CurvatureFlowParams::with_iterations(1));

        for y in 1..3 {
            for x in 1..5 {
                assert_abs_diff_eq!(
                    out.get_pixel(x, y).unwrap(),
                    image.get_pixel(x, y).unwrap(),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_result_scales_with_field() {
        // Disc of radius 6 on a 20x20 grid, with its rim running through (15, 5)
        let disc = |amplitude: f64| {
            let data = (0..20)
                .flat_map(|y| {
                    (0..20).map(move |x| {
                        let (dx, dy) = (x as f64 - 10.0, y as f64 - 10.0);
                        if dx * dx + dy * dy <= 50.0 {
                            amplitude
                        } else {
                            0.0
                        }
                    })
                })
                .collect();
            FieldImage::from_data(20, 20, data).unwrap()
        };

        let params = CurvatureFlowParams::with_iterations(10);
        let unit = run(&disc(1.0), params);
        for scale in [1e-3, 1e-5] {
            let scaled = run(&disc(scale), params);
            for (x, y) in [(15, 5), (10, 3), (10, 10), (4, 12)] {
                assert_abs_diff_eq!(
                    scaled.get_pixel(x, y).unwrap() / scale,
                    unit.get_pixel(x, y).unwrap(),
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_critical_cutoff() {
        let flat = FieldImage::new_with_value(3, 3, 7.0).unwrap();
        assert_eq!(critical_cutoff(&flat, 1.0, 1.0), 0.0);

        let image = FieldImage::from_data(2, 1, vec![-1.0, 1.0]).unwrap();
        assert_abs_diff_eq!(critical_cutoff(&image, 1.0, 1.0), 4e-9, epsilon = 1e-24);
        assert_abs_diff_eq!(critical_cutoff(&image, 2.0, 0.5), 16e-9, epsilon = 1e-24);
    }

    #[test]
    fn test_input_is_not_modified() {
        let mut image = FieldImage::new(4, 4).unwrap();
        image.set_pixel(1, 1, 5.0).unwrap();
        let before = image.clone();
        let _ = run(&image, CurvatureFlowParams::default());
        assert_eq!(image, before);
    }

    #[test]
    fn test_spacing_scales_update() {
        let mut image = FieldImage::new(5, 5).unwrap();
        image.set_pixel(2, 2, 1.0).unwrap();

        let unit = run(&image, CurvatureFlowParams::with_iterations(1));
        let coarse = run(&image, CurvatureFlowParams::with_iterations(1).spacing(2.0, 2.0));

        // Second derivatives shrink by 1/4 with doubled spacing
        let unit_drop = 1.0 - unit.get_pixel(2, 2).unwrap();
        let coarse_drop = 1.0 - coarse.get_pixel(2, 2).unwrap();
        assert_abs_diff_eq!(coarse_drop, unit_drop / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_time_step() {
        let image = FieldImage::new(3, 3).unwrap();
        let result =
            CurvatureFlow.curvature_flow(&image, &CurvatureFlowParams::default().time_step(0.0));
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_single_pixel_image() {
        let image = FieldImage::new_with_value(1, 1, 4.0).unwrap();
        let out = run(&image, CurvatureFlowParams::default());
        assert_eq!(out, image);
    }
}
