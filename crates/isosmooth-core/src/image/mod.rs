//! FieldImage - Engine-side floating-point image
//!
//! `FieldImage` is the representation a curvature-flow engine works on: a
//! 2D array of `f64` samples in row-major order, plus the physical pixel
//! spacing along each axis. Callers normally never build one by hand; the
//! conversion boundary in [`convert`] turns an `ndarray` field into an
//! image and back.
//!
//! # Examples
//!
//! ```
//! use isosmooth_core::FieldImage;
//!
//! let mut image = FieldImage::new(4, 3).unwrap();
//! image.set_pixel(1, 2, 0.5).unwrap();
//! assert_eq!(image.get_pixel(1, 2).unwrap(), 0.5);
//! assert_eq!(image.value_range(), (0.0, 0.5));
//! ```

pub mod convert;

use crate::error::{Error, Result};

/// Floating-point image with pixel spacing
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`, so `x` addresses the column and `y` the row
/// of the originating field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldImage {
    /// Width in pixels (number of field columns)
    width: usize,
    /// Height in pixels (number of field rows)
    height: usize,
    /// Pixel data (row-major, no padding)
    data: Vec<f64>,
    /// Physical pixel spacing along x and y
    spacing: (f64, f64),
}

impl FieldImage {
    /// Create a new image with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new image with all pixels set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: usize, height: usize, value: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        Ok(FieldImage {
            width,
            height,
            data: vec![value; width * height],
            spacing: (1.0, 1.0),
        })
    }

    /// Create an image from row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length doesn't
    /// match `width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = width * height;
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(FieldImage {
            width,
            height,
            data,
            spacing: (1.0, 1.0),
        })
    }

    /// Create a zeroed image with the same dimensions and spacing.
    pub fn create_template(&self) -> FieldImage {
        FieldImage {
            width: self.width,
            height: self.height,
            data: vec![0.0; self.data.len()],
            spacing: self.spacing,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the pixel spacing as (x spacing, y spacing)
    ///
    /// Images built by [`FieldImage::from_array`] always have spacing
    /// `(1, 1)`; callers smoothing an `ndarray` field pick a physical
    /// spacing through the filter parameters instead.
    #[inline]
    pub fn spacing(&self) -> (f64, f64) {
        self.spacing
    }

    /// Set the pixel spacing
    ///
    /// Only engines working on a `FieldImage` directly see this value; an
    /// explicit spacing in the filter parameters takes precedence.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless both components are finite
    /// and strictly positive.
    pub fn set_spacing(&mut self, sx: f64, sy: f64) -> Result<()> {
        if !(sx.is_finite() && sx > 0.0 && sy.is_finite() && sy > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "spacing must be finite and positive, got ({sx}, {sy})"
            )));
        }
        self.spacing = (sx, sy);
        Ok(())
    }

    /// Get the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<f64> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y * self.width + x,
                len: self.data.len(),
            });
        }
        Ok(self.data[y * self.width + x])
    }

    /// Set the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y * self.width + x,
                len: self.data.len(),
            });
        }
        self.data[y * self.width + x] = value;
        Ok(())
    }

    /// Get the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Set the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.width + x] = value;
    }

    /// Get the pixel at signed coordinates, replicating the nearest edge
    /// sample for coordinates outside the image (zero-flux boundary).
    #[inline]
    pub fn get_pixel_clamped(&self, x: isize, y: isize) -> f64 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.data[cy * self.width + cx]
    }

    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get a row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[f64] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Smallest and largest sample value as `(min, max)`
    ///
    /// NaN samples are ignored.
    pub fn value_range(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
