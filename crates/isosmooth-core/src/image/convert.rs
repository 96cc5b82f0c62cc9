//! Conversion between `ndarray` fields and [`FieldImage`]
//!
//! A field row maps to an image row and a field column to an image column,
//! so the sample at `field[[r, c]]` becomes pixel `(x = c, y = r)`. The
//! conversion carries no logic beyond shape and sample-type marshaling.

use super::FieldImage;
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// Real sample types a field may hold.
///
/// Engines compute in `f64`; a field converted back to its own sample type
/// keeps the numeric domain of the input.
pub trait Sample: Copy + Send + Sync + 'static {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl FieldImage {
    /// Build an image from a 2D field view.
    ///
    /// The view may have any memory layout; samples are read in logical
    /// (row, column) order. Spacing defaults to `(1.0, 1.0)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for a field with no rows or no columns.
    pub fn from_array<T: Sample>(field: ArrayView2<'_, T>) -> Result<Self> {
        let (rows, cols) = field.dim();
        let data = field.iter().map(|&v| v.to_f64()).collect();
        FieldImage::from_data(cols, rows, data)
    }

    /// Convert the image back into an owned `(height, width)` field.
    pub fn to_array<T: Sample>(&self) -> Result<Array2<T>> {
        let data: Vec<T> = self.data().iter().map(|&v| T::from_f64(v)).collect();
        Array2::from_shape_vec((self.height(), self.width()), data).map_err(|_| {
            Error::ShapeMismatch {
                expected: (self.height(), self.width()),
                actual: (self.data().len(), 1),
            }
        })
    }

    /// Consume the image and convert it into a field, checking that it still
    /// has the `(rows, cols)` shape the caller started from.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` if an engine returned an image of a
    /// different size.
    pub fn into_array_shaped<T: Sample>(self, shape: (usize, usize)) -> Result<Array2<T>> {
        let actual = (self.height(), self.width());
        if actual != shape {
            return Err(Error::ShapeMismatch {
                expected: shape,
                actual,
            });
        }
        self.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_array_layout() {
        let field = array![[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let image = FieldImage::from_array(field.view()).unwrap();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 0).unwrap(), 3.0);
        assert_eq!(image.get_pixel(0, 1).unwrap(), 4.0);
    }

    #[test]
    fn test_from_array_transposed_view() {
        // Column-major views must still be read in logical order
        let field = array![[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let transposed = field.t();
        let image = FieldImage::from_array(transposed).unwrap();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.row(0), &[1.0, 3.0, 5.0]);
        assert_eq!(image.row(1), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_from_array_empty() {
        let field = Array2::<f64>::zeros((0, 4));
        assert_eq!(
            FieldImage::from_array(field.view()),
            Err(Error::InvalidDimension {
                width: 4,
                height: 0
            })
        );
    }

    #[test]
    fn test_to_array_keeps_sample_type() {
        let field = array![[0.25f32, -1.5], [3.0, 8.0]];
        let image = FieldImage::from_array(field.view()).unwrap();
        let back: Array2<f32> = image.to_array().unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_into_array_shaped_mismatch() {
        let image = FieldImage::new(3, 2).unwrap();
        let err = image.into_array_shaped::<f64>((3, 2)).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: (3, 2),
                actual: (2, 3)
            }
        );
    }
}
