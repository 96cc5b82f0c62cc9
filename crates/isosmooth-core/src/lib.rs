//! isosmooth Core - Field and image types
//!
//! This crate provides the data structures shared by the smoothing crates:
//!
//! - [`FieldImage`] - The engine-side floating-point image with pixel spacing
//! - [`Sample`] - Real sample types (`f32`, `f64`) a field may hold
//! - [`Error`] / [`Result`] - Core error handling
//!
//! Fields themselves are plain `ndarray` arrays addressed by (row, column);
//! [`FieldImage::from_array`] and [`FieldImage::to_array`] form the
//! conversion boundary between the two.

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::FieldImage;
pub use image::convert::Sample;
