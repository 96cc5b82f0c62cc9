//! isosmooth-test - Regression test helpers for isosmooth
//!
//! This crate provides a small regression test framework and deterministic
//! synthetic fields, supporting two modes:
//!
//! - **Compare**: Check computed values against expectations (default)
//! - **Display**: Additionally dump compared fields to stderr for inspection
//!
//! # Usage
//!
//! ```ignore
//! use isosmooth_test::{RegParams, fields};
//!
//! let mut rp = RegParams::new("flat");
//! let field = fields::flat(4, 4, 1.0);
//! rp.compare_fields(field.view(), smoothed.view(), 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

pub mod fields;
pub mod measure;
mod params;

pub use params::{RegParams, RegTestMode};
