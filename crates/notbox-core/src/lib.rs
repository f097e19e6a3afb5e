//! Core types for the notbox workspace
//!
//! This crate holds the pieces every other notbox crate depends on:
//!
//! - [`Error`] / [`Result`]: the unified error type for configuration,
//!   input and host-canvas failures
//! - [`samples`]: missing-value aware descriptive statistics
//!
//! Missing observations are represented as `f64::NAN` throughout. Every
//! statistic in [`samples`] excludes them from both the numerator and the
//! count, so a column `[1, 2, 3, NaN]` summarizes exactly like `[1, 2, 3]`.
//!
//! # Example
//!
//! ```rust
//! use notbox_core::samples;
//!
//! let column = [1.0, 2.0, 3.0, f64::NAN];
//! assert_eq!(samples::count_present(&column), 3);
//! assert_eq!(samples::mean(&column), 2.0);
//! assert_eq!(samples::std_dev(&column), 1.0);
//! ```

pub mod error;
pub mod samples;

pub use error::{Error, Result};
pub use samples::{compact, count_present, is_missing};
