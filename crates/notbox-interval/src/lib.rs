//! Interval estimators for the mean of a sample
//!
//! Each estimator returns the half-width of a 95% interval centered on the
//! sample mean. Two are provided:
//!
//! - **SEM**: `1.96 * sd / sqrt(n)`, the large-sample normal interval
//! - **t-interval**: `t(0.975, n - 1) * sd / sqrt(n)`, exact for normal data
//!   and strictly wider than SEM for small `n`
//!
//! Missing observations (`NaN`) are excluded from both the standard
//! deviation and `n`. Samples with fewer than two present observations
//! produce `NaN`, which callers carry through rather than treat as an error.
//!
//! # Example
//!
//! ```rust
//! use notbox_interval::{IntervalEstimator, IntervalKind, Sem, TInterval};
//!
//! let sample = [4.1, 5.2, 6.0, 5.5, 4.8, 5.9, 6.3, 5.1];
//! let sem = Sem.half_width(&sample);
//! let t = TInterval::default().half_width(&sample);
//! assert!(t > sem);
//!
//! // The kind itself dispatches to the matching estimator
//! assert_eq!(IntervalKind::Sem.half_width(&sample), sem);
//! ```

mod estimators;
mod kind;

pub use estimators::{IntervalEstimator, Sem, TInterval, DEFAULT_CONFIDENCE, SEM_Z};
pub use kind::IntervalKind;
