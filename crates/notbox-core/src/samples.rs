//! Missing-value aware sample statistics
//!
//! Missing observations are `NaN`. Every function here drops them before
//! computing, so they count neither toward the sum nor toward `n`.
//! Degenerate samples yield `NaN` rather than an error: an empty sample has
//! no mean, and fewer than two observations have no standard deviation.

use statrs::statistics::Statistics;

/// Whether a value marks a missing observation
#[inline]
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

/// Copy the present (non-missing) values, preserving their order
///
/// # Examples
///
/// ```rust
/// use notbox_core::samples::compact;
///
/// assert_eq!(compact(&[1.0, f64::NAN, 3.0]), vec![1.0, 3.0]);
/// ```
pub fn compact(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|&x| !is_missing(x)).collect()
}

/// Number of present observations
pub fn count_present(data: &[f64]) -> usize {
    data.iter().filter(|&&x| !is_missing(x)).count()
}

/// Mean of the present observations
///
/// Returns NaN when no observation is present.
pub fn mean(data: &[f64]) -> f64 {
    let present = compact(data);
    if present.is_empty() {
        return f64::NAN;
    }
    Statistics::mean(present.iter())
}

/// Sample standard deviation (n - 1 denominator) of the present observations
///
/// Returns NaN for fewer than two present observations.
///
/// ```rust
/// use notbox_core::samples::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// assert!(std_dev(&[4.0, f64::NAN]).is_nan());
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    let present = compact(data);
    if present.len() < 2 {
        return f64::NAN;
    }
    Statistics::std_dev(present.iter())
}

/// Standard error of the mean, `sd / sqrt(n)`, over present observations
pub fn standard_error(data: &[f64]) -> f64 {
    let n = count_present(data);
    if n < 2 {
        return f64::NAN;
    }
    std_dev(data) / (n as f64).sqrt()
}

/// Median of the present observations
///
/// Even-sized samples average the two central values. Returns NaN when no
/// observation is present.
pub fn median(data: &[f64]) -> f64 {
    let sorted = sorted_present(data);
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Sort the present observations ascending
pub fn sorted_present(data: &[f64]) -> Vec<f64> {
    let mut sorted = compact(data);
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}
