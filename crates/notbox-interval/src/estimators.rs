//! SEM and Student's t half-width estimators

use crate::IntervalKind;
use notbox_core::{samples, Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::trace;

/// Normal critical value used by the SEM interval
pub const SEM_Z: f64 = 1.96;

/// Confidence level of the t-interval unless configured otherwise
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Estimator of the half-width of an interval around the sample mean
///
/// Implementations must exclude missing (`NaN`) observations from both the
/// spread and the count, and return `NaN` when fewer than two observations
/// are present.
pub trait IntervalEstimator {
    /// Which interval this estimator produces
    fn kind(&self) -> IntervalKind;

    /// Half-width of the interval for one sample column
    fn half_width(&self, sample: &[f64]) -> f64;

    /// Half-widths for several columns, in column order
    fn half_widths<'a, I>(&self, columns: I) -> Vec<f64>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a [f64]>,
    {
        columns
            .into_iter()
            .map(|column| self.half_width(column))
            .collect()
    }
}

/// Standard-error interval: `1.96 * sd / sqrt(n)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sem;

impl IntervalEstimator for Sem {
    fn kind(&self) -> IntervalKind {
        IntervalKind::Sem
    }

    fn half_width(&self, sample: &[f64]) -> f64 {
        SEM_Z * samples::standard_error(sample)
    }
}

/// Student's t interval: `t(1 - alpha/2, n - 1) * sd / sqrt(n)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TInterval {
    confidence_level: f64,
}

impl TInterval {
    /// Create a t-interval estimator at the given two-sided confidence level
    pub fn new(confidence_level: f64) -> Result<Self> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Confidence level {confidence_level} must be in (0, 1)"
            )));
        }
        Ok(Self { confidence_level })
    }

    /// Get the confidence level
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Two-sided critical value for a sample of `n` present observations
    ///
    /// Returns NaN when `n < 2`, where the t distribution has no degrees of
    /// freedom.
    pub fn critical_value(&self, n: usize) -> f64 {
        if n < 2 {
            return f64::NAN;
        }
        let df = (n - 1) as f64;
        let alpha = 1.0 - self.confidence_level;
        match StudentsT::new(0.0, 1.0, df) {
            Ok(t_dist) => t_dist.inverse_cdf(1.0 - alpha / 2.0),
            Err(e) => {
                trace!("t distribution unavailable for df={}: {}", df, e);
                f64::NAN
            }
        }
    }
}

impl Default for TInterval {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE,
        }
    }
}

impl IntervalEstimator for TInterval {
    fn kind(&self) -> IntervalKind {
        IntervalKind::TInterval
    }

    fn half_width(&self, sample: &[f64]) -> f64 {
        let n = samples::count_present(sample);
        self.critical_value(n) * samples::standard_error(sample)
    }
}

impl IntervalEstimator for IntervalKind {
    fn kind(&self) -> IntervalKind {
        *self
    }

    fn half_width(&self, sample: &[f64]) -> f64 {
        match self {
            IntervalKind::Sem => Sem.half_width(sample),
            IntervalKind::TInterval => TInterval::default().half_width(sample),
        }
    }
}
