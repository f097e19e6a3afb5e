//! Per-group summary statistics

use crate::grouping::ResolvedGroup;
use notbox_core::samples;
use notbox_interval::{IntervalEstimator, IntervalKind};
use serde::Serialize;

/// Summary of one group, index-aligned with its render record
///
/// `NaN` fields mark statistics that are undefined for the group (no
/// observations for the mean, fewer than two for SD and interval).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsRecord {
    /// Horizontal position of the group
    pub x: f64,
    /// Number of present observations
    pub count: usize,
    pub mean: f64,
    /// Interval half-width around the mean
    pub interval: f64,
    /// Sample standard deviation
    pub sd: f64,
    /// Present only when median marking is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
}

impl StatsRecord {
    /// Summarize one group, ignoring missing observations
    pub fn compute(group: &ResolvedGroup, interval: IntervalKind, mark_median: bool) -> Self {
        let values = &group.values;
        Self {
            x: group.x,
            count: samples::count_present(values),
            mean: samples::mean(values),
            interval: interval.half_width(values),
            sd: samples::std_dev(values),
            median: mark_median.then(|| samples::median(values)),
        }
    }

    /// Whether SD and interval are defined for this group
    pub fn is_degenerate(&self) -> bool {
        self.count < 2
    }
}
