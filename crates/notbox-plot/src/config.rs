//! Plot configuration: style, interval, jitter and median marking

use notbox_core::{Error, Result};
use notbox_interval::IntervalKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default horizontal jitter magnitude
pub const DEFAULT_JITTER: f64 = 0.3;

/// Ratio between the half-width of a summary box and the jitter magnitude
///
/// Keeps the box visually as wide as the jittered point cloud.
pub const JITTER_BOX_SCALE: f64 = 0.55;

/// How the per-group summary is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// SD and interval as filled boxes, mean as a horizontal line
    #[default]
    Patch,
    /// SD and interval as vertical lines, mean as a marker
    Line,
    /// SD as a vertical line, interval and mean as in `Patch`
    SdLine,
}

impl Style {
    /// The option token for this style
    pub fn token(&self) -> &'static str {
        match self {
            Style::Patch => "patch",
            Style::Line => "line",
            Style::SdLine => "sdline",
        }
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patch" => Ok(Style::Patch),
            "line" => Ok(Style::Line),
            "sdline" => Ok(Style::SdLine),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Non-fatal conditions reported alongside a successful plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Advisory {
    /// Zero jitter under the patch style collapses every box to zero width
    ZeroWidthPatch,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ZeroWidthPatch => f.write_str(
                "jitter is 0 with the patch style: summary boxes have zero width and are invisible",
            ),
        }
    }
}

/// Canonical configuration of one plot call
///
/// Deserializes from the keyword option names (`jitter`, `style`,
/// `interval`, `markMedian`); missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Horizontal jitter magnitude, `>= 0`
    pub jitter: f64,
    /// Summary drawing style
    pub style: Style,
    /// Interval estimator used for every group
    pub interval: IntervalKind,
    /// Compute and draw the median of each group
    pub mark_median: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
            style: Style::default(),
            interval: IntervalKind::default(),
            mark_median: false,
        }
    }
}

impl PlotConfig {
    /// Start a builder from the defaults
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::new()
    }

    /// Check the configuration before anything is drawn
    pub fn validate(&self) -> Result<()> {
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(Error::invalid_jitter(self.jitter));
        }
        Ok(())
    }

    /// Half-width of summary boxes around a group's x position
    pub fn box_half_width(&self) -> f64 {
        self.jitter * JITTER_BOX_SCALE
    }

    /// Valid-but-degenerate conditions of this configuration
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.jitter == 0.0 && self.style == Style::Patch {
            advisories.push(Advisory::ZeroWidthPatch);
        }
        advisories
    }
}

/// Builder for [`PlotConfig`]
#[derive(Debug, Clone, Default)]
pub struct PlotConfigBuilder {
    config: PlotConfig,
}

impl PlotConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the jitter magnitude.
    pub fn jitter(mut self, jitter: f64) -> Self {
        self.config.jitter = jitter;
        self
    }

    /// Sets the summary style.
    pub fn style(mut self, style: Style) -> Self {
        self.config.style = style;
        self
    }

    /// Sets the interval estimator.
    pub fn interval(mut self, interval: IntervalKind) -> Self {
        self.config.interval = interval;
        self
    }

    /// Enables or disables median marking.
    pub fn mark_median(mut self, mark_median: bool) -> Self {
        self.config.mark_median = mark_median;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<PlotConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
