//! Entry point: resolve groups, summarize, render, set up the x axis

use crate::adapter::CallArgs;
use crate::canvas::Canvas;
use crate::config::{Advisory, PlotConfig};
use crate::data::{GroupKeys, SampleInput};
use crate::grouping::{DispatchMode, GroupLayout};
use crate::render::{RenderRecord, StyleRenderer};
use crate::summary::StatsRecord;
use notbox_core::Result;
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Everything a plot call hands back to the caller
///
/// `renders` and `stats` are index-aligned, one entry per resolved group.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOutput {
    pub renders: Vec<RenderRecord>,
    pub stats: Vec<StatsRecord>,
    pub warnings: Vec<Advisory>,
    pub mode: DispatchMode,
}

impl PlotOutput {
    /// Number of resolved groups
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// A configured not-box-plot
///
/// # Example
///
/// ```rust
/// use notbox_plot::{NotBoxPlot, PlotConfig, RecordingCanvas, SampleMatrix, Style};
///
/// let plot = NotBoxPlot::new(PlotConfig::builder().style(Style::Line).build().unwrap());
/// let samples = SampleMatrix::from_columns(vec![
///     vec![4.2, 5.1, 4.8, 5.5],
///     vec![6.3, 6.9, 7.4],
/// ]);
///
/// let mut canvas = RecordingCanvas::new();
/// let output = plot.plot(&mut canvas, samples, vec![1.0, 2.0]).unwrap();
///
/// assert_eq!(output.len(), 2);
/// assert_eq!(canvas.x_limits(), Some((0.0, 3.0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBoxPlot {
    config: PlotConfig,
}

impl NotBoxPlot {
    /// Create a plot from an already validated configuration
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    /// Create a plot from call arguments in either calling convention
    pub fn from_call(args: &CallArgs) -> Result<Self> {
        Ok(Self::new(args.normalize()?))
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Plot with jitter drawn from the thread-local RNG
    pub fn plot<C>(
        &self,
        canvas: &mut C,
        samples: impl Into<SampleInput>,
        keys: impl Into<GroupKeys>,
    ) -> Result<PlotOutput>
    where
        C: Canvas + ?Sized,
    {
        self.plot_with_rng(canvas, samples, keys, &mut rand::thread_rng())
    }

    /// Plot with jitter drawn from `rng`
    ///
    /// Configuration and shape errors are returned before anything is drawn.
    #[instrument(skip_all, fields(style = %self.config.style, interval = %self.config.interval))]
    pub fn plot_with_rng<C, R>(
        &self,
        canvas: &mut C,
        samples: impl Into<SampleInput>,
        keys: impl Into<GroupKeys>,
        rng: &mut R,
    ) -> Result<PlotOutput>
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        self.config.validate()?;
        let layout = GroupLayout::resolve(&samples.into(), &keys.into())?;

        let warnings = self.config.advisories();
        for advisory in &warnings {
            warn!("{}", advisory);
        }

        let stats: Vec<StatsRecord> = layout
            .groups
            .iter()
            .map(|g| StatsRecord::compute(g, self.config.interval, self.config.mark_median))
            .collect();

        let renderer = StyleRenderer::new(&self.config);
        let renders = layout
            .groups
            .iter()
            .zip(&stats)
            .map(|(group, stats)| renderer.render_group(canvas, group, stats, rng))
            .collect::<Result<Vec<_>>>()?;

        if let Some((min, max)) = layout.x_limits() {
            canvas.set_x_limits(min, max)?;
            canvas.set_x_ticks(&layout.unique_x())?;
        }

        let degenerate = stats.iter().filter(|s| s.is_degenerate()).count();
        debug!(
            "Rendered {} groups ({} with fewer than 2 observations)",
            renders.len(),
            degenerate
        );

        Ok(PlotOutput {
            renders,
            stats,
            warnings,
            mode: layout.mode,
        })
    }
}

/// Plot with the default configuration
pub fn not_box_plot<C>(
    canvas: &mut C,
    samples: impl Into<SampleInput>,
    keys: impl Into<GroupKeys>,
) -> Result<PlotOutput>
where
    C: Canvas + ?Sized,
{
    NotBoxPlot::default().plot(canvas, samples, keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::data::SampleMatrix;
    use notbox_core::Error;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mismatch_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        let samples = SampleMatrix::from_columns(vec![vec![1.0], vec![2.0], vec![3.0]]);
        let err = not_box_plot(&mut canvas, samples, vec![1.0, 2.0]).unwrap_err();

        assert!(matches!(err, Error::KeyLengthMismatch { keys: 2, expected: 3 }));
        assert!(err.is_configuration());
        assert!(canvas.is_empty());
        assert_eq!(canvas.x_limits(), None);
    }

    #[test]
    fn test_single_position_leaves_axis_alone() {
        let mut canvas = RecordingCanvas::new();
        let output = not_box_plot(&mut canvas, vec![1.0, 2.0, 3.0], GroupKeys::none()).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(canvas.x_limits(), None);
        assert_eq!(canvas.x_ticks(), None);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let plot = NotBoxPlot::default();
        let samples = SampleMatrix::from_columns(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]);

        let mut first = RecordingCanvas::new();
        let mut second = RecordingCanvas::new();
        plot.plot_with_rng(&mut first, samples.clone(), GroupKeys::none(), &mut ChaCha8Rng::seed_from_u64(3))
            .unwrap();
        plot.plot_with_rng(&mut second, samples, GroupKeys::none(), &mut ChaCha8Rng::seed_from_u64(3))
            .unwrap();

        assert_eq!(first.primitives(), second.primitives());
    }

    #[test]
    fn test_from_call() {
        let plot = NotBoxPlot::from_call(&CallArgs::new().option("interval", "tInterval")).unwrap();
        assert_eq!(plot.config().interval, notbox_interval::IntervalKind::TInterval);

        let err = NotBoxPlot::from_call(&CallArgs::new().legacy_jitter(0.1).option("style", "line"))
            .unwrap_err();
        assert!(matches!(err, Error::ConflictingConventions(_)));
    }
}
