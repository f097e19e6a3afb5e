//! # notbox
//!
//! Not-a-box-plots: every observation drawn as a jittered marker over the
//! group mean, a confidence interval around it and a one standard deviation
//! band.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`core`]: error type and NaN-aware sample statistics
//! - [`interval`]: SEM and Student t interval estimators
//! - [`plot`]: grouping, per-group summaries, styles and canvases
//!
//! ```rust
//! use notbox::{not_box_plot, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new();
//! let output = not_box_plot(
//!     &mut canvas,
//!     vec![7.0, 8.0, 6.0, 1.0, 5.0, 7.0, 2.0, 1.0, 3.0, 4.0, 5.0, 2.0, 4.0],
//!     vec![1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 3.0, 3.0, 3.0, 2.0, 2.0, 3.0, 3.0],
//! )
//! .unwrap();
//!
//! assert_eq!(output.stats.len(), 3);
//! ```

pub use notbox_core as core;
pub use notbox_interval as interval;
pub use notbox_plot as plot;

pub use notbox_core::{Error, Result};
pub use notbox_interval::{IntervalEstimator, IntervalKind, Sem, TInterval};
pub use notbox_plot::{
    not_box_plot, Advisory, CallArgs, Canvas, GroupKeys, NotBoxPlot, PlotConfig, PlotOutput,
    RecordingCanvas, RenderRecord, SampleMatrix, StatsRecord, Style,
};
#[cfg(feature = "svg")]
pub use notbox_plot::SvgCanvas;
