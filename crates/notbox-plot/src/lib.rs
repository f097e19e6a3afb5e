//! # notbox-plot
//!
//! Group dispatch, per-group summaries and the three rendering styles of the
//! not-a-box-plot.
//!
//! Every group is drawn as its jittered raw observations on top of a mean
//! marker, an interval around the mean (SEM or Student t) and a one standard
//! deviation band. Drawing goes through the [`Canvas`] trait; tests and
//! headless callers use [`RecordingCanvas`], and the `svg` feature adds an
//! `SvgCanvas` backed by plotters.
//!
//! ## Example
//!
//! ```rust
//! use notbox_plot::{NotBoxPlot, PlotConfig, RecordingCanvas, SampleMatrix, Style};
//!
//! let samples = SampleMatrix::from_columns(vec![
//!     vec![4.1, 5.3, 4.8, 5.0],
//!     vec![6.2, 6.9, 7.4],
//! ]);
//! let config = PlotConfig::builder().style(Style::SdLine).build().unwrap();
//!
//! let mut canvas = RecordingCanvas::new();
//! let output = NotBoxPlot::new(config)
//!     .plot(&mut canvas, samples, vec![1.0, 2.0])
//!     .unwrap();
//!
//! assert_eq!(output.stats.len(), 2);
//! assert_eq!(canvas.x_ticks(), Some(&[1.0, 2.0][..]));
//! ```

pub mod adapter;
pub mod canvas;
pub mod config;
pub mod data;
pub mod grouping;
pub mod palette;
pub mod plot;
pub mod render;
pub mod summary;
#[cfg(feature = "svg")]
pub mod svg;

pub use adapter::{CallArgs, LegacyArgs, OptionValue};
pub use canvas::{
    Canvas, FillStyle, Handle, LineDash, LineStyle, MarkerShape, MarkerStyle, Point, Primitive,
    RecordingCanvas,
};
pub use config::{Advisory, PlotConfig, PlotConfigBuilder, Style, DEFAULT_JITTER, JITTER_BOX_SCALE};
pub use data::{GroupKeys, SampleInput, SampleMatrix};
pub use grouping::{split_by_key, DispatchMode, GroupLayout, ResolvedGroup};
pub use palette::{tie_color, Color};
pub use plot::{not_box_plot, NotBoxPlot, PlotOutput};
pub use render::{Element, RenderRecord, StyleRenderer};
pub use summary::StatsRecord;
#[cfg(feature = "svg")]
pub use svg::SvgCanvas;

pub use notbox_core::{Error, Result};
pub use notbox_interval::IntervalKind;
