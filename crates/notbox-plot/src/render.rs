//! Draws one group under the configured style
//!
//! Compositing order per group, bottom to top:
//!
//! | Style    | Order                                                        |
//! |----------|--------------------------------------------------------------|
//! | `Patch`  | SD box, interval box, raw data, mean line, median line       |
//! | `Line`   | SD line, raw data, mean marker, interval line, median marker |
//! | `SdLine` | SD line, interval box, raw data, mean line, median line      |

use crate::canvas::{
    Canvas, FillStyle, Handle, LineDash, LineStyle, MarkerShape, MarkerStyle, Point,
};
use crate::config::{PlotConfig, Style};
use crate::grouping::ResolvedGroup;
use crate::palette::{self, Color};
use crate::summary::StatsRecord;
use notbox_core::{samples, Result};
use notbox_interval::IntervalKind;
use rand::Rng;
use serde::Serialize;

const SUMMARY_LINE_WIDTH: f64 = 2.0;
const DATA_MARKER_SIZE: f64 = 5.0;
const MEAN_MARKER_SIZE: f64 = 10.0;
const MEDIAN_MARKER_SIZE: f64 = 10.0;

/// Named element of a render record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Data,
    Mean,
    Sd,
    Interval,
    Median,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Data => "data",
            Element::Mean => "mean",
            Element::Sd => "sd",
            Element::Interval => "interval",
            Element::Median => "median",
        }
    }
}

/// Handles of everything drawn for one group
///
/// Owned by the caller once returned; the renderer keeps no reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderRecord {
    /// Jittered raw observations
    pub data: Handle,
    pub mean: Handle,
    pub sd: Handle,
    pub interval: Handle,
    /// Present only when median marking is enabled
    pub median: Option<Handle>,
    /// Estimator that sized the interval element
    pub interval_kind: IntervalKind,
}

impl RenderRecord {
    pub fn element(&self, element: Element) -> Option<Handle> {
        match element {
            Element::Data => Some(self.data),
            Element::Mean => Some(self.mean),
            Element::Sd => Some(self.sd),
            Element::Interval => Some(self.interval),
            Element::Median => self.median,
        }
    }

    /// Present elements in a fixed order
    pub fn elements(&self) -> Vec<(Element, Handle)> {
        [
            Element::Data,
            Element::Mean,
            Element::Sd,
            Element::Interval,
            Element::Median,
        ]
        .into_iter()
        .filter_map(|e| self.element(e).map(|h| (e, h)))
        .collect()
    }
}

/// Draws groups under one style and jitter setting
#[derive(Debug, Clone, Copy)]
pub struct StyleRenderer {
    style: Style,
    jitter: f64,
    box_half_width: f64,
    interval_kind: IntervalKind,
}

impl StyleRenderer {
    pub fn new(config: &PlotConfig) -> Self {
        Self {
            style: config.style,
            jitter: config.jitter,
            box_half_width: config.box_half_width(),
            interval_kind: config.interval,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Draw one group and return the handles of its elements
    ///
    /// The median element is drawn exactly when `stats.median` is set.
    pub fn render_group<C, R>(
        &self,
        canvas: &mut C,
        group: &ResolvedGroup,
        stats: &StatsRecord,
        rng: &mut R,
    ) -> Result<RenderRecord>
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        let x = group.x;
        let (data, mean, sd, interval, median) = match self.style {
            Style::Patch => {
                let sd = self.band(canvas, x, stats.mean, stats.sd, palette::SD_FILL)?;
                let interval =
                    self.band(canvas, x, stats.mean, stats.interval, palette::INTERVAL_FILL)?;
                let data = self.data_markers(canvas, group, rng)?;
                let mean = self.mean_line(canvas, x, stats.mean)?;
                let median = self.median_line(canvas, x, stats.median)?;
                (data, mean, sd, interval, median)
            }
            Style::Line => {
                let sd = self.sd_line(canvas, x, stats)?;
                let data = self.data_markers(canvas, group, rng)?;
                let mean = self.mean_marker(canvas, x, stats.mean)?;
                let interval = self.interval_line(canvas, x, stats)?;
                let median = self.median_marker(canvas, x, stats.median)?;
                (data, mean, sd, interval, median)
            }
            Style::SdLine => {
                let sd = self.sd_line(canvas, x, stats)?;
                let interval =
                    self.band(canvas, x, stats.mean, stats.interval, palette::INTERVAL_FILL)?;
                let data = self.data_markers(canvas, group, rng)?;
                let mean = self.mean_line(canvas, x, stats.mean)?;
                let median = self.median_line(canvas, x, stats.median)?;
                (data, mean, sd, interval, median)
            }
        };

        Ok(RenderRecord {
            data,
            mean,
            sd,
            interval,
            median,
            interval_kind: self.interval_kind,
        })
    }

    /// Horizontal positions `x + U(-0.5, 0.5) * jitter` for present observations
    pub fn jitter_points<R: Rng + ?Sized>(&self, group: &ResolvedGroup, rng: &mut R) -> Vec<Point> {
        samples::compact(&group.values)
            .into_iter()
            .map(|y| Point::new(group.x + (rng.gen::<f64>() - 0.5) * self.jitter, y))
            .collect()
    }

    fn data_markers<C, R>(&self, canvas: &mut C, group: &ResolvedGroup, rng: &mut R) -> Result<Handle>
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        let edge = palette::tie_color(group.tie_rank, group.ties);
        let points = self.jitter_points(group, rng);
        canvas.markers(
            &points,
            &MarkerStyle {
                shape: MarkerShape::Circle,
                size: DATA_MARKER_SIZE,
                edge,
                face: Some(edge.lighten(palette::MARKER_FACE_LIGHTEN)),
                line_width: 0.5,
            },
        )
    }

    /// Filled box `[x - w, x + w] x [center - half, center + half]`
    fn band<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: f64,
        center: f64,
        half: f64,
        color: Color,
    ) -> Result<Handle> {
        let (left, right) = (x - self.box_half_width, x + self.box_half_width);
        let (bottom, top) = (center - half, center + half);
        canvas.fill_polygon(
            &[
                Point::new(left, bottom),
                Point::new(left, top),
                Point::new(right, top),
                Point::new(right, bottom),
            ],
            &FillStyle { color, edge: None },
        )
    }

    fn horizontal<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: f64,
        y: f64,
        color: Color,
        dash: LineDash,
    ) -> Result<Handle> {
        canvas.line(
            Point::new(x - self.box_half_width, y),
            Point::new(x + self.box_half_width, y),
            &LineStyle {
                color,
                width: SUMMARY_LINE_WIDTH,
                dash,
            },
        )
    }

    fn vertical<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: f64,
        center: f64,
        half: f64,
        color: Color,
    ) -> Result<Handle> {
        canvas.line(
            Point::new(x, center - half),
            Point::new(x, center + half),
            &LineStyle {
                color,
                width: SUMMARY_LINE_WIDTH,
                dash: LineDash::Solid,
            },
        )
    }

    fn mean_line<C: Canvas + ?Sized>(&self, canvas: &mut C, x: f64, mean: f64) -> Result<Handle> {
        self.horizontal(canvas, x, mean, palette::SUMMARY, LineDash::Solid)
    }

    fn median_line<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: f64,
        median: Option<f64>,
    ) -> Result<Option<Handle>> {
        median
            .map(|m| self.horizontal(canvas, x, m, palette::SUMMARY, LineDash::Dotted))
            .transpose()
    }

    fn sd_line<C: Canvas + ?Sized>(&self, canvas: &mut C, x: f64, stats: &StatsRecord) -> Result<Handle> {
        self.vertical(canvas, x, stats.mean, stats.sd, palette::SD_LINE)
    }

    fn interval_line<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: f64,
        stats: &StatsRecord,
    ) -> Result<Handle> {
        self.vertical(canvas, x, stats.mean, stats.interval, palette::SUMMARY)
    }

    fn mean_marker<C: Canvas + ?Sized>(&self, canvas: &mut C, x: f64, mean: f64) -> Result<Handle> {
        canvas.markers(
            &[Point::new(x, mean)],
            &MarkerStyle {
                shape: MarkerShape::Circle,
                size: MEAN_MARKER_SIZE,
                edge: palette::SUMMARY,
                face: Some(palette::SUMMARY),
                line_width: 1.0,
            },
        )
    }

    fn median_marker<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: f64,
        median: Option<f64>,
    ) -> Result<Option<Handle>> {
        median
            .map(|m| {
                canvas.markers(
                    &[Point::new(x, m)],
                    &MarkerStyle {
                        shape: MarkerShape::Square,
                        size: MEDIAN_MARKER_SIZE,
                        edge: palette::MEDIAN,
                        face: None,
                        line_width: SUMMARY_LINE_WIDTH,
                    },
                )
            })
            .transpose()
    }
}
