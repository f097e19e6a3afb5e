//! SVG output through plotters
//!
//! [`SvgCanvas`] records primitives like [`RecordingCanvas`] and writes them
//! to an SVG file on [`SvgCanvas::save`]. Geometry that is not finite (the
//! SD or interval of a group with fewer than two observations) is skipped at
//! that point.

use crate::canvas::{
    Canvas, FillStyle, Handle, LineDash, LineStyle, MarkerShape, MarkerStyle, Point, Primitive,
    RecordingCanvas,
};
use crate::palette;
use notbox_core::{Error, Result};
use plotters::coord::combinators::{BindKeyPoints, WithKeyPoints};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{
    Cartesian2d, ChartBuilder, ChartContext, Circle, DrawingBackend, EmptyElement,
    IntoDrawingArea, PathElement, Polygon, RGBColor, Rectangle, SVGBackend, ShapeStyle, WHITE,
};
use plotters::style::Color as _;
use std::path::Path;
use tracing::debug;

type Chart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<WithKeyPoints<RangedCoordf64>, RangedCoordf64>>;

const DOT_SEGMENTS: usize = 12;

/// Labelled x positions when the plot set no ticks
const FALLBACK_X_LABELS: usize = 5;

fn canvas_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Canvas(e.to_string())
}

fn rgb(color: palette::Color) -> RGBColor {
    let (r, g, b) = color.to_rgb8();
    RGBColor(r, g, b)
}

fn pixels(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

/// Canvas that renders to an SVG file
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    recording: RecordingCanvas,
    size: (u32, u32),
    caption: Option<String>,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            recording: RecordingCanvas::new(),
            size: (width, height),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Primitives recorded so far
    pub fn recording(&self) -> &RecordingCanvas {
        &self.recording
    }

    /// Write everything drawn so far to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ((data_x0, data_x1), (y0, y1)) = self
            .recording
            .extent()
            .unwrap_or(((0.0, 1.0), (0.0, 1.0)));
        let (x0, x1) = self
            .recording
            .x_limits()
            .unwrap_or((data_x0 - 1.0, data_x1 + 1.0));
        let pad = ((y1 - y0) * 0.05).max(0.5);
        let ticks = self
            .recording
            .x_ticks()
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| evenly_spaced(x0, x1, FALLBACK_X_LABELS));

        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(canvas_error)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20).x_label_area_size(30).y_label_area_size(40);
        if let Some(caption) = &self.caption {
            builder.caption(caption, ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d((x0..x1).with_key_points(ticks.clone()), (y0 - pad)..(y1 + pad))
            .map_err(canvas_error)?;

        let x_label = |x: &f64| format!("{x}");
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(ticks.len())
            .x_label_formatter(&x_label)
            .draw()
            .map_err(canvas_error)?;

        for (_, primitive) in self.recording.primitives() {
            draw_primitive(&mut chart, primitive)?;
        }

        root.present().map_err(canvas_error)?;
        debug!(
            "Wrote {} primitives to {}",
            self.recording.len(),
            path.display()
        );
        Ok(())
    }
}

fn draw_primitive<DB: DrawingBackend>(chart: &mut Chart<'_, DB>, primitive: &Primitive) -> Result<()> {
    match primitive {
        Primitive::Polygon { vertices, style } => {
            if !vertices.iter().all(Point::is_finite) {
                return Ok(());
            }
            let coords: Vec<(f64, f64)> = vertices.iter().map(|p| (p.x, p.y)).collect();
            chart
                .draw_series(std::iter::once(Polygon::new(
                    coords.clone(),
                    rgb(style.color).filled(),
                )))
                .map_err(canvas_error)?;
            if let Some(edge) = style.edge {
                let mut outline = coords;
                outline.push(outline[0]);
                chart
                    .draw_series(std::iter::once(PathElement::new(outline, rgb(edge).stroke_width(1))))
                    .map_err(canvas_error)?;
            }
        }
        Primitive::Line { from, to, style } => {
            if !(from.is_finite() && to.is_finite()) {
                return Ok(());
            }
            let stroke = rgb(style.color).stroke_width(pixels(style.width));
            for (a, b) in dash_segments(*from, *to, style.dash) {
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![(a.x, a.y), (b.x, b.y)],
                        stroke,
                    )))
                    .map_err(canvas_error)?;
            }
        }
        Primitive::Markers { points, style } => {
            for point in points.iter().filter(|p| p.is_finite()) {
                draw_marker(chart, *point, style)?;
            }
        }
    }
    Ok(())
}

fn draw_marker<DB: DrawingBackend>(chart: &mut Chart<'_, DB>, at: Point, style: &MarkerStyle) -> Result<()> {
    let radius = ((style.size / 2.0).round() as i32).max(1);
    let edge: ShapeStyle = rgb(style.edge).stroke_width(pixels(style.line_width));
    let face: Option<ShapeStyle> = style.face.map(|c| rgb(c).filled());

    match style.shape {
        MarkerShape::Circle => {
            if let Some(face) = face {
                chart
                    .draw_series(std::iter::once(
                        EmptyElement::at((at.x, at.y)) + Circle::new((0, 0), radius, face),
                    ))
                    .map_err(canvas_error)?;
            }
            chart
                .draw_series(std::iter::once(
                    EmptyElement::at((at.x, at.y)) + Circle::new((0, 0), radius, edge),
                ))
                .map_err(canvas_error)?;
        }
        MarkerShape::Square => {
            let corners = [(-radius, -radius), (radius, radius)];
            if let Some(face) = face {
                chart
                    .draw_series(std::iter::once(
                        EmptyElement::at((at.x, at.y)) + Rectangle::new(corners, face),
                    ))
                    .map_err(canvas_error)?;
            }
            chart
                .draw_series(std::iter::once(
                    EmptyElement::at((at.x, at.y)) + Rectangle::new(corners, edge),
                ))
                .map_err(canvas_error)?;
        }
    }
    Ok(())
}

fn evenly_spaced(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let steps = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| lo + (hi - lo) * i as f64 / steps)
        .collect()
}

/// Split a segment into the pieces actually inked for its dash pattern
fn dash_segments(from: Point, to: Point, dash: LineDash) -> Vec<(Point, Point)> {
    match dash {
        LineDash::Solid => vec![(from, to)],
        LineDash::Dotted => {
            let at = |t: f64| {
                Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
            };
            let step = 1.0 / (2 * DOT_SEGMENTS) as f64;
            (0..DOT_SEGMENTS)
                .map(|i| {
                    let start = 2.0 * i as f64 * step;
                    (at(start), at(start + step))
                })
                .collect()
        }
    }
}

impl Canvas for SvgCanvas {
    fn fill_polygon(&mut self, vertices: &[Point], style: &FillStyle) -> Result<Handle> {
        self.recording.fill_polygon(vertices, style)
    }

    fn line(&mut self, from: Point, to: Point, style: &LineStyle) -> Result<Handle> {
        self.recording.line(from, to, style)
    }

    fn markers(&mut self, points: &[Point], style: &MarkerStyle) -> Result<Handle> {
        self.recording.markers(points, style)
    }

    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.recording.set_x_limits(min, max)
    }

    fn set_x_ticks(&mut self, ticks: &[f64]) -> Result<()> {
        self.recording.set_x_ticks(ticks)
    }
}
