//! The host drawing surface
//!
//! The renderer only needs five primitives from its host: filled polygons,
//! line segments, point markers and control of the x axis range and ticks.
//! Hosts implement [`Canvas`]; [`RecordingCanvas`] keeps everything in
//! memory in draw order.
//!
//! Calls are additive and order-sensitive: later primitives occlude earlier
//! ones. The renderer never creates or clears a surface.

use crate::palette::Color;
use notbox_core::Result;
use serde::Serialize;

/// Opaque identifier of a drawn primitive, for post-hoc styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Handle(u64);

impl Handle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A point in data coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FillStyle {
    pub color: Color,
    /// Outline color; `None` draws no outline
    pub edge: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineDash {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub dash: LineDash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerShape {
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Marker size in points
    pub size: f64,
    pub edge: Color,
    /// Face color; `None` draws an open marker
    pub face: Option<Color>,
    pub line_width: f64,
}

/// Host graphics layer consumed by the renderer
pub trait Canvas {
    /// Draw a filled polygon
    fn fill_polygon(&mut self, vertices: &[Point], style: &FillStyle) -> Result<Handle>;

    /// Draw a straight line segment
    fn line(&mut self, from: Point, to: Point, style: &LineStyle) -> Result<Handle>;

    /// Draw one marker per point as a single element
    fn markers(&mut self, points: &[Point], style: &MarkerStyle) -> Result<Handle>;

    /// Set the horizontal axis range
    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()>;

    /// Place horizontal tick marks
    fn set_x_ticks(&mut self, ticks: &[f64]) -> Result<()>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_polygon(&mut self, vertices: &[Point], style: &FillStyle) -> Result<Handle> {
        (**self).fill_polygon(vertices, style)
    }

    fn line(&mut self, from: Point, to: Point, style: &LineStyle) -> Result<Handle> {
        (**self).line(from, to, style)
    }

    fn markers(&mut self, points: &[Point], style: &MarkerStyle) -> Result<Handle> {
        (**self).markers(points, style)
    }

    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()> {
        (**self).set_x_limits(min, max)
    }

    fn set_x_ticks(&mut self, ticks: &[f64]) -> Result<()> {
        (**self).set_x_ticks(ticks)
    }
}

/// A drawn primitive as recorded by [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Polygon { vertices: Vec<Point>, style: FillStyle },
    Line { from: Point, to: Point, style: LineStyle },
    Markers { points: Vec<Point>, style: MarkerStyle },
}

impl Primitive {
    /// All points the primitive touches
    pub fn points(&self) -> Vec<Point> {
        match self {
            Primitive::Polygon { vertices, .. } => vertices.clone(),
            Primitive::Line { from, to, .. } => vec![*from, *to],
            Primitive::Markers { points, .. } => points.clone(),
        }
    }
}

/// In-memory canvas that keeps primitives in draw order
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    primitives: Vec<(Handle, Primitive)>,
    x_limits: Option<(f64, f64)>,
    x_ticks: Option<Vec<f64>>,
    next_id: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, primitive: Primitive) -> Handle {
        let handle = Handle(self.next_id);
        self.next_id += 1;
        self.primitives.push((handle, primitive));
        handle
    }

    /// Primitives in draw order
    pub fn primitives(&self) -> &[(Handle, Primitive)] {
        &self.primitives
    }

    /// Look up a primitive by handle
    pub fn get(&self, handle: Handle) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, p)| p)
    }

    /// Draw position of a handle; higher positions are drawn on top
    pub fn z_order(&self, handle: Handle) -> Option<usize> {
        self.primitives.iter().position(|(h, _)| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn x_limits(&self) -> Option<(f64, f64)> {
        self.x_limits
    }

    pub fn x_ticks(&self) -> Option<&[f64]> {
        self.x_ticks.as_deref()
    }

    /// Bounding box `((x_min, x_max), (y_min, y_max))` of all finite points
    pub fn extent(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self
            .primitives
            .iter()
            .flat_map(|(_, p)| p.points())
            .filter(Point::is_finite);

        let first = points.next()?;
        let init = ((first.x, first.x), (first.y, first.y));
        Some(points.fold(init, |((x0, x1), (y0, y1)), p| {
            ((x0.min(p.x), x1.max(p.x)), (y0.min(p.y), y1.max(p.y)))
        }))
    }
}

impl Canvas for RecordingCanvas {
    fn fill_polygon(&mut self, vertices: &[Point], style: &FillStyle) -> Result<Handle> {
        Ok(self.push(Primitive::Polygon {
            vertices: vertices.to_vec(),
            style: *style,
        }))
    }

    fn line(&mut self, from: Point, to: Point, style: &LineStyle) -> Result<Handle> {
        Ok(self.push(Primitive::Line {
            from,
            to,
            style: *style,
        }))
    }

    fn markers(&mut self, points: &[Point], style: &MarkerStyle) -> Result<Handle> {
        Ok(self.push(Primitive::Markers {
            points: points.to_vec(),
            style: *style,
        }))
    }

    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.x_limits = Some((min, max));
        Ok(())
    }

    fn set_x_ticks(&mut self, ticks: &[f64]) -> Result<()> {
        self.x_ticks = Some(ticks.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid() -> LineStyle {
        LineStyle {
            color: Color::BLACK,
            width: 1.0,
            dash: LineDash::Solid,
        }
    }

    #[test]
    fn test_recording_keeps_draw_order() {
        let mut canvas = RecordingCanvas::new();
        let a = canvas
            .line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &solid())
            .unwrap();
        let b = canvas
            .fill_polygon(
                &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
                &FillStyle {
                    color: Color::RED,
                    edge: None,
                },
            )
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(canvas.len(), 2);
        assert!(canvas.z_order(a) < canvas.z_order(b));
        assert!(matches!(canvas.get(b), Some(Primitive::Polygon { .. })));
        assert!(canvas.get(Handle::new(99)).is_none());
    }

    #[test]
    fn test_axis_state() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.x_limits(), None);
        canvas.set_x_limits(0.0, 4.0).unwrap();
        canvas.set_x_ticks(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(canvas.x_limits(), Some((0.0, 4.0)));
        assert_eq!(canvas.x_ticks(), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_extent_skips_non_finite() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.extent(), None);
        canvas
            .line(Point::new(1.0, f64::NAN), Point::new(1.0, f64::NAN), &solid())
            .unwrap();
        assert_eq!(canvas.extent(), None);
        canvas
            .line(Point::new(1.0, -2.0), Point::new(3.0, 5.0), &solid())
            .unwrap();
        assert_eq!(canvas.extent(), Some(((1.0, 3.0), (-2.0, 5.0))));
    }

    #[test]
    fn test_mut_ref_forwarding() {
        fn draw<C: Canvas>(mut canvas: C) -> Handle {
            canvas
                .line(Point::new(0.0, 0.0), Point::new(0.0, 1.0), &solid())
                .unwrap()
        }
        let mut canvas = RecordingCanvas::new();
        let handle = draw(&mut canvas);
        assert!(canvas.get(handle).is_some());
    }
}
