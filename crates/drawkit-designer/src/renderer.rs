//! Rendering dispatch onto an abstract drawing surface.
//!
//! The editor core never talks to a widget toolkit. Shapes describe
//! themselves through the three primitives of [`DrawSurface`]; the UI
//! collaborator supplies the concrete surface. [`SvgSurface`] is the
//! bundled reference implementation.

use drawkit_core::geometry::Point;
use drawkit_core::style::{Color, ShapeStyle};
use std::fmt::Write;

/// Resolved stroke/fill parameters for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub stroke: Color,
    pub fill: Option<Color>,
    pub width: u32,
    /// On/off dash lengths; `None` for a solid stroke.
    pub dash: Option<(f64, f64)>,
}

impl Paint {
    /// Resolves a shape's style for drawing. Selected shapes are stroked
    /// with the highlight color.
    pub fn for_shape(style: &ShapeStyle, selected: bool) -> Self {
        Self {
            stroke: if selected { Color::RED } else { style.stroke },
            fill: style.fill,
            width: style.stroke_width,
            dash: style.line_style.dash_pattern(),
        }
    }
}

/// An abstract drawing surface.
///
/// Implementations draw in the same coordinate space as the shape model.
/// The surface is write-only: rendering is a full, read-only pass over the
/// shape collection and never mutates it.
pub trait DrawSurface {
    /// Draws a single stroked segment. `paint.fill` does not apply.
    fn line(&mut self, from: Point, to: Point, paint: &Paint);

    /// Draws a closed polygon outline, filled when `paint.fill` is set.
    fn polygon(&mut self, vertices: &[Point], paint: &Paint);

    /// Draws an axis-aligned ellipse outline, filled when `paint.fill`
    /// is set.
    fn ellipse(&mut self, center: Point, rx: f64, ry: f64, paint: &Paint);
}

/// [`DrawSurface`] implementation producing an SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    elements: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated elements without the document wrapper.
    pub fn elements(&self) -> &str {
        &self.elements
    }

    /// Wraps the accumulated elements into a complete SVG document.
    pub fn finish(self, width: u32, height: u32) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            width, height, width, height, self.elements
        )
    }

    fn stroke_attrs(paint: &Paint) -> String {
        let mut attrs = format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            paint.stroke, paint.width
        );
        if let Some((on, off)) = paint.dash {
            let _ = write!(attrs, " stroke-dasharray=\"{},{}\"", on, off);
        }
        attrs
    }

    fn fill_attr(paint: &Paint) -> String {
        match paint.fill {
            Some(color) => format!("fill=\"{}\"", color),
            None => "fill=\"none\"".to_string(),
        }
    }
}

impl DrawSurface for SvgSurface {
    fn line(&mut self, from: Point, to: Point, paint: &Paint) {
        let _ = writeln!(
            self.elements,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} />",
            from.x,
            from.y,
            to.x,
            to.y,
            Self::stroke_attrs(paint)
        );
    }

    fn polygon(&mut self, vertices: &[Point], paint: &Paint) {
        let points = vertices
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.elements,
            "<polygon points=\"{}\" {} {} />",
            points,
            Self::stroke_attrs(paint),
            Self::fill_attr(paint)
        );
    }

    fn ellipse(&mut self, center: Point, rx: f64, ry: f64, paint: &Paint) {
        let _ = writeln!(
            self.elements,
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {} {} />",
            center.x,
            center.y,
            rx,
            ry,
            Self::stroke_attrs(paint),
            Self::fill_attr(paint)
        );
    }
}
