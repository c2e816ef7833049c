//! Geometric shapes for the drawing editor.
//!
//! Every shape is one variant of the closed [`Shape`] sum type; each
//! operation (transform, hit-test, bounds, render) dispatches with a single
//! `match`. A shape's rendered geometry is always derivable from its own
//! fields, without external state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::renderer::DrawSurface;

mod circle;
mod ellipse;
mod hexagon;
mod line;
mod pentagon;
mod polygon;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use hexagon::Hexagon;
pub use line::Line;
pub use pentagon::Pentagon;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

pub use drawkit_core::geometry::Point;
pub use drawkit_core::style::ShapeStyle;

/// Number of vertices used when tessellating a curved shape into a polygon.
pub const TESSELLATION_SEGMENTS: usize = 36;

/// Types of shapes that can be drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Line,
    Circle,
    Rectangle,
    Ellipse,
    Triangle,
    Pentagon,
    Hexagon,
    Polygon,
}

/// Enum wrapper for all drawable shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Pentagon(Pentagon),
    Hexagon(Hexagon),
    Polygon(Polygon),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Pentagon(_) => ShapeType::Pentagon,
            Shape::Hexagon(_) => ShapeType::Hexagon,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.shape_type() {
            ShapeType::Line => "Line",
            ShapeType::Circle => "Circle",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Triangle => "Triangle",
            ShapeType::Pentagon => "Pentagon",
            ShapeType::Hexagon => "Hexagon",
            ShapeType::Polygon => "Polygon",
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => &s.style,
            Shape::Circle(s) => &s.style,
            Shape::Rectangle(s) => &s.style,
            Shape::Ellipse(s) => &s.style,
            Shape::Triangle(s) => &s.style,
            Shape::Pentagon(s) => &s.style,
            Shape::Hexagon(s) => &s.style,
            Shape::Polygon(s) => &s.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Line(s) => &mut s.style,
            Shape::Circle(s) => &mut s.style,
            Shape::Rectangle(s) => &mut s.style,
            Shape::Ellipse(s) => &mut s.style,
            Shape::Triangle(s) => &mut s.style,
            Shape::Pentagon(s) => &mut s.style,
            Shape::Hexagon(s) => &mut s.style,
            Shape::Polygon(s) => &mut s.style,
        }
    }

    pub fn selected(&self) -> bool {
        match self {
            Shape::Line(s) => s.selected,
            Shape::Circle(s) => s.selected,
            Shape::Rectangle(s) => s.selected,
            Shape::Ellipse(s) => s.selected,
            Shape::Triangle(s) => s.selected,
            Shape::Pentagon(s) => s.selected,
            Shape::Hexagon(s) => s.selected,
            Shape::Polygon(s) => s.selected,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Line(s) => s.selected = selected,
            Shape::Circle(s) => s.selected = selected,
            Shape::Rectangle(s) => s.selected = selected,
            Shape::Ellipse(s) => s.selected = selected,
            Shape::Triangle(s) => s.selected = selected,
            Shape::Pentagon(s) => s.selected = selected,
            Shape::Hexagon(s) => s.selected = selected,
            Shape::Polygon(s) => s.selected = selected,
        }
    }

    /// Returns `(min_x, min_y, max_x, max_y)` of the defining geometry.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Line(s) => s.bounding_box(),
            Shape::Circle(s) => s.bounding_box(),
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Ellipse(s) => s.bounding_box(),
            Shape::Triangle(s) => s.bounding_box(),
            Shape::Pentagon(s) => s.bounding_box(),
            Shape::Hexagon(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
        }
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.contains_point(point, tolerance),
            Shape::Circle(s) => s.contains_point(point, tolerance),
            Shape::Rectangle(s) => s.contains_point(point, tolerance),
            Shape::Ellipse(s) => s.contains_point(point, tolerance),
            Shape::Triangle(s) => s.contains_point(point, tolerance),
            Shape::Pentagon(s) => s.contains_point(point, tolerance),
            Shape::Hexagon(s) => s.contains_point(point, tolerance),
            Shape::Polygon(s) => s.contains_point(point, tolerance),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Triangle(s) => s.translate(dx, dy),
            Shape::Pentagon(s) => s.translate(dx, dy),
            Shape::Hexagon(s) => s.translate(dx, dy),
            Shape::Polygon(s) => s.translate(dx, dy),
        }
    }

    /// Scales about `pivot`, or about the variant's own center when `None`.
    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        match self {
            Shape::Line(s) => s.scale(factor, pivot),
            Shape::Circle(s) => s.scale(factor, pivot),
            Shape::Rectangle(s) => s.scale(factor, pivot),
            Shape::Ellipse(s) => s.scale(factor, pivot),
            Shape::Triangle(s) => s.scale(factor, pivot),
            Shape::Pentagon(s) => s.scale(factor, pivot),
            Shape::Hexagon(s) => s.scale(factor, pivot),
            Shape::Polygon(s) => s.scale(factor, pivot),
        }
    }

    /// Rotates by `angle_rad` about `pivot`, or about the variant's own
    /// center when `None`. Radius-only shapes are rotation-invariant about
    /// themselves, so a pivot-less rotate leaves them untouched.
    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        match self {
            Shape::Line(s) => s.rotate(angle_rad, pivot),
            Shape::Circle(s) => s.rotate(angle_rad, pivot),
            Shape::Rectangle(s) => s.rotate(angle_rad, pivot),
            Shape::Ellipse(s) => s.rotate(angle_rad, pivot),
            Shape::Triangle(s) => s.rotate(angle_rad, pivot),
            Shape::Pentagon(s) => s.rotate(angle_rad, pivot),
            Shape::Hexagon(s) => s.rotate(angle_rad, pivot),
            Shape::Polygon(s) => s.rotate(angle_rad, pivot),
        }
    }

    /// Whether `shear` keeps a usable result for this variant.
    ///
    /// Circles, ellipses, and rectangles tessellate on shear, so every
    /// current variant reports `true`; the capability stays queryable so
    /// callers can notify instead of relying on a silent no-op.
    pub fn supports_shear(&self) -> bool {
        match self {
            Shape::Line(_) => true,
            Shape::Circle(_) => true,
            Shape::Rectangle(_) => true,
            Shape::Ellipse(_) => true,
            Shape::Triangle(_) => true,
            Shape::Pentagon(_) => true,
            Shape::Hexagon(_) => true,
            Shape::Polygon(_) => true,
        }
    }

    /// Applies `x' = x + shear_x * y`, `y' = y + shear_y * x` to the
    /// defining geometry.
    ///
    /// Point-native variants shear their vertex list in place and keep
    /// their identity. A circle, ellipse, or rectangle has no point-list
    /// representation to shear, so it is tessellated and the variant is
    /// replaced with [`Shape::Polygon`] — a one-way transition; the style
    /// and selection flag carry over.
    pub fn shear(&mut self, shear_x: f64, shear_y: f64) {
        match self {
            Shape::Line(s) => s.shear(shear_x, shear_y),
            Shape::Circle(s) => {
                debug!("tessellating Circle into Polygon for shear");
                *self = Shape::Polygon(s.to_sheared_polygon(shear_x, shear_y));
            }
            Shape::Rectangle(s) => {
                debug!("converting Rectangle into Polygon for shear");
                *self = Shape::Polygon(s.to_sheared_polygon(shear_x, shear_y));
            }
            Shape::Ellipse(s) => {
                debug!("tessellating Ellipse into Polygon for shear");
                *self = Shape::Polygon(s.to_sheared_polygon(shear_x, shear_y));
            }
            Shape::Triangle(s) => s.shear(shear_x, shear_y),
            Shape::Pentagon(s) => s.shear(shear_x, shear_y),
            Shape::Hexagon(s) => s.shear(shear_x, shear_y),
            Shape::Polygon(s) => s.shear(shear_x, shear_y),
        }
    }

    /// Draws the shape onto the surface using its current style; selected
    /// shapes are stroked with the highlight color.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match self {
            Shape::Line(s) => s.render(surface),
            Shape::Circle(s) => s.render(surface),
            Shape::Rectangle(s) => s.render(surface),
            Shape::Ellipse(s) => s.render(surface),
            Shape::Triangle(s) => s.render(surface),
            Shape::Pentagon(s) => s.render(surface),
            Shape::Hexagon(s) => s.render(surface),
            Shape::Polygon(s) => s.render(surface),
        }
    }
}
