use serde::{Deserialize, Serialize};

use drawkit_core::geometry::{rotate_point, scale_point, shear_point, Point};
use drawkit_core::style::ShapeStyle;

use super::polygon::Polygon;
use crate::renderer::{DrawSurface, Paint};

/// An axis-aligned rectangle defined by two opposite corners.
///
/// Corners are normalized once at construction so that `x1 <= x2` and
/// `y1 <= y2`; transforms may later denormalize them (a negative scale
/// factor mirrors the corners) and no renormalization takes place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: ShapeStyle,
    pub selected: bool,
}

impl Rectangle {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    /// The four corners in drawing order.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x1, self.y2),
        ]
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Ring test: the point must lie within `tolerance` of one of the four
    /// border segments, not merely inside the fill area.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let (x, y) = (point.x, point.y);
        let within_x = x >= self.x1 - tolerance && x <= self.x2 + tolerance;
        let within_y = y >= self.y1 - tolerance && y <= self.y2 + tolerance;

        let on_top = within_x && y >= self.y1 - tolerance && y <= self.y1 + tolerance;
        let on_bottom = within_x && y >= self.y2 - tolerance && y <= self.y2 + tolerance;
        let on_left = within_y && x >= self.x1 - tolerance && x <= self.x1 + tolerance;
        let on_right = within_y && x >= self.x2 - tolerance && x <= self.x2 + tolerance;

        on_top || on_bottom || on_left || on_right
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x1 += dx;
        self.y1 += dy;
        self.x2 += dx;
        self.y2 += dy;
    }

    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.center());
        let a = scale_point(Point::new(self.x1, self.y1), pivot, factor);
        let b = scale_point(Point::new(self.x2, self.y2), pivot, factor);
        self.x1 = a.x;
        self.y1 = a.y;
        self.x2 = b.x;
        self.y2 = b.y;
    }

    /// Rotates the four corners and stores the axis-aligned bounding box
    /// of the result. The rectangle stays axis-aligned: rotation grows it
    /// to the rotated-corner extents instead of producing an oriented
    /// rectangle.
    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.center());

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for corner in self.corners() {
            let p = rotate_point(corner, pivot, angle_rad);
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        self.x1 = min_x;
        self.y1 = min_y;
        self.x2 = max_x;
        self.y2 = max_y;
    }

    /// Shears the four corners into a quadrilateral. The caller replaces
    /// the variant with the returned polygon.
    pub fn to_sheared_polygon(&self, shear_x: f64, shear_y: f64) -> Polygon {
        let points = self
            .corners()
            .iter()
            .map(|&c| shear_point(c, shear_x, shear_y))
            .collect();
        let mut polygon = Polygon::new(points);
        polygon.style = self.style;
        polygon.selected = self.selected;
        polygon
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let paint = Paint::for_shape(&self.style, self.selected);
        surface.polygon(&self.corners(), &paint);
    }
}
