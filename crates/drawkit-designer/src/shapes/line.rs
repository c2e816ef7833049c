use serde::{Deserialize, Serialize};

use drawkit_core::geometry::{rotate_point, scale_point, shear_point, Point};
use drawkit_core::style::ShapeStyle;

use crate::renderer::{DrawSurface, Paint};

/// A line defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub style: ShapeStyle,
    pub selected: bool,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Ring test against the segment: perpendicular distance to the
    /// carrying line within `tolerance`, clamped to the segment's bounding
    /// box expanded by `tolerance`. A zero-length line falls back to an
    /// endpoint distance test.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let a = self.end.y - self.start.y;
        let b = self.start.x - self.end.x;
        let c = self.end.x * self.start.y - self.start.x * self.end.y;

        let denominator = (a * a + b * b).sqrt();
        if denominator == 0.0 {
            return self.start.distance_to(point) < tolerance;
        }

        let distance = (a * point.x + b * point.y + c).abs() / denominator;

        let (min_x, min_y, max_x, max_y) = self.bounding_box();
        distance < tolerance
            && point.x >= min_x - tolerance
            && point.x <= max_x + tolerance
            && point.y >= min_y - tolerance
            && point.y <= max_y + tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.start.x += dx;
        self.start.y += dy;
        self.end.x += dx;
        self.end.y += dy;
    }

    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.start.midpoint(&self.end));
        self.start = scale_point(self.start, pivot, factor);
        self.end = scale_point(self.end, pivot, factor);
    }

    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.start.midpoint(&self.end));
        self.start = rotate_point(self.start, pivot, angle_rad);
        self.end = rotate_point(self.end, pivot, angle_rad);
    }

    pub fn shear(&mut self, shear_x: f64, shear_y: f64) {
        self.start = shear_point(self.start, shear_x, shear_y);
        self.end = shear_point(self.end, shear_x, shear_y);
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let paint = Paint::for_shape(&self.style, self.selected);
        surface.line(self.start, self.end, &paint);
    }
}
