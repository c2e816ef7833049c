use serde::{Deserialize, Serialize};

use drawkit_core::geometry::{rotate_point, scale_point, shear_point, Point};
use drawkit_core::style::ShapeStyle;

use super::polygon::Polygon;
use super::TESSELLATION_SEGMENTS;
use crate::renderer::{DrawSurface, Paint};

/// An axis-aligned ellipse defined by its center and full width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub style: ShapeStyle,
    pub selected: bool,
}

impl Ellipse {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.width / 2.0,
            self.center.y - self.height / 2.0,
            self.center.x + self.width / 2.0,
            self.center.y + self.height / 2.0,
        )
    }

    /// Filled-region test on the normalized ellipse equation. A zero-area
    /// ellipse contains nothing.
    pub fn contains_point(&self, point: &Point, _tolerance: f64) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        let dx = (point.x - self.center.x) / (self.width / 2.0);
        let dy = (point.y - self.center.y) / (self.height / 2.0);
        dx * dx + dy * dy <= 1.0
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        if let Some(pivot) = pivot {
            self.center = scale_point(self.center, pivot, factor);
        }
        self.width *= factor;
        self.height *= factor;
    }

    /// Rotating about the own center is a no-op; an external pivot
    /// relocates the center.
    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        if let Some(pivot) = pivot {
            self.center = rotate_point(self.center, pivot, angle_rad);
        }
    }

    /// Tessellates the outline and shears the resulting vertex list. The
    /// caller replaces the variant with the returned polygon.
    pub fn to_sheared_polygon(&self, shear_x: f64, shear_y: f64) -> Polygon {
        let rx = self.width / 2.0;
        let ry = self.height / 2.0;
        let mut points = Vec::with_capacity(TESSELLATION_SEGMENTS);
        for i in 0..TESSELLATION_SEGMENTS {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (TESSELLATION_SEGMENTS as f64);
            let p = Point::new(
                self.center.x + rx * theta.cos(),
                self.center.y + ry * theta.sin(),
            );
            points.push(shear_point(p, shear_x, shear_y));
        }
        let mut polygon = Polygon::new(points);
        polygon.style = self.style;
        polygon.selected = self.selected;
        polygon
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let paint = Paint::for_shape(&self.style, self.selected);
        surface.ellipse(self.center, self.width / 2.0, self.height / 2.0, &paint);
    }
}
