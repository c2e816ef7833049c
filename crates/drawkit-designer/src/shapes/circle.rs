use serde::{Deserialize, Serialize};

use drawkit_core::geometry::{rotate_point, scale_point, shear_point, Point};
use drawkit_core::style::ShapeStyle;

use super::polygon::Polygon;
use super::TESSELLATION_SEGMENTS;
use crate::renderer::{DrawSurface, Paint};

/// A circle defined by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub style: ShapeStyle,
    pub selected: bool,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Ring test: the point must be near the circumference, not anywhere
    /// in the disk.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let distance = self.center.distance_to(point);
        (distance - self.radius).abs() < tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    /// Scales the radius; with an explicit pivot the center is relocated
    /// as well.
    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        if let Some(pivot) = pivot {
            self.center = scale_point(self.center, pivot, factor);
        }
        self.radius *= factor;
    }

    /// Rotating a circle about its own center changes nothing; an external
    /// pivot relocates the center.
    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        if let Some(pivot) = pivot {
            self.center = rotate_point(self.center, pivot, angle_rad);
        }
    }

    /// Tessellates the circumference and shears the resulting vertex list.
    /// The caller replaces the variant with the returned polygon.
    pub fn to_sheared_polygon(&self, shear_x: f64, shear_y: f64) -> Polygon {
        let mut points = Vec::with_capacity(TESSELLATION_SEGMENTS);
        for i in 0..TESSELLATION_SEGMENTS {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (TESSELLATION_SEGMENTS as f64);
            let p = Point::new(
                self.center.x + self.radius * theta.cos(),
                self.center.y + self.radius * theta.sin(),
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
        surface.ellipse(self.center, self.radius, self.radius, &paint);
    }
}
