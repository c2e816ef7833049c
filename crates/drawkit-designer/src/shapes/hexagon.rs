use serde::{Deserialize, Serialize};

use drawkit_core::geometry::{rotate_point, scale_point, shear_point, Point};
use drawkit_core::style::ShapeStyle;

use crate::renderer::{DrawSurface, Paint};

/// A regular hexagon stored as center + radius plus the six derived
/// vertices, starting on the +x axis.
///
/// Same derived-vertex model as [`super::Pentagon`]: scale and rotate
/// regenerate the vertices from center and radius, so a shear (which moves
/// only the vertices) survives no subsequent scale or rotate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    pub center: Point,
    pub radius: f64,
    pub points: Vec<Point>,
    pub style: ShapeStyle,
    pub selected: bool,
}

impl Hexagon {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            points: Self::generate_points(center, radius),
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    /// Six vertices at equal angular spacing, starting at 0 degrees.
    fn generate_points(center: Point, radius: f64) -> Vec<Point> {
        (0..6)
            .map(|i| {
                let angle = i as f64 * 2.0 * std::f64::consts::PI / 6.0;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect()
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Ring test against the circumscribed circle, at twice the standard
    /// tolerance.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let distance = self.center.distance_to(point);
        (distance - self.radius).abs() < 2.0 * tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        if let Some(pivot) = pivot {
            self.center = scale_point(self.center, pivot, factor);
        }
        self.radius *= factor;
        self.points = Self::generate_points(self.center, self.radius);
    }

    /// Rotation about the own center regenerates the canonical vertex
    /// orientation; an external pivot relocates the center first.
    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        if let Some(pivot) = pivot {
            self.center = rotate_point(self.center, pivot, angle_rad);
        }
        self.points = Self::generate_points(self.center, self.radius);
    }

    pub fn shear(&mut self, shear_x: f64, shear_y: f64) {
        for p in &mut self.points {
            *p = shear_point(*p, shear_x, shear_y);
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let paint = Paint::for_shape(&self.style, self.selected);
        surface.polygon(&self.points, &paint);
    }
}
