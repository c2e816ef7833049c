use serde::{Deserialize, Serialize};

use drawkit_core::geometry::{rotate_point, scale_point, shear_point, Point};
use drawkit_core::style::ShapeStyle;

use crate::renderer::{DrawSurface, Paint};

/// A triangle stored as three explicit vertices.
///
/// Construction builds an equilateral triangle from a drag diagonal; once
/// built, the vertex list is the only authoritative geometry — there is no
/// regeneration from a center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub points: [Point; 3],
    pub style: ShapeStyle,
    pub selected: bool,
}

impl Triangle {
    /// Builds an equilateral triangle inscribed on the drag gesture:
    /// center at the midpoint of the drag points, size half the drag
    /// distance, apex straight above the center.
    pub fn new(start: Point, end: Point) -> Self {
        let center = start.midpoint(&end);
        let size = start.distance_to(&end) / 2.0;

        Self {
            points: [
                Point::new(center.x, center.y - size),
                Point::new(center.x - size * 0.866, center.y + size * 0.5),
                Point::new(center.x + size * 0.866, center.y + size * 0.5),
            ],
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    /// Mean of the three vertices.
    pub fn centroid(&self) -> Point {
        let sum_x: f64 = self.points.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.points.iter().map(|p| p.y).sum();
        Point::new(sum_x / 3.0, sum_y / 3.0)
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Coarse test against the bounding box expanded by `tolerance`, not
    /// exact point-in-triangle containment.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let (min_x, min_y, max_x, max_y) = self.bounding_box();
        point.x >= min_x - tolerance
            && point.x <= max_x + tolerance
            && point.y >= min_y - tolerance
            && point.y <= max_y + tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.centroid());
        for p in &mut self.points {
            *p = scale_point(*p, pivot, factor);
        }
    }

    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.centroid());
        for p in &mut self.points {
            *p = rotate_point(*p, pivot, angle_rad);
        }
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
