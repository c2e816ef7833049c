use serde::{Deserialize, Serialize};

use drawkit_core::geometry::{rotate_point, scale_point, shear_point, Point};
use drawkit_core::style::ShapeStyle;

use crate::renderer::{DrawSurface, Paint};

/// A freeform polygon over an ordered vertex list.
///
/// The outline closes automatically: edge `i` runs to vertex
/// `(i + 1) % n`. Sheared circles, ellipses, and rectangles end up here,
/// so any vertex count — including zero — is representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub style: ShapeStyle,
    pub selected: bool,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            style: ShapeStyle::default(),
            selected: false,
        }
    }

    /// Mean of the vertices; `None` for an empty polygon.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let sum_x: f64 = self.points.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.points.iter().map(|p| p.y).sum();
        Some(Point::new(sum_x / n, sum_y / n))
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        if self.points.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }
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

    /// Edge proximity test: true when the point lies within `tolerance` of
    /// the infinite line through any non-degenerate edge.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let n = self.points.len();
        for i in 0..n {
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % n];

            if p1 == p2 {
                continue;
            }

            let a = p2.y - p1.y;
            let b = p1.x - p2.x;
            let c = p2.x * p1.y - p1.x * p2.y;

            if a == 0.0 && b == 0.0 {
                continue;
            }

            let distance = (a * point.x + b * point.y + c).abs() / (a * a + b * b).sqrt();
            if distance < tolerance {
                return true;
            }
        }
        false
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Scales about `pivot`, defaulting to the vertex centroid. A polygon
    /// with no vertices has no centroid and is left untouched.
    pub fn scale(&mut self, factor: f64, pivot: Option<Point>) {
        let Some(pivot) = pivot.or_else(|| self.centroid()) else {
            return;
        };
        for p in &mut self.points {
            *p = scale_point(*p, pivot, factor);
        }
    }

    pub fn rotate(&mut self, angle_rad: f64, pivot: Option<Point>) {
        let Some(pivot) = pivot.or_else(|| self.centroid()) else {
            return;
        };
        for p in &mut self.points {
            *p = rotate_point(*p, pivot, angle_rad);
        }
    }

    pub fn shear(&mut self, shear_x: f64, shear_y: f64) {
        for p in &mut self.points {
            *p = shear_point(*p, shear_x, shear_y);
        }
    }

    /// Freeform polygons draw as strokes along each edge, including the
    /// closing edge; the interior is never filled.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let n = self.points.len();
        if n < 2 {
            return;
        }
        let paint = Paint::for_shape(&self.style, self.selected);
        for i in 0..n {
            surface.line(self.points[i], self.points[(i + 1) % n], &paint);
        }
    }
}
