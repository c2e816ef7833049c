//! Geometric primitives shared by every shape variant.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Returns the point halfway between this point and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Rotates `p` around `pivot` by `angle_rad` radians (counter-clockwise
/// in a y-up coordinate system).
pub fn rotate_point(p: Point, pivot: Point, angle_rad: f64) -> Point {
    if angle_rad.abs() < 1e-12 {
        return p;
    }
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point {
        x: pivot.x + dx * cos_a - dy * sin_a,
        y: pivot.y + dx * sin_a + dy * cos_a,
    }
}

/// Scales `p` away from (or towards) `pivot` by `factor`.
pub fn scale_point(p: Point, pivot: Point, factor: f64) -> Point {
    Point {
        x: pivot.x + (p.x - pivot.x) * factor,
        y: pivot.y + (p.y - pivot.y) * factor,
    }
}

/// Shears `p`: `x' = x + shear_x * y`, `y' = y + shear_y * x`.
/// Both components are computed from the original coordinates.
pub fn shear_point(p: Point, shear_x: f64, shear_y: f64) -> Point {
    Point {
        x: p.x + shear_x * p.y,
        y: p.y + shear_y * p.x,
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates a bounding box from its extents.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grows the box by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Bounds {
        Bounds::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    /// Tests whether the point lies inside the box (inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl From<(f64, f64, f64, f64)> for Bounds {
    fn from(t: (f64, f64, f64, f64)) -> Self {
        Bounds::new(t.0, t.1, t.2, t.3)
    }
}
