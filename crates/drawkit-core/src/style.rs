//! Visual style model: stroke/fill colors, widths, and dash patterns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    /// Formats as a lowercase `#rrggbb` hex triplet.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stroke dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Returns the on/off dash lengths, or `None` for a solid stroke.
    pub fn dash_pattern(&self) -> Option<(f64, f64)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((5.0, 5.0)),
            LineStyle::Dotted => Some((2.0, 2.0)),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::Solid
    }
}

/// The complete visual style applied to a shape at creation time.
///
/// The drawing session owns a current `ShapeStyle` and passes it into the
/// shape factory; shapes never consult shared mutable state for styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke: Color,
    /// `None` renders the interior unfilled.
    pub fill: Option<Color>,
    pub stroke_width: u32,
    pub line_style: LineStyle,
}

impl ShapeStyle {
    pub fn new(stroke: Color, fill: Option<Color>, stroke_width: u32, line_style: LineStyle) -> Self {
        Self {
            stroke,
            fill,
            // Zero-width strokes are invisible on every backend.
            stroke_width: stroke_width.max(1),
            line_style,
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: None,
            stroke_width: 2,
            line_style: LineStyle::Solid,
        }
    }
}
