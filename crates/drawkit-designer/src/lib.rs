//! # DrawKit Designer
//!
//! This crate provides the shape model and transform engine of an
//! interactive 2D vector drawing editor. It combines primitive creation,
//! affine transforms, hit-testing, and rendering dispatch into a single
//! editing core that a UI layer drives with pointer gestures.
//!
//! ## Core Components
//!
//! ### Shape Model
//! - **Shapes**: Lines, circles, rectangles, ellipses, triangles,
//!   pentagons, hexagons, and freeform polygons
//! - **Styles**: Stroke/fill colors, stroke widths, and dash patterns
//!   applied at creation time
//! - **Canvas**: The drawing session owning the ordered shape collection,
//!   the active tool, and the current style
//!
//! ### Transform Engine
//! - **Translate/Scale/Rotate**: Pivot-aware affine transforms with
//!   per-variant default pivots
//! - **Shear**: Point-native shapes shear their vertices in place;
//!   circles, ellipses, and rectangles tessellate into polygons
//!
//! ### Interaction
//! - **Hit-Testing**: Per-variant containment used for click selection
//!   and cursor affordance
//! - **Selection**: Single-selection model resolved topmost-first
//! - **Rendering**: Painter's-algorithm pass over an abstract surface
//!
//! ## Architecture
//!
//! ```text
//! Canvas (Drawing session)
//!   ├── Shapes (ordered collection, z-order = sequence order)
//!   ├── Tool + ShapeStyle (creation state)
//!   └── Selection (at most one shape)
//!
//! Shape (closed sum type)
//!   ├── Transforms (translate/scale/rotate/shear)
//!   ├── Hit-testing + bounds
//!   └── Rendering (DrawSurface primitives)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drawkit_designer::canvas::{Canvas, Tool};
//! use drawkit_designer::shapes::Point;
//!
//! let mut canvas = Canvas::new();
//! canvas.set_tool(Tool::Rectangle);
//! canvas.place_shape(Point::new(10.0, 10.0), Point::new(50.0, 50.0));
//!
//! canvas.select_at(Point::new(10.0, 30.0));
//! canvas.translate_selected(5.0, 5.0).unwrap();
//! ```

pub mod canvas;
pub mod renderer;
pub mod shapes;

pub use canvas::{create_polygon, create_shape, Canvas, Tool, HIT_TOLERANCE};
pub use renderer::{DrawSurface, Paint, SvgSurface};
pub use shapes::{
    Circle, Ellipse, Hexagon, Line, Pentagon, Point, Polygon, Rectangle, Shape, ShapeType,
    Triangle,
};
