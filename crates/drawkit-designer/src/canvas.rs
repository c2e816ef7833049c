//! The drawing session: ordered shape collection, tool state, and
//! transform dispatch.
//!
//! `Canvas` is the single owner of the drawing. The UI collaborator
//! resolves pointer gestures into the calls below and asks the canvas to
//! render itself; everything here executes synchronously on the calling
//! thread.

use tracing::{debug, warn};

use drawkit_core::error::{DesignError, Result};
use drawkit_core::geometry::{Bounds, Point};
use drawkit_core::style::ShapeStyle;

use crate::renderer::DrawSurface;
use crate::shapes::{
    Circle, Ellipse, Hexagon, Line, Pentagon, Polygon, Rectangle, Shape, Triangle,
};

/// Hit-test tolerance in canvas units, shared by selection and cursor
/// affordance queries.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Offset applied to duplicated shapes so the copy is visibly apart from
/// the original.
const DUPLICATE_OFFSET: f64 = 20.0;

/// The active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pointer,
    Line,
    Circle,
    Rectangle,
    Ellipse,
    Triangle,
    Pentagon,
    Hexagon,
    Polygon,
}

/// Creates a shape from a completed two-point drag gesture.
///
/// Returns `None` for tools that do not produce a shape this way
/// (`Pointer` selects; `Polygon` accumulates clicks and closes via
/// [`create_polygon`]).
pub fn create_shape(tool: Tool, start: Point, end: Point, style: &ShapeStyle) -> Option<Shape> {
    let mut shape = match tool {
        Tool::Line => Shape::Line(Line::new(start, end)),
        Tool::Circle => Shape::Circle(Circle::new(start, start.distance_to(&end))),
        Tool::Rectangle => Shape::Rectangle(Rectangle::new(start, end)),
        Tool::Ellipse => Shape::Ellipse(Ellipse::new(
            start.midpoint(&end),
            (end.x - start.x).abs(),
            (end.y - start.y).abs(),
        )),
        Tool::Triangle => Shape::Triangle(Triangle::new(start, end)),
        Tool::Pentagon => Shape::Pentagon(Pentagon::new(start, start.distance_to(&end))),
        Tool::Hexagon => Shape::Hexagon(Hexagon::new(start, start.distance_to(&end))),
        Tool::Pointer | Tool::Polygon => return None,
    };
    *shape.style_mut() = *style;
    Some(shape)
}

/// Creates a freeform polygon from accumulated click points.
///
/// A close trigger with fewer than three points is a defined no-op and
/// returns `None`.
pub fn create_polygon(points: &[Point], style: &ShapeStyle) -> Option<Shape> {
    if points.len() < 3 {
        return None;
    }
    let mut shape = Shape::Polygon(Polygon::new(points.to_vec()));
    *shape.style_mut() = *style;
    Some(shape)
}

/// Canvas state managing shapes and drawing operations.
///
/// The shape sequence defines both paint order (later entries draw on top)
/// and hit-test priority (searched last-to-first, so the topmost match
/// wins). At most one shape is selected at a time.
#[derive(Debug, Clone)]
pub struct Canvas {
    shapes: Vec<Shape>,
    tool: Tool,
    /// The current drawing style, applied to shapes at creation time.
    style: ShapeStyle,
    /// Click points accumulated by the polygon tool; preview-only until
    /// the gesture closes.
    pending_vertices: Vec<Point>,
}

impl Canvas {
    /// Creates an empty canvas with the pointer tool and default style.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            tool: Tool::Pointer,
            style: ShapeStyle::default(),
            pending_vertices: Vec::new(),
        }
    }

    /// Sets the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Gets the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The style applied to newly created shapes.
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    /// The shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Appends a shape on top of the drawing.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes and returns the shape at `index`, shifting later shapes
    /// down one z-level. Returns `None` for an out-of-range index.
    pub fn remove_shape(&mut self, index: usize) -> Option<Shape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// Removes every shape and any pending polygon points.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.pending_vertices.clear();
    }

    /// Completes a drag gesture with the active tool, appending the new
    /// shape with the current style. Returns `false` when the tool does
    /// not create shapes from drags.
    pub fn place_shape(&mut self, start: Point, end: Point) -> bool {
        match create_shape(self.tool, start, end, &self.style) {
            Some(shape) => {
                debug!(shape = shape.name(), "placing shape");
                self.shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// Accumulates a polygon click point. Ignored unless the polygon tool
    /// is active.
    pub fn push_vertex(&mut self, point: Point) {
        if self.tool == Tool::Polygon {
            self.pending_vertices.push(point);
        }
    }

    /// The accumulated polygon points, for gesture preview.
    pub fn pending_vertices(&self) -> &[Point] {
        &self.pending_vertices
    }

    /// Closes the pending polygon and appends it.
    ///
    /// With fewer than three accumulated points the close trigger is a
    /// no-op: nothing is created and the points stay accumulated.
    pub fn close_polygon(&mut self) -> bool {
        match create_polygon(&self.pending_vertices, &self.style) {
            Some(shape) => {
                self.shapes.push(shape);
                self.pending_vertices.clear();
                true
            }
            None => {
                warn!(
                    count = self.pending_vertices.len(),
                    "polygon needs at least 3 points; close ignored"
                );
                false
            }
        }
    }

    /// Returns the index of the topmost shape containing the point, if any.
    pub fn shape_at(&self, point: Point) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|s| s.contains_point(&point, HIT_TOLERANCE))
    }

    /// Resolves a selection click: deselects everything, then selects the
    /// topmost shape under the point. Returns the selected index, or
    /// `None` when the click lands on empty canvas.
    pub fn select_at(&mut self, point: Point) -> Option<usize> {
        let hit = self.shape_at(point);
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
        if let Some(index) = hit {
            self.shapes[index].set_selected(true);
        }
        hit
    }

    /// Clears the selection flag on every shape.
    pub fn deselect_all(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
    }

    /// Index of the selected shape, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.shapes.iter().rposition(|s| s.selected())
    }

    /// The selected shape, if any.
    pub fn selected(&self) -> Option<&Shape> {
        self.selected_index().map(|i| &self.shapes[i])
    }

    /// Bounding box of the selected shape, used to present transform
    /// dialogs and resolve their pivots.
    pub fn selection_bounds(&self) -> Option<Bounds> {
        self.selected().map(|s| Bounds::from(s.bounding_box()))
    }

    /// Deletes the selected shape. Returns `false` with no selection.
    pub fn delete_selected(&mut self) -> bool {
        match self.selected_index() {
            Some(index) => {
                self.shapes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Duplicates the selected shape: an independent deep copy, offset so
    /// it is visibly apart, deselected, and appended on top.
    pub fn duplicate_selected(&mut self) -> bool {
        match self.selected_index() {
            Some(index) => {
                let mut copy = self.shapes[index].clone();
                copy.translate(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
                copy.set_selected(false);
                self.shapes.push(copy);
                true
            }
            None => false,
        }
    }

    /// Moves the selected shape to the top of the paint order.
    pub fn bring_to_front(&mut self) -> bool {
        match self.selected_index() {
            Some(index) => {
                let shape = self.shapes.remove(index);
                self.shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// Moves the selected shape to the bottom of the paint order.
    pub fn send_to_back(&mut self) -> bool {
        match self.selected_index() {
            Some(index) => {
                let shape = self.shapes.remove(index);
                self.shapes.insert(0, shape);
                true
            }
            None => false,
        }
    }

    /// Translates the selected shape by the delta.
    pub fn translate_selected(&mut self, dx: f64, dy: f64) -> Result<()> {
        let index = self.selected_index().ok_or(DesignError::NoSelection)?;
        self.shapes[index].translate(dx, dy);
        Ok(())
    }

    /// Scales the selected shape about its bounding-box center.
    pub fn scale_selected(&mut self, factor: f64) -> Result<()> {
        let index = self.selected_index().ok_or(DesignError::NoSelection)?;
        let pivot = Bounds::from(self.shapes[index].bounding_box()).center();
        self.shapes[index].scale(factor, Some(pivot));
        Ok(())
    }

    /// Rotates the selected shape about its bounding-box center.
    pub fn rotate_selected(&mut self, angle_rad: f64) -> Result<()> {
        let index = self.selected_index().ok_or(DesignError::NoSelection)?;
        let pivot = Bounds::from(self.shapes[index].bounding_box()).center();
        self.shapes[index].rotate(angle_rad, Some(pivot));
        Ok(())
    }

    /// Shears the selected shape. Non-point-native variants are replaced
    /// in the collection by their tessellated polygon.
    pub fn shear_selected(&mut self, shear_x: f64, shear_y: f64) -> Result<()> {
        let index = self.selected_index().ok_or(DesignError::NoSelection)?;
        if !self.shapes[index].supports_shear() {
            return Err(DesignError::UnsupportedOperation {
                shape: self.shapes[index].name().to_string(),
                operation: "shear".to_string(),
            });
        }
        self.shapes[index].shear(shear_x, shear_y);
        Ok(())
    }

    /// Renders every shape in paint order onto the surface.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for shape in &self.shapes {
            shape.render(surface);
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
