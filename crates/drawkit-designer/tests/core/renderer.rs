use drawkit_designer::canvas::{Canvas, Tool};
use drawkit_designer::renderer::{DrawSurface, Paint, SvgSurface};
use drawkit_designer::shapes::{Point, Polygon, Shape};
use drawkit_core::style::{Color, LineStyle, ShapeStyle};

/// Surface that records which primitives were invoked.
#[derive(Default)]
struct RecordingSurface {
    lines: Vec<(Point, Point)>,
    polygons: Vec<Vec<Point>>,
    ellipses: Vec<(Point, f64, f64)>,
    strokes: Vec<Color>,
}

impl DrawSurface for RecordingSurface {
    fn line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.lines.push((from, to));
        self.strokes.push(paint.stroke);
    }

    fn polygon(&mut self, vertices: &[Point], paint: &Paint) {
        self.polygons.push(vertices.to_vec());
        self.strokes.push(paint.stroke);
    }

    fn ellipse(&mut self, center: Point, rx: f64, ry: f64, paint: &Paint) {
        self.ellipses.push((center, rx, ry));
        self.strokes.push(paint.stroke);
    }
}

#[test]
fn test_render_dispatches_expected_primitives() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Line);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    canvas.set_tool(Tool::Circle);
    canvas.place_shape(Point::new(50.0, 50.0), Point::new(60.0, 50.0));
    canvas.set_tool(Tool::Rectangle);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(20.0, 10.0));

    let mut surface = RecordingSurface::default();
    canvas.render(&mut surface);

    assert_eq!(surface.lines.len(), 1);
    assert_eq!(surface.ellipses.len(), 1);
    assert_eq!(surface.ellipses[0], (Point::new(50.0, 50.0), 10.0, 10.0));
    // Rectangles draw as their four corners.
    assert_eq!(surface.polygons.len(), 1);
    assert_eq!(surface.polygons[0].len(), 4);
}

#[test]
fn test_freeform_polygon_renders_edge_strokes() {
    let shape = Shape::Polygon(Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]));

    let mut surface = RecordingSurface::default();
    shape.render(&mut surface);

    // Three edges including the closing one; no polygon fill primitive.
    assert_eq!(surface.lines.len(), 3);
    assert_eq!(surface.lines[2], (Point::new(10.0, 10.0), Point::new(0.0, 0.0)));
    assert!(surface.polygons.is_empty());
}

#[test]
fn test_selected_shape_strokes_highlight_color() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    canvas.select_at(Point::new(0.0, 5.0));

    let mut surface = RecordingSurface::default();
    canvas.render(&mut surface);
    assert_eq!(surface.strokes, vec![Color::RED]);
}

#[test]
fn test_paint_resolution() {
    let style = ShapeStyle::new(Color::BLUE, Some(Color::GREEN), 3, LineStyle::Dashed);

    let paint = Paint::for_shape(&style, false);
    assert_eq!(paint.stroke, Color::BLUE);
    assert_eq!(paint.fill, Some(Color::GREEN));
    assert_eq!(paint.width, 3);
    assert_eq!(paint.dash, Some((5.0, 5.0)));

    let selected = Paint::for_shape(&style, true);
    assert_eq!(selected.stroke, Color::RED);
}

#[test]
fn test_svg_surface_output() {
    let mut canvas = Canvas::new();
    canvas.style_mut().line_style = LineStyle::Dashed;
    canvas.style_mut().fill = Some(Color::rgb(0, 128, 255));
    canvas.set_tool(Tool::Ellipse);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(40.0, 20.0));

    let mut surface = SvgSurface::new();
    canvas.render(&mut surface);
    let svg = surface.finish(200, 100);

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("<ellipse cx=\"20\" cy=\"10\" rx=\"20\" ry=\"10\""));
    assert!(svg.contains("stroke=\"#000000\""));
    assert!(svg.contains("stroke-dasharray=\"5,5\""));
    assert!(svg.contains("fill=\"#0080ff\""));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn test_svg_surface_unfilled_shapes() {
    let mut surface = SvgSurface::new();
    let shape = Shape::Rectangle(drawkit_designer::shapes::Rectangle::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
    ));
    shape.render(&mut surface);
    assert!(surface.elements().contains("fill=\"none\""));
}

#[test]
fn test_render_walks_paint_order() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Line);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    canvas.place_shape(Point::new(2.0, 0.0), Point::new(3.0, 0.0));

    let mut surface = RecordingSurface::default();
    canvas.render(&mut surface);
    assert_eq!(surface.lines[0].0, Point::new(0.0, 0.0));
    assert_eq!(surface.lines[1].0, Point::new(2.0, 0.0));
}
