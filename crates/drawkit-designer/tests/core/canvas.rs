use drawkit_designer::canvas::{create_polygon, create_shape, Canvas, Tool};
use drawkit_designer::shapes::{Point, ShapeType};
use drawkit_core::error::DesignError;
use drawkit_core::style::ShapeStyle;

#[test]
fn test_factory_per_tool() {
    let style = ShapeStyle::default();
    let start = Point::new(10.0, 10.0);
    let end = Point::new(40.0, 50.0);

    let line = create_shape(Tool::Line, start, end, &style).unwrap();
    assert_eq!(line.shape_type(), ShapeType::Line);

    // Circle: center at drag start, radius the drag distance (50 here).
    let circle = create_shape(Tool::Circle, start, end, &style).unwrap();
    assert_eq!(circle.bounding_box(), (-40.0, -40.0, 60.0, 60.0));

    // Ellipse: center at the drag midpoint, width |dx|, height |dy|.
    let ellipse = create_shape(Tool::Ellipse, start, end, &style).unwrap();
    assert_eq!(ellipse.bounding_box(), (10.0, 10.0, 40.0, 50.0));

    let rect = create_shape(Tool::Rectangle, end, start, &style).unwrap();
    assert_eq!(rect.bounding_box(), (10.0, 10.0, 40.0, 50.0));

    assert!(create_shape(Tool::Pointer, start, end, &style).is_none());
    assert!(create_shape(Tool::Polygon, start, end, &style).is_none());
}

#[test]
fn test_factory_applies_style_and_leaves_deselected() {
    let mut style = ShapeStyle::default();
    style.stroke_width = 6;
    let shape = create_shape(
        Tool::Pentagon,
        Point::new(0.0, 0.0),
        Point::new(30.0, 0.0),
        &style,
    )
    .unwrap();
    assert_eq!(shape.style().stroke_width, 6);
    assert!(!shape.selected());
}

#[test]
fn test_create_polygon_requires_three_points() {
    let style = ShapeStyle::default();
    assert!(create_polygon(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], &style).is_none());

    let shape = create_polygon(
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ],
        &style,
    )
    .unwrap();
    assert_eq!(shape.shape_type(), ShapeType::Polygon);
}

#[test]
fn test_place_shape_appends_with_current_tool() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    assert!(canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
    assert_eq!(canvas.shape_count(), 1);

    // The pointer tool never creates shapes.
    canvas.set_tool(Tool::Pointer);
    assert!(!canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
    assert_eq!(canvas.shape_count(), 1);
}

#[test]
fn test_polygon_gesture_flow() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Polygon);

    canvas.push_vertex(Point::new(0.0, 0.0));
    canvas.push_vertex(Point::new(50.0, 0.0));
    // Mid-gesture state never mutates the collection.
    assert_eq!(canvas.shape_count(), 0);

    // Premature close: no shape, points stay accumulated.
    assert!(!canvas.close_polygon());
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(canvas.pending_vertices().len(), 2);

    canvas.push_vertex(Point::new(25.0, 40.0));
    assert!(canvas.close_polygon());
    assert_eq!(canvas.shape_count(), 1);
    assert!(canvas.pending_vertices().is_empty());
}

#[test]
fn test_push_vertex_ignored_for_other_tools() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Line);
    canvas.push_vertex(Point::new(0.0, 0.0));
    assert!(canvas.pending_vertices().is_empty());
}

#[test]
fn test_select_topmost_and_deselect_on_empty_click() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(20.0, 20.0));

    // (0, 5) lies on the left border of both; the later shape wins.
    assert_eq!(canvas.select_at(Point::new(0.0, 5.0)), Some(1));
    assert!(canvas.shapes()[1].selected());
    assert!(!canvas.shapes()[0].selected());

    // Clicking empty canvas clears the selection.
    assert_eq!(canvas.select_at(Point::new(100.0, 100.0)), None);
    assert_eq!(canvas.selected_index(), None);
}

#[test]
fn test_single_selection_invariant() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Circle);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    canvas.place_shape(Point::new(100.0, 100.0), Point::new(110.0, 100.0));

    canvas.select_at(Point::new(10.0, 0.0));
    canvas.select_at(Point::new(110.0, 100.0));
    assert_eq!(canvas.shapes().iter().filter(|s| s.selected()).count(), 1);
}

#[test]
fn test_z_order_changes_hit_priority() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(20.0, 20.0));

    canvas.select_at(Point::new(0.0, 5.0));
    let before = canvas.selected().unwrap().bounding_box();
    assert_eq!(before, (0.0, 0.0, 20.0, 20.0));

    assert!(canvas.send_to_back());
    // The larger rectangle now sits below; the same click hits the other.
    canvas.select_at(Point::new(0.0, 5.0));
    assert_eq!(canvas.selected().unwrap().bounding_box(), (0.0, 0.0, 10.0, 10.0));

    assert!(canvas.bring_to_front());
    assert_eq!(canvas.shapes()[1].bounding_box(), (0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_delete_and_clear() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    canvas.place_shape(Point::new(30.0, 30.0), Point::new(40.0, 40.0));

    assert!(!canvas.delete_selected());

    canvas.select_at(Point::new(0.0, 5.0));
    assert!(canvas.delete_selected());
    assert_eq!(canvas.shape_count(), 1);
    assert_eq!(canvas.selected_index(), None);

    canvas.clear();
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_remove_shape_by_index() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Line);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

    assert!(canvas.remove_shape(3).is_none());
    let removed = canvas.remove_shape(0).unwrap();
    assert_eq!(removed.shape_type(), ShapeType::Line);
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_duplicate_is_offset_deselected_and_on_top() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    canvas.place_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    canvas.select_at(Point::new(0.0, 5.0));

    assert!(canvas.duplicate_selected());
    assert_eq!(canvas.shape_count(), 2);

    let copy = &canvas.shapes()[1];
    assert_eq!(copy.bounding_box(), (20.0, 20.0, 30.0, 30.0));
    assert!(!copy.selected());
    // The original keeps its selection.
    assert!(canvas.shapes()[0].selected());
}

#[test]
fn test_duplicate_of_sheared_circle_copies_polygon_state() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Circle);
    canvas.place_shape(Point::new(50.0, 50.0), Point::new(70.0, 50.0));
    canvas.select_at(Point::new(70.0, 50.0));

    canvas.shear_selected(0.5, 0.0).unwrap();
    assert!(canvas.duplicate_selected());

    let copy = &canvas.shapes()[1];
    assert_eq!(copy.shape_type(), ShapeType::Polygon);
}

#[test]
fn test_transforms_require_selection() {
    let mut canvas = Canvas::new();
    assert_eq!(
        canvas.translate_selected(1.0, 1.0),
        Err(DesignError::NoSelection)
    );
    assert_eq!(canvas.scale_selected(2.0), Err(DesignError::NoSelection));
    assert_eq!(canvas.rotate_selected(1.0), Err(DesignError::NoSelection));
    assert_eq!(
        canvas.shear_selected(0.5, 0.0),
        Err(DesignError::NoSelection)
    );
}

#[test]
fn test_selection_scoped_transforms_use_bbox_center_pivot() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    canvas.place_shape(Point::new(10.0, 10.0), Point::new(30.0, 30.0));
    canvas.select_at(Point::new(10.0, 20.0));

    // Scaling about the bounding-box center keeps the center in place.
    canvas.scale_selected(2.0).unwrap();
    assert_eq!(
        canvas.selected().unwrap().bounding_box(),
        (0.0, 0.0, 40.0, 40.0)
    );

    let bounds = canvas.selection_bounds().unwrap();
    assert_eq!(bounds.center(), Point::new(20.0, 20.0));
}

#[test]
fn test_shear_selected_replaces_collection_entry() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Circle);
    canvas.place_shape(Point::new(50.0, 50.0), Point::new(80.0, 50.0));
    canvas.select_at(Point::new(80.0, 50.0));

    canvas.shear_selected(0.4, 0.0).unwrap();
    assert_eq!(canvas.shapes()[0].shape_type(), ShapeType::Polygon);
    // Selection survives the variant replacement.
    assert!(canvas.shapes()[0].selected());
}
