//! Integration tests: full drag gestures against the nesting core.

use pf_core::geometry::{Point, Size};
use pf_core::id::ShapeId;
use pf_core::model::{CanvasSettings, Shape, ShapeKind};
use pf_editor::tools::{DragGesture, DragOutcome};

fn rect(id: &str, x: f32, y: f32, w: f32, h: f32) -> Shape {
    Shape::new(
        ShapeId::intern(id),
        ShapeKind::Rectangle,
        Point::new(x, y),
        Size::new(w, h),
    )
}

fn no_snap() -> CanvasSettings {
    CanvasSettings {
        snap_to_grid: false,
        snap_to_edges: false,
        ..CanvasSettings::default()
    }
}

fn find<'a>(shapes: &'a [Shape], id: &str) -> &'a Shape {
    shapes.iter().find(|s| s.id == ShapeId::intern(id)).unwrap()
}

#[test]
fn drop_inside_container_commits_the_parent() {
    // 40×40 into 100×100: confidence = 1 × (1600/10000) × 1.5 = 0.24,
    // comfortably above the 0.1 display threshold.
    let container = rect("dg_container", 0.0, 0.0, 100.0, 100.0);
    let widget = rect("dg_widget", 600.0, 600.0, 40.0, 40.0);
    let shapes = vec![container.clone(), widget.clone()];

    let mut gesture = DragGesture::begin(&widget, Point::new(600.0, 600.0));
    let update = gesture.update(&shapes, Point::new(30.0, 30.0), &no_snap());
    assert!(update.show_preview);
    assert!(update.verdict.is_valid);

    match gesture.drop(&shapes) {
        DragOutcome::Committed { shapes, parent_id } => {
            assert_eq!(parent_id, container.id);
            let moved = find(&shapes, "dg_widget");
            assert_eq!(moved.position, Point::new(30.0, 30.0));
            assert_eq!(moved.parent_id, Some(container.id));
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
fn drop_on_empty_canvas_detaches_to_root() {
    let container = rect("dg_c2", 0.0, 0.0, 100.0, 100.0);
    let mut widget = rect("dg_w2", 20.0, 20.0, 40.0, 40.0);
    widget.parent_id = Some(container.id);
    let shapes = vec![container, widget.clone()];

    let mut gesture = DragGesture::begin(&widget, Point::new(20.0, 20.0));
    gesture.update(&shapes, Point::new(700.0, 700.0), &no_snap());

    match gesture.drop(&shapes) {
        DragOutcome::Detached { shapes } => {
            let moved = find(&shapes, "dg_w2");
            assert_eq!(moved.parent_id, None);
            assert_eq!(moved.position, Point::new(700.0, 700.0));
        }
        other => panic!("expected detach, got {other:?}"),
    }
}

#[test]
fn invalid_target_keeps_position_but_skips_nesting() {
    // Dropping a container into its own descendant: position sticks,
    // the parent pointer does not change.
    let mut outer = rect("dg_outer", 0.0, 0.0, 300.0, 300.0);
    let mut inner = rect("dg_inner", 10.0, 10.0, 200.0, 200.0);
    outer.parent_id = None;
    inner.parent_id = Some(outer.id);
    let shapes = vec![outer.clone(), inner];

    let mut gesture = DragGesture::begin(&outer, Point::new(0.0, 0.0));
    let update = gesture.update(&shapes, Point::new(50.0, 50.0), &no_snap());
    assert!(!update.verdict.is_valid);
    assert!(update.verdict.confidence > 0.0);

    match gesture.drop(&shapes) {
        DragOutcome::Detached { shapes } => {
            let moved = find(&shapes, "dg_outer");
            assert_eq!(moved.position, Point::new(50.0, 50.0));
            assert_eq!(moved.parent_id, None);
        }
        other => panic!("expected position-only drop, got {other:?}"),
    }
}

#[test]
fn cancel_leaves_everything_untouched() {
    let widget = rect("dg_w3", 10.0, 10.0, 40.0, 40.0);
    let shapes = vec![widget.clone()];
    let mut gesture = DragGesture::begin(&widget, Point::new(10.0, 10.0));
    gesture.update(&shapes, Point::new(400.0, 400.0), &no_snap());
    assert_eq!(gesture.cancel(), DragOutcome::Cancelled);
}

#[test]
fn near_miss_preview_stays_hidden_below_threshold() {
    let container = rect("dg_c4", 0.0, 0.0, 100.0, 100.0);
    let widget = rect("dg_w4", 600.0, 600.0, 20.0, 20.0);
    let shapes = vec![container, widget.clone()];

    let mut gesture = DragGesture::begin(&widget, Point::new(600.0, 600.0));
    let update = gesture.update(&shapes, Point::new(105.0, 105.0), &no_snap());
    // Near-miss confidence (0.1) does not clear the strict threshold.
    assert!(update.verdict.parent_id.is_some());
    assert!(!update.show_preview);
}
