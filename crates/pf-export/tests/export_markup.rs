//! Integration tests: stored-pointer trees → markup, including the
//! orphan-drop behavior of the tree builder as seen from the export.

use pf_core::geometry::{Point, Size};
use pf_core::id::ShapeId;
use pf_core::model::{Shape, ShapeKind};
use pf_core::tree::ShapeTree;
use pf_export::{generate_html, render_tree};

fn rect(id: &str, x: f32, y: f32, w: f32, h: f32) -> Shape {
    Shape::new(
        ShapeId::intern(id),
        ShapeKind::Rectangle,
        Point::new(x, y),
        Size::new(w, h),
    )
}

#[test]
fn orphaned_parent_reference_drops_shape_from_markup() {
    let root = rect("em_root", 0.0, 0.0, 400.0, 400.0);
    let mut lost = rect("em_lost", 10.0, 10.0, 50.0, 50.0);
    lost.parent_id = Some(ShapeId::intern("em_missing"));
    lost.style.element_id = "lost".into();

    let tree = ShapeTree::build(&[root, lost]);
    let html = render_tree(&tree);

    // The orphan is neither a root nor a child: it vanishes from the
    // export entirely.
    assert!(!html.contains("id=\"lost\""));
    assert_eq!(html.matches("<div").count(), 1);
}

#[test]
fn invalid_geometry_is_excluded_from_export() {
    let good = rect("em_good", 0.0, 0.0, 100.0, 100.0);
    let broken = rect("em_broken", f32::NAN, 0.0, 100.0, 100.0);
    let html = generate_html(&[good, broken]);
    assert_eq!(html.matches("<div").count(), 1);
}

#[test]
fn deep_nesting_emits_well_formed_markup() {
    let mut a = rect("em_a", 0.0, 0.0, 400.0, 400.0);
    let mut b = rect("em_b", 10.0, 10.0, 200.0, 200.0);
    let mut c = rect("em_c", 20.0, 20.0, 80.0, 80.0);
    a.style.element_id = "a".into();
    b.style.element_id = "b".into();
    b.parent_id = Some(a.id);
    c.style.element_id = "c".into();
    c.parent_id = Some(b.id);

    let tree = ShapeTree::build(&[a, b, c]);
    let html = render_tree(&tree);

    assert_eq!(html.matches("<div").count(), 3);
    assert_eq!(html.matches("</div>").count(), 3);
    let a_at = html.find("id=\"a\"").unwrap();
    let b_at = html.find("id=\"b\"").unwrap();
    let c_at = html.find("id=\"c\"").unwrap();
    assert!(a_at < b_at && b_at < c_at);
}

#[test]
fn export_is_deterministic() {
    let shapes = vec![
        rect("em_d1", 0.0, 0.0, 300.0, 300.0),
        rect("em_d2", 5.0, 5.0, 100.0, 100.0),
        rect("em_d3", 200.0, 200.0, 50.0, 50.0),
    ];
    assert_eq!(generate_html(&shapes), generate_html(&shapes));
}
