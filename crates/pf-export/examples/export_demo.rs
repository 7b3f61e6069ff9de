//! Build a small landing-page layout and print the exported HTML.
//!
//! Run with `RUST_LOG=debug` to see the export pipeline's logging.

use pf_core::geometry::{Point, Size};
use pf_core::id::ShapeId;
use pf_core::model::{Shape, ShapeKind};
use pf_export::generate_html;

fn shape(id: &str, tag: &str, x: f32, y: f32, w: f32, h: f32) -> Shape {
    let mut s = Shape::new(
        ShapeId::intern(id),
        ShapeKind::Rectangle,
        Point::new(x, y),
        Size::new(w, h),
    );
    s.style.tag = tag.into();
    s
}

fn main() {
    env_logger::init();

    let mut hero = shape("hero", "section", 0.0, 0.0, 800.0, 400.0);
    hero.style.element_id = "hero".into();
    hero.style.background_color = "#0F172A".into();

    let mut title = shape("title", "h1", 40.0, 60.0, 500.0, 60.0);
    title.style.typography.font_size = 42.0;
    title.style.typography.color = "#F8FAFC".into();

    let mut cta = shape("cta", "button", 40.0, 180.0, 180.0, 48.0);
    cta.style.class_names = "cta primary".into();
    cta.style.corner_radius = 8.0;
    cta.style.background_color = "#3B82F6".into();

    let mut badge = shape("badge", "div", 700.0, 500.0, 60.0, 60.0);
    badge.kind = ShapeKind::Circle;
    badge.style.background_color = "#F59E0B".into();

    let html = generate_html(&[hero, title, cta, badge]);
    println!("{html}");
}
