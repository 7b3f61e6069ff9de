//! HTML markup generation: shape forest → attributed, indented markup.
//!
//! Attribute order (id, then class, then style) and the placeholder
//! comment strings are part of the external contract — prior exports
//! were produced with exactly this order, so changing it breaks
//! downstream diffs.

use crate::css::inline_style;
use pf_core::NodeIndex;
use pf_core::model::Shape;
use pf_core::nesting::infer_nesting;
use pf_core::tree::ShapeTree;
use std::fmt::Write;

/// Generate a complete HTML document from raw shape geometry.
///
/// Nesting is re-derived from geometry ([`infer_nesting`]) before the
/// forest is built, so stored parent pointers do not influence the
/// export. To render a curated tree (stored pointers intact), build a
/// [`ShapeTree`] and call [`render_tree`] directly.
pub fn generate_html(shapes: &[Shape]) -> String {
    let inferred = infer_nesting(shapes);
    let tree = ShapeTree::build(&inferred);
    log::debug!("export: {} shapes, {} roots", tree.len(), tree.roots().len());

    let mut out = String::with_capacity(1024);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("  <title>Exported Layout</title>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    for &root in tree.roots() {
        out.push_str(&render_shape_node(&tree, root, 1));
    }
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

/// Render every root of an already-built forest, at depth 0.
pub fn render_tree(tree: &ShapeTree) -> String {
    let mut out = String::new();
    for &root in tree.roots() {
        out.push_str(&render_shape_node(tree, root, 0));
    }
    out
}

/// Render one node and its subtree.
///
/// A node with a blank tag or non-finite geometry renders as the empty
/// string — the node and its whole subtree are skipped, never an
/// error. Indentation is cosmetic only.
pub fn render_shape_node(tree: &ShapeTree, idx: NodeIndex, depth: usize) -> String {
    let shape = tree.shape(idx);
    let tag = shape.style.tag.trim();
    if tag.is_empty() || !shape.has_valid_geometry() {
        return String::new();
    }

    let pad = "  ".repeat(depth);
    let mut out = String::new();

    write!(out, "{pad}<{tag}").unwrap();
    let element_id = shape.style.element_id.trim();
    if !element_id.is_empty() {
        write!(out, " id=\"{element_id}\"").unwrap();
    }
    let classes = shape.style.class_names.trim();
    if !classes.is_empty() {
        write!(out, " class=\"{classes}\"").unwrap();
    }
    writeln!(out, " style=\"{}\">", inline_style(shape)).unwrap();

    writeln!(out, "{pad}  {}", placeholder_comment(tag, classes)).unwrap();

    for child in tree.children(idx) {
        out.push_str(&render_shape_node(tree, child, depth + 1));
    }

    writeln!(out, "{pad}</{tag}>").unwrap();
    out
}

/// Placeholder content comment, chosen by tag first, then class.
fn placeholder_comment(tag: &str, classes: &str) -> &'static str {
    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "<!-- Heading text -->",
        "nav" => "<!-- Navigation links -->",
        "ul" | "ol" => "<!-- List items -->",
        "li" => "<!-- List item -->",
        "p" => "<!-- Paragraph text -->",
        "a" => "<!-- Link text -->",
        "button" => "<!-- Button label -->",
        "header" => "<!-- Header content -->",
        "footer" => "<!-- Footer content -->",
        "section" | "article" => "<!-- Section content -->",
        _ if classes.contains("card") => "<!-- Card content -->",
        _ if classes.contains("container") => "<!-- Container content -->",
        _ => "<!-- Content -->",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::geometry::{Point, Size};
    use pf_core::id::ShapeId;
    use pf_core::model::ShapeKind;

    fn rect(id: &str, x: f32, y: f32, w: f32, h: f32) -> Shape {
        Shape::new(
            ShapeId::intern(id),
            ShapeKind::Rectangle,
            Point::new(x, y),
            Size::new(w, h),
        )
    }

    #[test]
    fn attribute_order_is_id_class_style() {
        let mut shape = rect("h_attr", 0.0, 0.0, 100.0, 100.0);
        shape.style.element_id = "hero".into();
        shape.style.class_names = "wide banner".into();
        let tree = ShapeTree::build(&[shape]);
        let html = render_tree(&tree);

        let id_at = html.find("id=\"hero\"").unwrap();
        let class_at = html.find("class=\"wide banner\"").unwrap();
        let style_at = html.find("style=\"").unwrap();
        assert!(id_at < class_at && class_at < style_at);
    }

    #[test]
    fn blank_attributes_are_omitted() {
        let mut shape = rect("h_blank", 0.0, 0.0, 100.0, 100.0);
        shape.style.element_id = "   ".into();
        shape.style.class_names = String::new();
        let tree = ShapeTree::build(&[shape]);
        let html = render_tree(&tree);
        assert!(!html.contains("id="));
        assert!(!html.contains("class="));
    }

    #[test]
    fn blank_tag_renders_nothing() {
        let mut shape = rect("h_notag", 0.0, 0.0, 100.0, 100.0);
        shape.style.tag = "  ".into();
        let tree = ShapeTree::build(&[shape]);
        assert_eq!(render_tree(&tree), "");
    }

    #[test]
    fn placeholder_follows_tag_heuristics() {
        let mut heading = rect("h_head", 0.0, 0.0, 100.0, 20.0);
        heading.style.tag = "h1".into();
        let tree = ShapeTree::build(&[heading]);
        assert!(render_tree(&tree).contains("<!-- Heading text -->"));

        let mut card = rect("h_card", 0.0, 0.0, 100.0, 20.0);
        card.style.class_names = "card".into();
        let tree = ShapeTree::build(&[card]);
        assert!(render_tree(&tree).contains("<!-- Card content -->"));
    }

    #[test]
    fn children_render_nested_and_indented() {
        let mut parent = rect("h_parent", 0.0, 0.0, 200.0, 200.0);
        parent.style.element_id = "outer".into();
        let mut child = rect("h_child", 10.0, 10.0, 50.0, 50.0);
        child.parent_id = Some(parent.id);
        child.style.element_id = "inner".into();
        let tree = ShapeTree::build(&[parent, child]);
        let html = render_tree(&tree);

        let outer_at = html.find("id=\"outer\"").unwrap();
        let inner_at = html.find("id=\"inner\"").unwrap();
        assert!(outer_at < inner_at);
        assert!(html.contains("\n  <div id=\"inner\""));
        // Child closes before parent does.
        let inner_close = html.rfind("  </div>").unwrap();
        let outer_close = html.rfind("</div>").unwrap();
        assert!(inner_close <= outer_close);
    }

    #[test]
    fn generate_html_wraps_document_and_infers_nesting() {
        let page = rect("h_page", 0.0, 0.0, 800.0, 600.0);
        let mut widget = rect("h_widget", 20.0, 20.0, 100.0, 100.0);
        // A stored pointer at odds with geometry: export re-derives.
        widget.parent_id = Some(ShapeId::intern("h_ghost"));
        let html = generate_html(&[page.clone(), widget]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<body>"));
        assert!(html.ends_with("</html>\n"));
        // The widget nests under the page despite the dangling pointer.
        let page_open = html.find("<div style=").unwrap();
        let widget_open = html[page_open + 1..].find("<div style=").unwrap();
        assert!(widget_open > 0);
    }
}
