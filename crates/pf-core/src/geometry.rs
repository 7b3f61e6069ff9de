//! Geometry kernel: point/rect math, grid and edge snapping, and the
//! canvas↔screen coordinate mapping.
//!
//! Everything here is pure. Shapes with non-finite geometry are the
//! caller's problem — the snapping helpers skip them, nothing panics.

use crate::model::Shape;
use serde::{Deserialize, Serialize};

/// A 2D point in canvas units (top-left origin, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width/height extents. Non-negative by convention; interactive
/// draw/resize clamps to a 10-unit minimum (see `pf-editor`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// An axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Grow the rectangle by `by` units on every side.
    pub fn expand(&self, by: f32) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            width: self.width + by * 2.0,
            height: self.height + by * 2.0,
        }
    }

    /// Area of the intersection with `other`; 0 when disjoint.
    pub fn intersection_area(&self, other: &Bounds) -> f32 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }

    /// Distance from a point to the rectangle's boundary; 0 inside.
    pub fn distance_to(&self, p: Point) -> f32 {
        let dx = (self.x - p.x).max(0.0).max(p.x - self.right());
        let dy = (self.y - p.y).max(0.0).max(p.y - self.bottom());
        (dx * dx + dy * dy).sqrt()
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// Round `v` to the nearest multiple of `grid`.
pub fn snap_value(v: f32, grid: f32) -> f32 {
    (v / grid).round() * grid
}

/// Snap a point to the grid, per axis.
pub fn snap_point(p: Point, grid: f32) -> Point {
    Point::new(snap_value(p.x, grid), snap_value(p.y, grid))
}

/// Snap `target`'s position to align with nearby shape edges.
///
/// For each other shape, the target's left/center/right edges are
/// compared against the same edges of that shape (and top/middle/bottom
/// on the y axis); any pair within `snap_distance` overwrites the
/// target position on that axis so the edges align exactly.
///
/// When several shapes match on the same axis, the last one in
/// iteration order wins — there is no nearest-match priority.
pub fn snap_to_edges(shapes: &[Shape], target: &Shape, snap_distance: f32) -> Point {
    let tb = target.bounds();
    let mut pos = target.position;

    for other in shapes {
        if other.id == target.id || !other.has_valid_geometry() {
            continue;
        }
        let ob = other.bounds();

        // x axis: left, center, right
        if (tb.left() - ob.left()).abs() <= snap_distance {
            pos.x = ob.left();
        }
        if (tb.center().x - ob.center().x).abs() <= snap_distance {
            pos.x = ob.center().x - tb.width / 2.0;
        }
        if (tb.right() - ob.right()).abs() <= snap_distance {
            pos.x = ob.right() - tb.width;
        }

        // y axis: top, middle, bottom
        if (tb.top() - ob.top()).abs() <= snap_distance {
            pos.y = ob.top();
        }
        if (tb.center().y - ob.center().y).abs() <= snap_distance {
            pos.y = ob.center().y - tb.height / 2.0;
        }
        if (tb.bottom() - ob.bottom()).abs() <= snap_distance {
            pos.y = ob.bottom() - tb.height;
        }
    }

    pos
}

/// The zoom/pan mapping between canvas (logical) and screen (pixel)
/// coordinates. `canvas = (screen - pan) / zoom`; the two mappings are
/// exact inverses up to floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasTransform {
    pub zoom: f32,
    pub pan: Point,
}

impl CanvasTransform {
    pub fn screen_to_canvas(&self, p: Point) -> Point {
        Point::new((p.x - self.pan.x) / self.zoom, (p.y - self.pan.y) / self.zoom)
    }

    pub fn canvas_to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.pan.x, p.y * self.zoom + self.pan.y)
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Shape, ShapeKind};
    use crate::id::ShapeId;

    fn rect(id: &str, x: f32, y: f32, w: f32, h: f32) -> Shape {
        Shape::new(
            ShapeId::intern(id),
            ShapeKind::Rectangle,
            Point::new(x, y),
            Size::new(w, h),
        )
    }

    #[test]
    fn snap_value_rounds_to_grid() {
        assert_eq!(snap_value(23.0, 20.0), 20.0);
        assert_eq!(snap_value(31.0, 20.0), 40.0);
        assert_eq!(snap_value(-7.0, 20.0), 0.0);
    }

    #[test]
    fn intersection_area_disjoint_is_zero() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn intersection_area_partial() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 25.0);
    }

    #[test]
    fn distance_to_is_zero_inside() {
        let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(b.distance_to(Point::new(50.0, 50.0)), 0.0);
        let d = b.distance_to(Point::new(105.0, 105.0));
        assert!((d - 50.0f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn transform_roundtrip() {
        let t = CanvasTransform {
            zoom: 2.5,
            pan: Point::new(-120.0, 48.0),
        };
        let p = Point::new(33.25, -7.5);
        let back = t.canvas_to_screen(t.screen_to_canvas(p));
        assert!((back.x - p.x).abs() < 1e-3);
        assert!((back.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn edge_snap_aligns_left_edges() {
        let anchor = rect("anchor", 100.0, 0.0, 50.0, 50.0);
        let target = rect("target", 104.0, 200.0, 30.0, 30.0);
        let snapped = snap_to_edges(&[anchor.clone()], &target, 5.0);
        assert_eq!(snapped.x, 100.0);
        assert_eq!(snapped.y, 200.0);
    }

    #[test]
    fn edge_snap_last_match_wins() {
        // Both anchors are within snap distance of the target's left
        // edge; iteration order decides, so the later one wins.
        let a = rect("a", 100.0, 0.0, 50.0, 50.0);
        let b = rect("b", 106.0, 300.0, 50.0, 50.0);
        let target = rect("target", 103.0, 150.0, 30.0, 30.0);
        let snapped = snap_to_edges(&[a, b], &target, 8.0);
        assert_eq!(snapped.x, 106.0);
    }
}
