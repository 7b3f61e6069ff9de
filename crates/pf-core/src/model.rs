//! Core data model for Page Forge documents.
//!
//! A document is a flat list of [`Shape`]s carrying two independent,
//! weak hierarchies: `parent_id` (spatial nesting, inferred from
//! geometry or assigned by drag) and `group_id` (explicit multi-select
//! grouping). Both are lookup keys, never owning pointers — every read
//! site resolves them or falls back to root/ungrouped.
//!
//! All transforms over the model are pure whole-list replacements:
//! `(Vec<Shape>, params) -> Vec<Shape>` with copy-on-write discipline.

use crate::geometry::{Bounds, CanvasTransform, Point, Size};
use crate::id::ShapeId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Shape kind ──────────────────────────────────────────────────────────

/// The geometric flavor of an element. A circle is still an
/// axis-aligned bounding box; only its border-radius is forced to
/// fully-round at export time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
}

// ─── Presentation payload ────────────────────────────────────────────────

/// Drop-shadow descriptor. Only emitted to markup when `enabled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub enabled: bool,
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: String,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            enabled: false,
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 8.0,
            spread: 0.0,
            color: "#00000040".into(),
        }
    }
}

/// Typography descriptor. Fields left at their defaults are omitted
/// from the generated inline style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: String,
    pub color: String,
    pub text_align: String,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub text_decoration: String,
    pub text_transform: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Arial, sans-serif".into(),
            font_size: 16.0,
            font_weight: "normal".into(),
            color: "#000000".into(),
            text_align: "left".into(),
            line_height: 1.5,
            letter_spacing: 0.0,
            text_decoration: "none".into(),
            text_transform: "none".into(),
        }
    }
}

/// Presentation attributes. Opaque payload to the geometry and nesting
/// algorithms — carried through untouched. Colors stay as hex strings
/// all the way to export, where `hex_to_rgba` interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub background_color: String,
    pub border_color: String,
    pub border_width: f32,
    pub border_style: String,
    pub opacity: f32,
    pub corner_radius: f32,
    pub box_shadow: BoxShadow,
    pub typography: Typography,
    /// Markup tag name used at export (`div`, `section`, `h1`, …).
    pub tag: String,
    /// `id="…"` attribute value; blank means no attribute.
    pub element_id: String,
    /// Space-separated class list; blank means no attribute.
    pub class_names: String,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            background_color: "#3B82F6".into(),
            border_color: "#1E293B".into(),
            border_width: 0.0,
            border_style: "solid".into(),
            opacity: 1.0,
            corner_radius: 0.0,
            box_shadow: BoxShadow::default(),
            typography: Typography::default(),
            tag: "div".into(),
            element_id: String::new(),
            class_names: String::new(),
        }
    }
}

// ─── Shape ───────────────────────────────────────────────────────────────

/// A positioned, sized, styled rectangle or circle on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Top-left corner, canvas units.
    pub position: Point,
    pub size: Size,
    /// Relative stacking order; values need not be contiguous.
    pub z_index: i32,
    /// Weak nesting reference. `None` = root level.
    #[serde(default)]
    pub parent_id: Option<ShapeId>,
    /// Weak group reference, independent of `parent_id`.
    #[serde(default)]
    pub group_id: Option<ShapeId>,
    pub style: ShapeStyle,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, position: Point, size: Size) -> Self {
        Self {
            id,
            kind,
            position,
            size,
            z_index: 0,
            parent_id: None,
            group_id: None,
            style: ShapeStyle::default(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// Whether this shape participates in geometric computation.
    /// Non-finite position or size means "not a participant" — the
    /// shape is skipped by inference, drop-target search, and export.
    pub fn has_valid_geometry(&self) -> bool {
        self.position.is_finite() && self.size.is_finite()
    }
}

// ─── Group ───────────────────────────────────────────────────────────────

/// An explicit, user-created cluster of shapes. The bounding box is
/// derived once at creation and only recomputed by the move/resize
/// group operations — member moves do not update it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: ShapeId,
    pub name: String,
    pub members: SmallVec<[ShapeId; 8]>,
    pub position: Point,
    pub size: Size,
    pub z_index: i32,
}

// ─── Canvas aggregate ────────────────────────────────────────────────────

/// Current selection: a set of shape ids and, optionally, the group the
/// user activated. A single-shape selection is a one-element set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub ids: SmallVec<[ShapeId; 4]>,
    pub group: Option<ShapeId>,
}

impl Selection {
    pub fn single(id: ShapeId) -> Self {
        Self {
            ids: smallvec::smallvec![id],
            group: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.ids.contains(&id)
    }
}

/// Grid and snapping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    pub grid_size: f32,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    pub snap_to_edges: bool,
    pub snap_distance: f32,
    pub background_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            show_grid: true,
            snap_to_grid: false,
            snap_to_edges: true,
            snap_distance: 8.0,
            background_color: "#FFFFFF".into(),
        }
    }
}

/// The aggregate root owned by the host application. Core operations
/// take (shapes, groups, selection) slices; the viewport transform
/// belongs to the host's render loop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasState {
    pub shapes: Vec<Shape>,
    pub groups: Vec<Group>,
    pub selection: Selection,
    pub transform: CanvasTransform,
    pub settings: CanvasSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_json_roundtrip() {
        let mut shape = Shape::new(
            ShapeId::intern("card"),
            ShapeKind::Circle,
            Point::new(12.5, -3.0),
            Size::new(80.0, 80.0),
        );
        shape.parent_id = Some(ShapeId::intern("hero"));
        shape.style.element_id = "avatar".into();
        shape.style.class_names = "round media".into();
        shape.style.box_shadow.enabled = true;

        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn invalid_geometry_is_detected() {
        let mut shape = Shape::new(
            ShapeId::intern("broken"),
            ShapeKind::Rectangle,
            Point::new(f32::NAN, 0.0),
            Size::new(10.0, 10.0),
        );
        assert!(!shape.has_valid_geometry());
        shape.position = Point::new(0.0, 0.0);
        assert!(shape.has_valid_geometry());
        shape.size.height = f32::INFINITY;
        assert!(!shape.has_valid_geometry());
    }

    #[test]
    fn missing_hierarchy_fields_default_to_root() {
        // Records persisted before nesting existed have no parent_id or
        // group_id keys at all.
        let json = r##"{
            "id": "legacy",
            "kind": "rectangle",
            "position": { "x": 0.0, "y": 0.0 },
            "size": { "width": 40.0, "height": 40.0 },
            "z_index": 3,
            "style": {
                "background_color": "#FFFFFF",
                "border_color": "#000000",
                "border_width": 1.0,
                "border_style": "solid",
                "opacity": 1.0,
                "corner_radius": 0.0,
                "box_shadow": {
                    "enabled": false, "offset_x": 0.0, "offset_y": 4.0,
                    "blur": 8.0, "spread": 0.0, "color": "#00000040"
                },
                "typography": {
                    "font_family": "Arial, sans-serif", "font_size": 16.0,
                    "font_weight": "normal", "color": "#000000",
                    "text_align": "left", "line_height": 1.5,
                    "letter_spacing": 0.0, "text_decoration": "none",
                    "text_transform": "none"
                },
                "tag": "div", "element_id": "", "class_names": ""
            }
        }"##;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.parent_id, None);
        assert_eq!(shape.group_id, None);
    }
}
