//! Point and marquee selection queries, plus selection duplication.

use pf_core::geometry::{Bounds, Point};
use pf_core::id::ShapeId;
use pf_core::model::Shape;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Pointer offset applied to duplicated shapes.
const DUPLICATE_OFFSET: f32 = 10.0;

/// The topmost shape under a point, by z-index. Ties go to the shape
/// later in the list (painted last).
pub fn shape_at(shapes: &[Shape], point: Point) -> Option<ShapeId> {
    let mut best: Option<(i32, usize)> = None;
    for (i, shape) in shapes.iter().enumerate() {
        if !shape.has_valid_geometry() || !shape.bounds().contains(point) {
            continue;
        }
        match best {
            Some((z, _)) if shape.z_index < z => {}
            _ => best = Some((shape.z_index, i)),
        }
    }
    best.map(|(_, i)| shapes[i].id)
}

/// All shapes whose bounds intersect the marquee rectangle, in input
/// order.
pub fn shapes_in_rect(shapes: &[Shape], rect: Bounds) -> SmallVec<[ShapeId; 4]> {
    shapes
        .iter()
        .filter(|s| s.has_valid_geometry() && s.bounds().intersection_area(&rect) > 0.0)
        .map(|s| s.id)
        .collect()
}

/// Clone the selected shapes with fresh ids, offset by (10, 10).
///
/// Group membership is dropped (the copies are not part of the
/// original's group). Parent references that point *inside* the
/// duplicated set are remapped onto the new copies; references to
/// shapes outside the set are kept as-is, so duplicating a nested
/// child leaves the copy in the same container.
///
/// Returns the extended list plus the freshly minted ids, in input
/// order.
pub fn duplicate_shapes(shapes: &[Shape], selected: &[ShapeId]) -> (Vec<Shape>, Vec<ShapeId>) {
    let mut id_map: HashMap<ShapeId, ShapeId> = HashMap::new();
    for shape in shapes {
        if selected.contains(&shape.id) {
            id_map.insert(shape.id, ShapeId::mint("shape"));
        }
    }

    let mut out = shapes.to_vec();
    let mut minted = Vec::with_capacity(id_map.len());
    for shape in shapes {
        let Some(&new_id) = id_map.get(&shape.id) else {
            continue;
        };
        let mut copy = shape.clone();
        copy.id = new_id;
        copy.position.x += DUPLICATE_OFFSET;
        copy.position.y += DUPLICATE_OFFSET;
        copy.group_id = None;
        if let Some(parent) = copy.parent_id {
            if let Some(&mapped) = id_map.get(&parent) {
                copy.parent_id = Some(mapped);
            }
        }
        out.push(copy);
        minted.push(new_id);
    }

    (out, minted)
}
