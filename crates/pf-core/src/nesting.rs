//! Containment inference and nesting mutation.
//!
//! Two containment notions live side by side and must not be conflated:
//! the *inferred* tree ([`infer_nesting`]) is re-derived from raw
//! geometry every call and ignores stored pointers entirely; the
//! *stored* tree is whatever `parent_id` values the shapes carry, and
//! is what [`validate_nesting`] and [`nesting_indicators`] inspect.

use crate::id::ShapeId;
use crate::model::Shape;
use std::collections::{HashMap, HashSet};

/// A candidate parent qualifies when it covers at least this fraction
/// of the child's own area. Tunable product constant, not a derived
/// threshold.
pub const OVERLAP_RATIO: f32 = 0.5;

/// Reconstruct a plausible nesting tree from final shape geometry.
///
/// Every shape is independently evaluated against all others: a shape P
/// qualifies as a parent of S when `overlap(P, S) >= OVERLAP_RATIO *
/// area(S)` — strict containment is not required. Among qualifiers the
/// smallest-area shape (tightest wrapping box) wins; ties keep the
/// first found. Shapes with no qualifier become roots.
///
/// Shapes with non-finite geometry are excluded from the computation
/// and from the returned set — they appear neither as parents nor as
/// children. Stored `parent_id` values are ignored; the result is
/// re-derived fresh on every call, so repeated calls over the same
/// input produce identical assignments.
pub fn infer_nesting(shapes: &[Shape]) -> Vec<Shape> {
    let mut valid: Vec<&Shape> = shapes.iter().filter(|s| s.has_valid_geometry()).collect();
    valid.sort_by_key(|s| s.z_index);

    let mut out = Vec::with_capacity(valid.len());
    for shape in valid.iter().copied() {
        let bounds = shape.bounds();
        let own_area = shape.area();

        let mut best: Option<&Shape> = None;
        for candidate in valid.iter().copied() {
            if candidate.id == shape.id {
                continue;
            }
            let overlap = candidate.bounds().intersection_area(&bounds);
            if overlap < own_area * OVERLAP_RATIO {
                continue;
            }
            match best {
                Some(current) if candidate.area() >= current.area() => {}
                _ => best = Some(candidate),
            }
        }

        if let Some(parent) = best {
            log::trace!("infer: {} -> {}", shape.id, parent.id);
        }

        let mut annotated = shape.clone();
        annotated.parent_id = best.map(|p| p.id);
        out.push(annotated);
    }
    out
}

/// Check whether making `child_id` a child of `parent_id` keeps the
/// stored tree acyclic.
///
/// Returns false on self-parenting, and false when walking the
/// parent's stored ancestor chain reaches the child. A dangling
/// ancestor pointer ends the walk as if the chain reached root; a
/// pre-existing cycle that does not involve the child also terminates
/// (visited-set guard) rather than looping.
pub fn validate_nesting(shapes: &[Shape], parent_id: ShapeId, child_id: ShapeId) -> bool {
    if parent_id == child_id {
        return false;
    }

    let by_id: HashMap<ShapeId, &Shape> = shapes.iter().map(|s| (s.id, s)).collect();
    let mut seen = HashSet::new();
    let mut current = Some(parent_id);
    while let Some(id) = current {
        if id == child_id {
            return false;
        }
        if !seen.insert(id) {
            break;
        }
        current = by_id.get(&id).and_then(|s| s.parent_id);
    }
    true
}

/// Replace one shape's `parent_id`. Performs no validation — callers
/// must run [`validate_nesting`] first. `None` detaches to root level.
pub fn apply_nesting(shapes: &[Shape], child_id: ShapeId, parent_id: Option<ShapeId>) -> Vec<Shape> {
    shapes
        .iter()
        .map(|s| {
            if s.id == child_id {
                let mut s = s.clone();
                s.parent_id = parent_id;
                s
            } else {
                s.clone()
            }
        })
        .collect()
}

/// Display badge data: one entry per stored parent, with its children
/// and its depth in the stored tree (root = 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingIndicator {
    pub parent_id: ShapeId,
    pub child_ids: Vec<ShapeId>,
    pub level: usize,
}

/// Group children by stored `parent_id` and compute each parent's
/// ancestor-chain depth. Display only — never used for mutation.
pub fn nesting_indicators(shapes: &[Shape]) -> Vec<NestingIndicator> {
    let by_id: HashMap<ShapeId, &Shape> = shapes.iter().map(|s| (s.id, s)).collect();

    let mut children: HashMap<ShapeId, Vec<ShapeId>> = HashMap::new();
    for shape in shapes {
        if let Some(parent) = shape.parent_id {
            children.entry(parent).or_default().push(shape.id);
        }
    }

    let mut indicators: Vec<NestingIndicator> = children
        .into_iter()
        .map(|(parent_id, child_ids)| {
            let mut level = 0;
            let mut seen = HashSet::new();
            let mut current = by_id.get(&parent_id).and_then(|s| s.parent_id);
            while let Some(id) = current {
                if !seen.insert(id) {
                    break;
                }
                level += 1;
                current = by_id.get(&id).and_then(|s| s.parent_id);
            }
            NestingIndicator {
                parent_id,
                child_ids,
                level,
            }
        })
        .collect();

    // HashMap iteration order is arbitrary; sort for stable output.
    indicators.sort_by(|a, b| a.parent_id.as_str().cmp(b.parent_id.as_str()));
    indicators
}
