//! Drag-time drop-target search.
//!
//! [`find_drop_target`] is called on every pointer-move tick of a drag
//! gesture; it is pure and keeps no state between calls. The gesture
//! state machine itself lives in the caller (`pf-editor`).
//!
//! The constants below are product-tuning values calibrated against
//! real drag behavior, not derived from a formal model. The confidence
//! score is an unnormalized heuristic and can exceed 1.0 — downstream
//! thresholds are calibrated against this exact scale, so the
//! arithmetic must not be "fixed".

use crate::geometry::{Bounds, Point};
use crate::id::ShapeId;
use crate::model::Shape;
use crate::nesting::validate_nesting;

/// Candidate bounds are expanded by this much on every side before the
/// pointer-inside test.
pub const EDGE_TOLERANCE: f32 = 5.0;

/// A pointer this close to a candidate's boundary still registers as a
/// near-miss when the dragged rectangle has no overlap at all.
pub const NEAR_MISS_DISTANCE: f32 = 20.0;

/// Empirical boost applied to the overlap-derived confidence.
pub const CONFIDENCE_BOOST: f32 = 1.5;

/// Flat confidence assigned to near-miss candidates.
pub const NEAR_MISS_CONFIDENCE: f32 = 0.1;

/// Callers show drop feedback only above this confidence. The search
/// itself returns the best candidate unconditionally.
pub const MIN_VISIBLE_CONFIDENCE: f32 = 0.1;

/// Verdict for one pointer position during a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DropVerdict {
    /// Best candidate parent, if any cleared zero confidence.
    pub parent_id: Option<ShapeId>,
    /// Whether committing to the candidate keeps the stored tree
    /// acyclic. Always false when there is no candidate.
    pub is_valid: bool,
    /// Unnormalized score; may exceed 1.0.
    pub confidence: f32,
    /// Where the dragged shape would land. For overlapping candidates
    /// this is clamped fully inside the candidate; near-misses preview
    /// at the raw drop point.
    pub preview_position: Point,
    pub reason: String,
}

impl DropVerdict {
    /// The empty verdict: no candidate cleared zero confidence.
    pub fn none(drop_point: Point) -> Self {
        Self {
            parent_id: None,
            is_valid: false,
            confidence: 0.0,
            preview_position: drop_point,
            reason: "no drop target under pointer".into(),
        }
    }
}

/// Evaluate candidate drop targets for `dragged` with its would-be
/// top-left at `drop_point`.
///
/// Candidates are all valid-geometry shapes except the dragged one.
/// A candidate whose tolerance-expanded bounds contain the pointer is
/// scored by overlap: `(overlap / dragged_area) * (min(areas) /
/// max(areas)) * CONFIDENCE_BOOST`. With no overlap but the pointer
/// within [`NEAR_MISS_DISTANCE`] of the boundary, a flat
/// [`NEAR_MISS_CONFIDENCE`] applies. The highest-confidence candidate
/// wins (ties keep the first found) and is validated for acyclicity.
pub fn find_drop_target(shapes: &[Shape], dragged: &Shape, drop_point: Point) -> DropVerdict {
    let dragged_area = dragged.area();
    let would_occupy = Bounds::new(
        drop_point.x,
        drop_point.y,
        dragged.size.width,
        dragged.size.height,
    );

    let mut best: Option<(ShapeId, f32, Point, String)> = None;

    for candidate in shapes {
        if candidate.id == dragged.id || !candidate.has_valid_geometry() {
            continue;
        }
        let bounds = candidate.bounds();
        if !bounds.expand(EDGE_TOLERANCE).contains(drop_point) {
            continue;
        }

        let overlap = bounds.intersection_area(&would_occupy);
        let scored = if overlap > 0.0 {
            let parent_area = bounds.area();
            let area_ratio =
                dragged_area.min(parent_area) / dragged_area.max(parent_area);
            let confidence = (overlap / dragged_area) * area_ratio * CONFIDENCE_BOOST;

            // Keep the dragged rect fully inside the candidate. When it
            // does not fit, the min/max order pins it to the top-left.
            let preview = Point::new(
                drop_point
                    .x
                    .min(bounds.right() - dragged.size.width)
                    .max(bounds.left()),
                drop_point
                    .y
                    .min(bounds.bottom() - dragged.size.height)
                    .max(bounds.top()),
            );
            Some((
                confidence,
                preview,
                format!("fits inside {}", candidate.id),
            ))
        } else if bounds.distance_to(drop_point) <= NEAR_MISS_DISTANCE {
            Some((
                NEAR_MISS_CONFIDENCE,
                drop_point,
                format!("near the edge of {}", candidate.id),
            ))
        } else {
            None
        };

        if let Some((confidence, preview, reason)) = scored {
            let replace = match &best {
                Some((_, current, _, _)) => confidence > *current,
                None => true,
            };
            if replace {
                best = Some((candidate.id, confidence, preview, reason));
            }
        }
    }

    match best {
        Some((parent_id, confidence, preview_position, reason)) => {
            let is_valid = validate_nesting(shapes, parent_id, dragged.id);
            log::debug!(
                "drop target {} for {}: confidence {:.3}, valid {}",
                parent_id,
                dragged.id,
                confidence,
                is_valid
            );
            let reason = if is_valid {
                reason
            } else {
                format!("nesting under {parent_id} would create a cycle")
            };
            DropVerdict {
                parent_id: Some(parent_id),
                is_valid,
                confidence,
                preview_position,
                reason,
            }
        }
        None => DropVerdict::none(drop_point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::model::ShapeKind;

    fn rect(id: &str, x: f32, y: f32, w: f32, h: f32) -> Shape {
        Shape::new(
            ShapeId::intern(id),
            ShapeKind::Rectangle,
            Point::new(x, y),
            Size::new(w, h),
        )
    }

    #[test]
    fn overlap_drop_scores_and_clamps_preview() {
        let parent = rect("dp_parent", 0.0, 0.0, 100.0, 100.0);
        let dragged = rect("dp_child", 0.0, 0.0, 20.0, 20.0);
        let verdict = find_drop_target(&[parent.clone()], &dragged, Point::new(90.0, 40.0));

        assert_eq!(verdict.parent_id, Some(parent.id));
        assert!(verdict.is_valid);
        // Fully overlapping drop at (90,40): overlap = 10*20 = 200,
        // dragged area 400, area ratio 400/10000, boost 1.5.
        let expected = (200.0 / 400.0) * (400.0 / 10000.0) * 1.5;
        assert!((verdict.confidence - expected).abs() < 1e-5);
        // Clamped so the 20-wide rect stays inside the parent.
        assert_eq!(verdict.preview_position, Point::new(80.0, 40.0));
    }

    #[test]
    fn near_miss_registers_low_confidence() {
        // Scenario: 20×20 shape dropped at (105,105) next to a
        // (0,0,100,100) parent — inside the 5-unit tolerance ring,
        // no overlap, within the 20-unit near-miss window.
        let parent = rect("nm_parent", 0.0, 0.0, 100.0, 100.0);
        let dragged = rect("nm_child", 0.0, 0.0, 20.0, 20.0);
        let verdict = find_drop_target(&[parent.clone()], &dragged, Point::new(105.0, 105.0));

        assert_eq!(verdict.parent_id, Some(parent.id));
        assert_eq!(verdict.confidence, NEAR_MISS_CONFIDENCE);
        assert!(verdict.confidence > 0.0);
        assert_eq!(verdict.preview_position, Point::new(105.0, 105.0));
    }

    #[test]
    fn no_candidate_yields_zero_confidence() {
        let parent = rect("far_parent", 0.0, 0.0, 100.0, 100.0);
        let dragged = rect("far_child", 0.0, 0.0, 20.0, 20.0);
        let verdict = find_drop_target(&[parent], &dragged, Point::new(400.0, 400.0));

        assert_eq!(verdict.parent_id, None);
        assert!(!verdict.is_valid);
        assert_eq!(verdict.confidence, 0.0);
        assert_eq!(verdict.preview_position, Point::new(400.0, 400.0));
    }

    #[test]
    fn cyclic_target_is_reported_invalid() {
        // child is an ancestor of parent in the stored tree, so
        // dropping parent into child must be flagged invalid.
        let mut outer = rect("cy_outer", 0.0, 0.0, 200.0, 200.0);
        let mut inner = rect("cy_inner", 10.0, 10.0, 100.0, 100.0);
        inner.parent_id = Some(outer.id);
        outer.parent_id = None;
        let shapes = vec![outer.clone(), inner.clone()];

        let verdict = find_drop_target(&shapes, &outer, Point::new(50.0, 50.0));
        assert_eq!(verdict.parent_id, Some(inner.id));
        assert!(!verdict.is_valid);
        assert!(verdict.confidence > 0.0);
    }

    #[test]
    fn highest_confidence_candidate_wins() {
        // The pointer sits inside both; the small box yields a larger
        // area ratio and therefore a higher score.
        let big = rect("hc_big", 0.0, 0.0, 400.0, 400.0);
        let small = rect("hc_small", 20.0, 20.0, 60.0, 60.0);
        let dragged = rect("hc_drag", 0.0, 0.0, 30.0, 30.0);
        let verdict = find_drop_target(&[big, small.clone()], &dragged, Point::new(30.0, 30.0));
        assert_eq!(verdict.parent_id, Some(small.id));
    }

    #[test]
    fn dragged_shape_is_never_its_own_target() {
        let only = rect("solo", 0.0, 0.0, 100.0, 100.0);
        let verdict = find_drop_target(&[only.clone()], &only, Point::new(50.0, 50.0));
        assert_eq!(verdict.parent_id, None);
    }
}
