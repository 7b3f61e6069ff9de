//! Drag gesture controller.
//!
//! The core's drop-target search is stateless; this is the caller-side
//! state machine that strings its per-tick verdicts into a gesture:
//!
//! `Idle -> Dragging -> { Committed, Detached, Cancelled }`
//!
//! The gesture owns only transient UI state (grab offset, last
//! position, last verdict). Shape lists stay with the host and are
//! passed in on every call, copy-on-write.

use pf_core::drop::{DropVerdict, MIN_VISIBLE_CONFIDENCE, find_drop_target};
use pf_core::geometry::{Point, Size, snap_point, snap_to_edges};
use pf_core::id::ShapeId;
use pf_core::model::{CanvasSettings, Shape};
use pf_core::nesting::apply_nesting;

/// Interactive draw/resize never produces a shape smaller than this.
pub const MIN_SHAPE_SIZE: f32 = 10.0;

/// What one pointer-move tick produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    /// The dragged shape's would-be top-left after snapping.
    pub position: Point,
    pub verdict: DropVerdict,
    /// Whether the host should draw drop feedback for this verdict.
    pub show_preview: bool,
}

/// Terminal state of a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Dropped on a valid target: position applied and parent set.
    Committed {
        shapes: Vec<Shape>,
        parent_id: ShapeId,
    },
    /// Dropped with no target (detached to root) or on an invalid
    /// target (position applied, parent assignment skipped).
    Detached { shapes: Vec<Shape> },
    /// Gesture aborted; the host keeps its current list.
    Cancelled,
}

/// One in-flight drag of a single shape.
#[derive(Debug, Clone)]
pub struct DragGesture {
    shape_id: ShapeId,
    grab_offset: Point,
    position: Point,
    verdict: Option<DropVerdict>,
}

impl DragGesture {
    /// Enter the Dragging state. `pointer` is in canvas coordinates.
    pub fn begin(shape: &Shape, pointer: Point) -> Self {
        Self {
            shape_id: shape.id,
            grab_offset: Point::new(pointer.x - shape.position.x, pointer.y - shape.position.y),
            position: shape.position,
            verdict: None,
        }
    }

    pub fn shape_id(&self) -> ShapeId {
        self.shape_id
    }

    /// Refresh the candidate target for the current pointer position.
    ///
    /// Grid snapping applies before edge snapping; both are gated on
    /// [`CanvasSettings`]. The snapped position is what the drop will
    /// later commit — the verdict's `preview_position` is visual only.
    pub fn update(
        &mut self,
        shapes: &[Shape],
        pointer: Point,
        settings: &CanvasSettings,
    ) -> DragUpdate {
        let mut position = Point::new(
            pointer.x - self.grab_offset.x,
            pointer.y - self.grab_offset.y,
        );
        if settings.snap_to_grid {
            position = snap_point(position, settings.grid_size);
        }

        let Some(dragged) = shapes.iter().find(|s| s.id == self.shape_id) else {
            // Shape deleted mid-drag; keep reporting the empty verdict.
            let verdict = DropVerdict::none(position);
            self.position = position;
            self.verdict = Some(verdict.clone());
            return DragUpdate {
                position,
                verdict,
                show_preview: false,
            };
        };

        if settings.snap_to_edges {
            let mut probe = dragged.clone();
            probe.position = position;
            position = snap_to_edges(shapes, &probe, settings.snap_distance);
        }

        let verdict = find_drop_target(shapes, dragged, position);
        log::trace!(
            "drag {}: at ({}, {}), target {:?}",
            self.shape_id,
            position.x,
            position.y,
            verdict.parent_id
        );

        self.position = position;
        self.verdict = Some(verdict.clone());
        let show_preview = verdict.confidence > MIN_VISIBLE_CONFIDENCE;
        DragUpdate {
            position,
            verdict,
            show_preview,
        }
    }

    /// Pointer-up: apply the last dragged position, then commit or skip
    /// the parent assignment.
    ///
    /// A valid target commits. An invalid-but-confident target keeps
    /// the position and leaves the stored parent untouched — the
    /// position is never reverted, only the nesting is skipped. No
    /// target detaches the shape to root level.
    pub fn drop(self, shapes: &[Shape]) -> DragOutcome {
        let moved: Vec<Shape> = shapes
            .iter()
            .map(|s| {
                if s.id == self.shape_id {
                    let mut s = s.clone();
                    s.position = self.position;
                    s
                } else {
                    s.clone()
                }
            })
            .collect();

        match self.verdict {
            Some(DropVerdict {
                parent_id: Some(parent),
                is_valid: true,
                ..
            }) => DragOutcome::Committed {
                shapes: apply_nesting(&moved, self.shape_id, Some(parent)),
                parent_id: parent,
            },
            Some(DropVerdict {
                parent_id: Some(_),
                is_valid: false,
                ..
            }) => DragOutcome::Detached { shapes: moved },
            _ => DragOutcome::Detached {
                shapes: apply_nesting(&moved, self.shape_id, None),
            },
        }
    }

    /// Abort the gesture without touching any shape.
    pub fn cancel(self) -> DragOutcome {
        DragOutcome::Cancelled
    }
}

/// Clamp an interactive draw/resize to the minimum shape size.
pub fn clamp_size(size: Size) -> Size {
    Size::new(
        size.width.max(MIN_SHAPE_SIZE),
        size.height.max(MIN_SHAPE_SIZE),
    )
}
