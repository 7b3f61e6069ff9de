//! Snapshot-based undo/redo.
//!
//! Every mutation is a whole-list replacement, so history is a plain
//! snapshot list — no per-operation inverse bookkeeping. Drag gestures
//! use batch grouping: the snapshot is captured at `begin_batch`, and
//! `end_batch` pushes a single undo step only if anything changed.

use pf_core::model::{Group, Shape};

/// One captured document state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub shapes: Vec<Shape>,
    pub groups: Vec<Group>,
}

impl Snapshot {
    pub fn new(shapes: Vec<Shape>, groups: Vec<Group>) -> Self {
        Self { shapes, groups }
    }
}

/// Undo/redo stacks with batch grouping for drag gestures.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    /// Batch nesting depth (0 = not batching).
    batch_depth: usize,
    /// Snapshot captured at the start of the outermost batch.
    batch_snapshot: Option<Snapshot>,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth,
            batch_depth: 0,
            batch_snapshot: None,
        }
    }

    /// Record a single mutation: push the pre-mutation state. Inside a
    /// batch this is a no-op — the batch snapshot already covers it.
    pub fn record(&mut self, before: &Snapshot) {
        if self.batch_depth > 0 {
            return;
        }
        self.push_undo(before.clone());
        self.redo_stack.clear();
    }

    /// Start a batch group, capturing the current state. All mutations
    /// until `end_batch` collapse into one undo step.
    pub fn begin_batch(&mut self, current: &Snapshot) {
        if self.batch_depth == 0 {
            self.batch_snapshot = Some(current.clone());
        }
        self.batch_depth += 1;
    }

    /// Close a batch group. When the outermost batch closes, one
    /// snapshot is pushed — unless nothing actually changed.
    pub fn end_batch(&mut self, current: &Snapshot) {
        if self.batch_depth == 0 {
            return;
        }
        self.batch_depth -= 1;
        if self.batch_depth == 0 {
            if let Some(before) = self.batch_snapshot.take() {
                if before != *current {
                    self.push_undo(before);
                    self.redo_stack.clear();
                }
            }
        }
    }

    /// Step back: returns the state to restore, or `None` when empty.
    pub fn undo(&mut self, current: &Snapshot) -> Option<Snapshot> {
        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(restored)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: &Snapshot) -> Option<Snapshot> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }
}
