//! Multi-shape alignment and even distribution.

use crate::geometry::Bounds;
use crate::id::ShapeId;
use crate::model::Shape;

/// Alignment target: an edge or center on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Distribution axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

/// Align every selected shape to the first shape in the selection-id
/// list. The reference is positional (index 0), not geometrically
/// special, and is never moved. Fewer than 2 ids: no-op. Unselected
/// shapes pass through unchanged.
pub fn align_shapes(shapes: &[Shape], selected: &[ShapeId], mode: AlignMode) -> Vec<Shape> {
    if selected.len() < 2 {
        return shapes.to_vec();
    }
    let reference = match shapes.iter().find(|s| s.id == selected[0]) {
        Some(r) => r.bounds(),
        None => return shapes.to_vec(),
    };

    shapes
        .iter()
        .map(|s| {
            if s.id == selected[0] || !selected.contains(&s.id) {
                return s.clone();
            }
            let mut moved = s.clone();
            match mode {
                AlignMode::Left => moved.position.x = reference.left(),
                AlignMode::Center => {
                    moved.position.x = reference.center().x - s.size.width / 2.0;
                }
                AlignMode::Right => moved.position.x = reference.right() - s.size.width,
                AlignMode::Top => moved.position.y = reference.top(),
                AlignMode::Middle => {
                    moved.position.y = reference.center().y - s.size.height / 2.0;
                }
                AlignMode::Bottom => moved.position.y = reference.bottom() - s.size.height,
            }
            moved
        })
        .collect()
}

/// Evenly distribute the selected shapes along one axis.
///
/// The first and last shapes (sorted by axis position) keep their
/// positions and define the span. Spacing is `(span - total extents) /
/// (count - 1)` and is not clamped — overlapping selections produce a
/// negative spacing. Interior shapes are placed by accumulating prior
/// extents plus spacing from the first shape's position. Fewer than 3
/// ids: no-op.
pub fn distribute_shapes(
    shapes: &[Shape],
    selected: &[ShapeId],
    axis: DistributeAxis,
) -> Vec<Shape> {
    if selected.len() < 3 {
        return shapes.to_vec();
    }

    let mut picked: Vec<&Shape> = shapes
        .iter()
        .filter(|s| selected.contains(&s.id))
        .collect();
    if picked.len() < 3 {
        return shapes.to_vec();
    }

    let pos = |s: &Shape| match axis {
        DistributeAxis::Horizontal => s.position.x,
        DistributeAxis::Vertical => s.position.y,
    };
    let extent = |s: &Shape| match axis {
        DistributeAxis::Horizontal => s.size.width,
        DistributeAxis::Vertical => s.size.height,
    };

    picked.sort_by(|a, b| pos(a).partial_cmp(&pos(b)).unwrap_or(std::cmp::Ordering::Equal));

    let first = picked[0];
    let last = picked[picked.len() - 1];
    let span = pos(last) - pos(first);
    let total: f32 = picked.iter().map(|s| extent(s)).sum();
    let spacing = (span - total) / (picked.len() - 1) as f32;

    // New axis position per interior shape id.
    let mut placements: Vec<(ShapeId, f32)> = Vec::new();
    let mut cursor = pos(first) + extent(first) + spacing;
    for s in &picked[1..picked.len() - 1] {
        placements.push((s.id, cursor));
        cursor += extent(s) + spacing;
    }

    shapes
        .iter()
        .map(|s| {
            match placements.iter().find(|(id, _)| *id == s.id) {
                Some((_, at)) => {
                    let mut moved = s.clone();
                    match axis {
                        DistributeAxis::Horizontal => moved.position.x = *at,
                        DistributeAxis::Vertical => moved.position.y = *at,
                    }
                    moved
                }
                None => s.clone(),
            }
        })
        .collect()
}

/// Axis-aligned bounding box of a shape set; all-zero for an empty set.
pub fn selection_bounds(shapes: &[Shape]) -> Bounds {
    let mut iter = shapes.iter();
    let Some(first) = iter.next() else {
        return Bounds::default();
    };
    let mut acc = first.bounds();
    for s in iter {
        acc = acc.union(&s.bounds());
    }
    acc
}

/// Convenience for hosts that track a selection as ids.
pub fn selection_bounds_of(shapes: &[Shape], selected: &[ShapeId]) -> Bounds {
    let picked: Vec<Shape> = shapes
        .iter()
        .filter(|s| selected.contains(&s.id))
        .cloned()
        .collect();
    selection_bounds(&picked)
}
