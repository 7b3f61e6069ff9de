//! Z-order reassignment.
//!
//! Only relative order matters; values are not kept contiguous. The
//! step operations swap two z values instead of renumbering the stack,
//! so every other shape's `z_index` survives untouched.

use crate::id::ShapeId;
use crate::model::Shape;

/// Coarse stacking label for UI badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerPosition {
    Top,
    Middle,
    Bottom,
}

/// 1-based rank within the stack, plus the total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerInfo {
    pub rank: usize,
    pub total: usize,
    pub position: LayerPosition,
}

/// Give `id` a z above every existing value (max, or 0 when the list
/// is empty, plus one).
pub fn bring_to_front(shapes: &[Shape], id: ShapeId) -> Vec<Shape> {
    let max = shapes.iter().map(|s| s.z_index).max().unwrap_or(0);
    retag(shapes, id, max + 1)
}

/// Give `id` a z below every existing value.
pub fn send_to_back(shapes: &[Shape], id: ShapeId) -> Vec<Shape> {
    let min = shapes.iter().map(|s| s.z_index).min().unwrap_or(0);
    retag(shapes, id, min - 1)
}

/// Swap z values with the next shape up the stack. No-op at the top.
pub fn bring_forward(shapes: &[Shape], id: ShapeId) -> Vec<Shape> {
    swap_with_neighbor(shapes, id, 1)
}

/// Swap z values with the next shape down the stack. No-op at the
/// bottom.
pub fn send_backward(shapes: &[Shape], id: ShapeId) -> Vec<Shape> {
    swap_with_neighbor(shapes, id, -1)
}

/// Rank of `id` in the stack (1 = bottom), or `None` if absent.
pub fn layer_info(shapes: &[Shape], id: ShapeId) -> Option<LayerInfo> {
    let order = sorted_ranks(shapes);
    let rank = order.iter().position(|&i| shapes[i].id == id)? + 1;
    let total = shapes.len();
    let position = if rank == total {
        LayerPosition::Top
    } else if rank == 1 {
        LayerPosition::Bottom
    } else {
        LayerPosition::Middle
    };
    Some(LayerInfo {
        rank,
        total,
        position,
    })
}

fn retag(shapes: &[Shape], id: ShapeId, z: i32) -> Vec<Shape> {
    shapes
        .iter()
        .map(|s| {
            if s.id == id {
                let mut s = s.clone();
                s.z_index = z;
                s
            } else {
                s.clone()
            }
        })
        .collect()
}

/// Indices into `shapes`, sorted bottom-to-top. Stable, so equal z
/// values keep input order.
fn sorted_ranks(shapes: &[Shape]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..shapes.len()).collect();
    order.sort_by_key(|&i| shapes[i].z_index);
    order
}

fn swap_with_neighbor(shapes: &[Shape], id: ShapeId, direction: i32) -> Vec<Shape> {
    let order = sorted_ranks(shapes);
    let Some(rank) = order.iter().position(|&i| shapes[i].id == id) else {
        return shapes.to_vec();
    };
    let neighbor_rank = rank as i64 + direction as i64;
    if neighbor_rank < 0 || neighbor_rank >= order.len() as i64 {
        return shapes.to_vec();
    }

    let self_idx = order[rank];
    let neighbor_idx = order[neighbor_rank as usize];
    let self_z = shapes[self_idx].z_index;
    let neighbor_z = shapes[neighbor_idx].z_index;

    shapes
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i == self_idx {
                let mut s = s.clone();
                s.z_index = neighbor_z;
                s
            } else if i == neighbor_idx {
                let mut s = s.clone();
                s.z_index = self_z;
                s
            } else {
                s.clone()
            }
        })
        .collect()
}
