//! Explicit shape grouping.
//!
//! Groups are a selection convenience, orthogonal to spatial nesting:
//! `group_id` and `parent_id` never interact. Membership is exclusive —
//! a shape belongs to at most one group — while nesting follows
//! geometry and is free to cross group boundaries.

use crate::align::selection_bounds_of;
use crate::geometry::{Point, Size};
use crate::id::ShapeId;
use crate::model::{Group, Shape};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("grouping requires at least two shapes")]
    TooFewShapes,
    #[error("unknown group: {0}")]
    UnknownGroup(ShapeId),
}

/// Bundle the selected shapes into a new group.
///
/// The group's bounding box is derived from the members at creation
/// time; its z is the max member z. Every member is stamped with the
/// new `group_id`. Fails with [`GroupError::TooFewShapes`] below two
/// ids — exclusivity against existing groups is the caller's check via
/// [`can_group`].
pub fn create_group(
    shapes: &[Shape],
    groups: &[Group],
    selected: &[ShapeId],
) -> Result<(Vec<Shape>, Vec<Group>), GroupError> {
    let mut members: SmallVec<[ShapeId; 8]> = SmallVec::new();
    for id in selected {
        if shapes.iter().any(|s| s.id == *id) && !members.contains(id) {
            members.push(*id);
        }
    }
    if members.len() < 2 {
        return Err(GroupError::TooFewShapes);
    }

    let bounds = selection_bounds_of(shapes, &members);
    let z_index = shapes
        .iter()
        .filter(|s| members.contains(&s.id))
        .map(|s| s.z_index)
        .max()
        .unwrap_or(0);

    let group = Group {
        id: ShapeId::mint("group"),
        name: format!("Group {}", groups.len() + 1),
        members: members.clone(),
        position: Point::new(bounds.x, bounds.y),
        size: Size::new(bounds.width, bounds.height),
        z_index,
    };

    let shapes = shapes
        .iter()
        .map(|s| {
            if members.contains(&s.id) {
                let mut s = s.clone();
                s.group_id = Some(group.id);
                s
            } else {
                s.clone()
            }
        })
        .collect();

    let mut groups = groups.to_vec();
    groups.push(group);
    Ok((shapes, groups))
}

/// Dissolve a group: strip member `group_id`s (all other properties,
/// including nesting `parent_id`, survive) and remove the record.
pub fn ungroup(
    shapes: &[Shape],
    groups: &[Group],
    group_id: ShapeId,
) -> Result<(Vec<Shape>, Vec<Group>), GroupError> {
    if !groups.iter().any(|g| g.id == group_id) {
        return Err(GroupError::UnknownGroup(group_id));
    }

    let shapes = shapes
        .iter()
        .map(|s| {
            if s.group_id == Some(group_id) {
                let mut s = s.clone();
                s.group_id = None;
                s
            } else {
                s.clone()
            }
        })
        .collect();
    let groups = groups.iter().filter(|g| g.id != group_id).cloned().collect();
    Ok((shapes, groups))
}

/// True when the selection can become a group: at least two shapes,
/// none of which already belongs to one (no nested or overlapping
/// groups).
pub fn can_group(shapes: &[Shape], selected: &[ShapeId]) -> bool {
    if selected.len() < 2 {
        return false;
    }
    shapes
        .iter()
        .filter(|s| selected.contains(&s.id))
        .all(|s| s.group_id.is_none())
}

/// True when at least one selected shape currently has a group.
pub fn can_ungroup(shapes: &[Shape], selected: &[ShapeId]) -> bool {
    shapes
        .iter()
        .any(|s| selected.contains(&s.id) && s.group_id.is_some())
}

/// Translate every member shape and the group record by `delta`.
/// An unknown group id leaves everything unchanged (dangling weak
/// references are tolerated, never fatal).
pub fn move_group(
    shapes: &[Shape],
    groups: &[Group],
    group_id: ShapeId,
    delta: Point,
) -> (Vec<Shape>, Vec<Group>) {
    let Some(group) = groups.iter().find(|g| g.id == group_id) else {
        return (shapes.to_vec(), groups.to_vec());
    };

    let shapes = shapes
        .iter()
        .map(|s| {
            if group.members.contains(&s.id) {
                let mut s = s.clone();
                s.position.x += delta.x;
                s.position.y += delta.y;
                s
            } else {
                s.clone()
            }
        })
        .collect();

    let groups = groups
        .iter()
        .map(|g| {
            if g.id == group_id {
                let mut g = g.clone();
                g.position.x += delta.x;
                g.position.y += delta.y;
                g
            } else {
                g.clone()
            }
        })
        .collect();

    (shapes, groups)
}

/// Rescale the group to `new_size`, propagating independent X/Y scale
/// factors to every member's offset inside the old bounds and to its
/// size.
pub fn resize_group(
    shapes: &[Shape],
    groups: &[Group],
    group_id: ShapeId,
    new_size: Size,
) -> (Vec<Shape>, Vec<Group>) {
    let Some(group) = groups.iter().find(|g| g.id == group_id) else {
        return (shapes.to_vec(), groups.to_vec());
    };

    let sx = new_size.width / group.size.width;
    let sy = new_size.height / group.size.height;
    let origin = group.position;

    let shapes = shapes
        .iter()
        .map(|s| {
            if group.members.contains(&s.id) {
                let mut s = s.clone();
                s.position.x = origin.x + (s.position.x - origin.x) * sx;
                s.position.y = origin.y + (s.position.y - origin.y) * sy;
                s.size.width *= sx;
                s.size.height *= sy;
                s
            } else {
                s.clone()
            }
        })
        .collect();

    let groups = groups
        .iter()
        .map(|g| {
            if g.id == group_id {
                let mut g = g.clone();
                g.size = new_size;
                g
            } else {
                g.clone()
            }
        })
        .collect();

    (shapes, groups)
}
