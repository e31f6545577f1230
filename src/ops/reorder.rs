use serde::Serialize;

use crate::model::item::{Edge, ItemPosition};

/// A keyboard move request for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveRequest {
    Up,
    Down,
    Top,
    Bottom,
}

impl MoveRequest {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveRequest::Up => "up",
            MoveRequest::Down => "down",
            MoveRequest::Top => "top",
            MoveRequest::Bottom => "bottom",
        }
    }
}

/// Return a copy of `list` with the element at `start` moved to `finish`.
///
/// Every other element keeps its relative order. `list` itself is untouched.
///
/// # Panics
///
/// Panics if either index is out of range. Indices come from the list the
/// caller just inspected, so a bad one is a bug, not bad input.
pub fn reorder<T: Clone>(list: &[T], start: usize, finish: usize) -> Vec<T> {
    assert!(
        start < list.len(),
        "reorder start index {} out of range (len {})",
        start,
        list.len()
    );
    assert!(
        finish < list.len(),
        "reorder finish index {} out of range (len {})",
        finish,
        list.len()
    );

    let mut result = list.to_vec();
    let moved = result.remove(start);
    result.insert(finish, moved);
    result
}

/// Destination index for moving the item at `start` next to the item at
/// `target`.
///
/// With an edge, the result is the index at which the moved item ends up
/// directly before/after the target once it has been taken out of the list
/// and put back. Without an edge the target index itself is the destination.
/// A result equal to `start` means nothing would change.
pub fn resolve_destination(start: usize, target: usize, edge: Option<Edge>) -> usize {
    if start == target {
        return start;
    }
    let Some(edge) = edge else {
        return target;
    };

    let moving_forward = start < target;
    match (moving_forward, edge) {
        (true, Edge::After) => target,
        (true, Edge::Before) => target - 1,
        (false, Edge::After) => target + 1,
        (false, Edge::Before) => target,
    }
}

/// Target index for a keyboard move, or `None` when the item's position
/// doesn't allow it (e.g. "up" on the first item).
pub fn adjacent_target(index: usize, len: usize, request: MoveRequest) -> Option<usize> {
    if index >= len {
        return None;
    }
    let position = ItemPosition::of(index, len);
    match request {
        MoveRequest::Up if position.can_move_up() => Some(index - 1),
        MoveRequest::Down if position.can_move_down() => Some(index + 1),
        MoveRequest::Top if position.can_move_up() => Some(0),
        MoveRequest::Bottom if position.can_move_down() => Some(len - 1),
        _ => None,
    }
}
