use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single list entry. Only `id` takes part in equality and lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity, unique within a list
    pub id: String,
    /// Display text
    pub label: String,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Where an item sits in the list, derived from its index on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemPosition {
    First,
    Last,
    Middle,
    Only,
}

impl ItemPosition {
    /// Classify `index` within a list of `len` items.
    pub fn of(index: usize, len: usize) -> Self {
        if len == 1 {
            ItemPosition::Only
        } else if index == 0 {
            ItemPosition::First
        } else if index + 1 == len {
            ItemPosition::Last
        } else {
            ItemPosition::Middle
        }
    }

    pub fn can_move_up(self) -> bool {
        !matches!(self, ItemPosition::First | ItemPosition::Only)
    }

    pub fn can_move_down(self) -> bool {
        !matches!(self, ItemPosition::Last | ItemPosition::Only)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemPosition::First => "first",
            ItemPosition::Last => "last",
            ItemPosition::Middle => "middle",
            ItemPosition::Only => "only",
        }
    }
}

/// Side of a target item a dragged item would land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Before,
    After,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Before => "before",
            Edge::After => "after",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_label() {
        assert_eq!(Item::new("a", "Alpha"), Item::new("a", "Renamed"));
        assert_ne!(Item::new("a", "Alpha"), Item::new("b", "Alpha"));
    }

    #[test]
    fn test_position_classification() {
        assert_eq!(ItemPosition::of(0, 1), ItemPosition::Only);
        assert_eq!(ItemPosition::of(0, 3), ItemPosition::First);
        assert_eq!(ItemPosition::of(1, 3), ItemPosition::Middle);
        assert_eq!(ItemPosition::of(2, 3), ItemPosition::Last);
        assert_eq!(ItemPosition::of(1, 2), ItemPosition::Last);
    }

    #[test]
    fn test_move_availability() {
        assert!(!ItemPosition::First.can_move_up());
        assert!(ItemPosition::First.can_move_down());
        assert!(ItemPosition::Last.can_move_up());
        assert!(!ItemPosition::Last.can_move_down());
        assert!(ItemPosition::Middle.can_move_up());
        assert!(ItemPosition::Middle.can_move_down());
        assert!(!ItemPosition::Only.can_move_up());
        assert!(!ItemPosition::Only.can_move_down());
    }

    #[test]
    fn test_edge_serde_lowercase() {
        let json = serde_json::to_string(&Edge::After).unwrap();
        assert_eq!(json, "\"after\"");
        let edge: Edge = serde_json::from_str("\"before\"").unwrap();
        assert_eq!(edge, Edge::Before);
    }
}
