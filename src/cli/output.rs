use serde::Serialize;

use crate::model::{Item, ItemPosition};
use crate::ops::Reordered;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub position: ItemPosition,
}

#[derive(Serialize)]
pub struct ListJson {
    pub title: String,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct MoveJson {
    /// `None` when the move resolved to the item's current index
    pub moved: Option<Reordered>,
    pub order: Vec<String>,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub valid: bool,
    pub errors: Vec<String>,
}

pub fn items_json(items: &[Item]) -> Vec<ItemJson> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemJson {
            index,
            id: item.id.clone(),
            label: item.label.clone(),
            position: ItemPosition::of(index, items.len()),
        })
        .collect()
}

pub fn order_ids(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// `  0  first   a  Apples`, one line per item
pub fn format_items(items: &[Item]) -> String {
    let id_width = items.iter().map(|i| i.id.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        let position = ItemPosition::of(index, items.len());
        out.push_str(&format!(
            "{:>3}  {:<6}  {:<id_width$}  {}\n",
            index,
            position.as_str(),
            item.id,
            item.label,
            id_width = id_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_items() {
        let items = vec![
            Item::new("a", "Apples"),
            Item::new("bb", "Bananas"),
            Item::new("c", "Cherries"),
        ];
        assert_eq!(
            format_items(&items),
            "  0  first   a   Apples\n  1  middle  bb  Bananas\n  2  last    c   Cherries\n"
        );
    }

    #[test]
    fn test_items_json_positions() {
        let items = vec![Item::new("a", "A")];
        let json = serde_json::to_value(items_json(&items)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"index": 0, "id": "a", "label": "A", "position": "only"}])
        );
    }
}
