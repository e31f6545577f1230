use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::model::item::{Edge, Item};
use crate::ops::reorder::{self, MoveRequest};

/// Error type for order store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
    #[error("item at index {0} has an empty id")]
    EmptyId(usize),
}

/// Error type for id-addressed moves (CLI)
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("item not found: {0}")]
    NotFound(String),
    #[error("cannot move {id} {request}: already at the {position} position")]
    Disabled {
        id: String,
        request: &'static str,
        position: &'static str,
    },
}

/// A completed move of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reordered {
    pub id: String,
    pub from: usize,
    pub to: usize,
}

/// Called with the new order after every completed reorder.
pub type ChangeListener = Box<dyn FnMut(&[Item])>;

/// Owner of the current item order.
///
/// Lookups by id go through a hash index that is rebuilt whenever the
/// sequence is replaced.
pub struct OrderStore {
    items: Vec<Item>,
    index: HashMap<String, usize>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderStore")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl OrderStore {
    pub fn new(items: Vec<Item>) -> Result<Self, StoreError> {
        let index = build_index(&items)?;
        Ok(OrderStore {
            items,
            index,
            listeners: Vec::new(),
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Register a listener for completed reorders.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Item]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Swap in a sequence from outside (e.g. a reloaded file). Listeners are
    /// not called; this is not a reorder.
    pub fn replace(&mut self, items: Vec<Item>) -> Result<(), StoreError> {
        let index = build_index(&items)?;
        self.items = items;
        self.index = index;
        Ok(())
    }

    /// Move the item at `start` relative to the item at `target`.
    ///
    /// Returns `None` without touching anything when the resolved
    /// destination is `start`.
    pub fn reorder_item(
        &mut self,
        start: usize,
        target: usize,
        edge: Option<Edge>,
    ) -> Option<Reordered> {
        let finish = reorder::resolve_destination(start, target, edge);
        if finish == start {
            return None;
        }

        let reordered = reorder::reorder(&self.items, start, finish);
        let id = reordered[finish].id.clone();
        self.commit(reordered);

        tracing::info!(id = %id, from = start, to = finish, "item reordered");
        Some(Reordered {
            id,
            from: start,
            to: finish,
        })
    }

    /// Keyboard move of the item at `index`. Disabled requests (up on the
    /// first item, down on the last) return `None` and change nothing.
    pub fn move_item(&mut self, index: usize, request: MoveRequest) -> Option<Reordered> {
        let target = reorder::adjacent_target(index, self.items.len(), request)?;
        self.reorder_item(index, target, None)
    }

    /// Id-addressed keyboard move.
    pub fn move_by_id(
        &mut self,
        id: &str,
        request: MoveRequest,
    ) -> Result<Option<Reordered>, MoveError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| MoveError::NotFound(id.to_string()))?;
        if reorder::adjacent_target(index, self.items.len(), request).is_none() {
            let position = crate::model::ItemPosition::of(index, self.items.len());
            return Err(MoveError::Disabled {
                id: id.to_string(),
                request: request.as_str(),
                position: position.as_str(),
            });
        }
        Ok(self.move_item(index, request))
    }

    /// Id-addressed edge move: place `id` directly before/after `target_id`.
    pub fn move_next_to(
        &mut self,
        id: &str,
        target_id: &str,
        edge: Edge,
    ) -> Result<Option<Reordered>, MoveError> {
        let start = self
            .index_of(id)
            .ok_or_else(|| MoveError::NotFound(id.to_string()))?;
        let target = self
            .index_of(target_id)
            .ok_or_else(|| MoveError::NotFound(target_id.to_string()))?;
        Ok(self.reorder_item(start, target, Some(edge)))
    }

    fn commit(&mut self, items: Vec<Item>) {
        self.index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();
        self.items = items;
        for listener in &mut self.listeners {
            listener(&self.items);
        }
    }
}

fn build_index(items: &[Item]) -> Result<HashMap<String, usize>, StoreError> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(StoreError::EmptyId(i));
        }
        if index.insert(item.id.clone(), i).is_some() {
            return Err(StoreError::DuplicateId(item.id.clone()));
        }
    }
    Ok(index)
}
