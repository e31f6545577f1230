use crate::model::item::Edge;
use crate::ops::order_store::{OrderStore, Reordered};

/// Payload attached to a row when a drag starts on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragData {
    pub id: String,
    /// Index at drag start; may be stale by the time of the drop
    pub index: usize,
}

/// The drop target under the pointer, with the closest edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTargetData {
    pub id: String,
    /// Index when the pointer entered; only used for tracing
    pub index: usize,
    pub edge: Option<Edge>,
}

/// What a drop notification amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The source item moved.
    Moved(Reordered),
    /// Dropped outside every valid target.
    NoTarget,
    /// Source or target no longer exists in the current order.
    Stale,
    /// Resolved destination equals the source.
    Unchanged,
    /// Drop arrived without a matching drag start.
    Ignored,
}

/// Observes the drag lifecycle and turns drops into reorders.
#[derive(Debug, Default)]
pub struct InteractionMonitor {
    active: Option<DragData>,
}

impl InteractionMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The drag currently in flight, if any.
    pub fn active(&self) -> Option<&DragData> {
        self.active.as_ref()
    }

    pub fn on_drag_start(&mut self, source: DragData) {
        tracing::debug!(id = %source.id, index = source.index, "drag started");
        self.active = Some(source);
    }

    /// Drag abandoned (Escape, focus loss): nothing is reordered.
    pub fn on_cancel(&mut self) {
        if let Some(source) = self.active.take() {
            tracing::debug!(id = %source.id, "drag cancelled");
        }
    }

    /// Handle a drop of `source` onto `target`.
    ///
    /// Indices are looked up again by id because the order may have changed
    /// since the drag started.
    pub fn on_drop(
        &mut self,
        store: &mut OrderStore,
        source: &DragData,
        target: Option<&DropTargetData>,
    ) -> DropOutcome {
        match self.active.take() {
            Some(active) if active.id == source.id => {}
            _ => {
                tracing::debug!(id = %source.id, "drop without matching drag start");
                return DropOutcome::Ignored;
            }
        }

        let Some(target) = target else {
            tracing::debug!(id = %source.id, "dropped outside every target");
            return DropOutcome::NoTarget;
        };

        let (Some(start), Some(index_of_target)) =
            (store.index_of(&source.id), store.index_of(&target.id))
        else {
            tracing::debug!(
                source_id = %source.id,
                target_id = %target.id,
                hovered_index = target.index,
                "drop references an item that is no longer in the list"
            );
            return DropOutcome::Stale;
        };
        if index_of_target != target.index {
            tracing::debug!(
                target_id = %target.id,
                hovered_index = target.index,
                index = index_of_target,
                "target shifted since it was hovered"
            );
        }

        match store.reorder_item(start, index_of_target, target.edge) {
            Some(moved) => DropOutcome::Moved(moved),
            None => DropOutcome::Unchanged,
        }
    }
}
