pub mod monitor;
pub mod order_store;
pub mod reorder;

pub use monitor::{DragData, DropOutcome, DropTargetData, InteractionMonitor};
pub use order_store::{MoveError, OrderStore, Reordered, StoreError};
pub use reorder::{MoveRequest, adjacent_target, reorder, resolve_destination};
