use crossterm::event::{KeyCode, KeyEvent};

use crate::model::item::{Edge, ItemPosition};
use crate::ops::reorder::MoveRequest;

/// Per-row interaction state. Only `DraggingOver` carries an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// The floating preview for this row is being captured. Momentary:
    /// drag start replaces it with `Dragging` in the same step, so it is
    /// never rendered.
    Preview,
    /// This row is the one being moved (pointer or keyboard)
    Dragging,
    /// Another row is being dragged over this one
    DraggingOver { edge: Option<Edge> },
}

/// What a key press on the focused row turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Not for the row; the list may use it (focus movement etc.)
    Ignored,
    /// Consumed by the row
    Handled,
    /// Tab while dragging: keep focus where it is
    SuppressFocus,
    /// Reorder request for the row
    Move(MoveRequest),
}

/// View-local state of one row. Never read by sibling rows.
#[derive(Debug, Clone, Default)]
pub struct ItemView {
    state: DragState,
}

impl ItemView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Edge to draw an indicator at, if this row is a drop target.
    pub fn drop_edge(&self) -> Option<Edge> {
        match self.state {
            DragState::DraggingOver { edge } => edge,
            _ => None,
        }
    }

    // -- drag source ------------------------------------------------------

    pub fn on_generate_preview(&mut self) {
        self.state = DragState::Preview;
    }

    pub fn on_drag_start(&mut self) {
        self.state = DragState::Dragging;
    }

    /// Drop completed or drag abandoned; same reset for source and target.
    pub fn on_drop(&mut self) {
        self.state = DragState::Idle;
    }

    // -- drop target ------------------------------------------------------

    pub fn on_drag_enter(&mut self, edge: Option<Edge>) {
        self.state = DragState::DraggingOver { edge };
    }

    /// Pointer moved within this row. Returns true when the state changed;
    /// repeated notifications with the same edge are no-ops.
    pub fn on_drag(&mut self, edge: Option<Edge>) -> bool {
        let next = DragState::DraggingOver { edge };
        if self.state == next {
            return false;
        }
        self.state = next;
        true
    }

    pub fn on_drag_leave(&mut self) {
        self.state = DragState::Idle;
    }

    // -- keyboard ---------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent, position: ItemPosition) -> KeyAction {
        let dragging = self.state == DragState::Dragging;
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => match self.state {
                DragState::Idle => {
                    self.state = DragState::Dragging;
                    KeyAction::Handled
                }
                DragState::Dragging => {
                    self.state = DragState::Idle;
                    KeyAction::Handled
                }
                _ => KeyAction::Ignored,
            },
            KeyCode::Tab | KeyCode::BackTab if dragging => KeyAction::SuppressFocus,
            KeyCode::Esc if dragging => {
                self.state = DragState::Idle;
                KeyAction::Handled
            }
            KeyCode::Up if dragging => move_if(position.can_move_up(), MoveRequest::Up),
            KeyCode::Down if dragging => move_if(position.can_move_down(), MoveRequest::Down),
            KeyCode::Home if dragging => move_if(position.can_move_up(), MoveRequest::Top),
            KeyCode::End if dragging => move_if(position.can_move_down(), MoveRequest::Bottom),
            // Keep other keys away from the list while an item is held
            _ if dragging => KeyAction::Handled,
            _ => KeyAction::Ignored,
        }
    }
}

fn move_if(enabled: bool, request: MoveRequest) -> KeyAction {
    if enabled {
        KeyAction::Move(request)
    } else {
        KeyAction::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dragging() -> ItemView {
        let mut view = ItemView::new();
        view.on_drag_start();
        view
    }

    #[test]
    fn test_starts_idle() {
        assert_eq!(ItemView::new().state(), DragState::Idle);
    }

    #[test]
    fn test_pointer_source_lifecycle() {
        let mut view = ItemView::new();
        view.on_generate_preview();
        assert_eq!(view.state(), DragState::Preview);
        view.on_drag_start();
        assert_eq!(view.state(), DragState::Dragging);
        view.on_drop();
        assert_eq!(view.state(), DragState::Idle);
    }

    #[test]
    fn test_drop_target_lifecycle() {
        let mut view = ItemView::new();
        view.on_drag_enter(Some(Edge::Before));
        assert_eq!(view.drop_edge(), Some(Edge::Before));
        view.on_drag_leave();
        assert_eq!(view.state(), DragState::Idle);

        view.on_drag_enter(Some(Edge::After));
        view.on_drop();
        assert_eq!(view.state(), DragState::Idle);
    }

    #[test]
    fn test_drag_over_only_changes_on_new_edge() {
        let mut view = ItemView::new();
        view.on_drag_enter(Some(Edge::Before));
        assert!(!view.on_drag(Some(Edge::Before)));
        assert!(view.on_drag(Some(Edge::After)));
        assert_eq!(view.drop_edge(), Some(Edge::After));
        assert!(!view.on_drag(Some(Edge::After)));
        assert!(view.on_drag(None));
        assert_eq!(view.state(), DragState::DraggingOver { edge: None });
    }

    #[test]
    fn test_space_toggles_dragging() {
        let mut view = ItemView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Char(' ')), ItemPosition::Middle),
            KeyAction::Handled
        );
        assert!(view.is_dragging());
        assert_eq!(
            view.handle_key(key(KeyCode::Char(' ')), ItemPosition::Middle),
            KeyAction::Handled
        );
        assert_eq!(view.state(), DragState::Idle);
    }

    #[test]
    fn test_escape_drops() {
        let mut view = dragging();
        assert_eq!(
            view.handle_key(key(KeyCode::Esc), ItemPosition::Middle),
            KeyAction::Handled
        );
        assert_eq!(view.state(), DragState::Idle);
    }

    #[test]
    fn test_escape_while_idle_is_ignored() {
        let mut view = ItemView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Esc), ItemPosition::Middle),
            KeyAction::Ignored
        );
    }

    #[test]
    fn test_tab_suppressed_only_while_dragging() {
        let mut view = ItemView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Tab), ItemPosition::First),
            KeyAction::Ignored
        );
        let mut view = dragging();
        assert_eq!(
            view.handle_key(key(KeyCode::Tab), ItemPosition::First),
            KeyAction::SuppressFocus
        );
        assert_eq!(
            view.handle_key(key(KeyCode::BackTab), ItemPosition::First),
            KeyAction::SuppressFocus
        );
        assert!(view.is_dragging());
    }

    #[test]
    fn test_arrows_request_moves_while_dragging() {
        let mut view = dragging();
        assert_eq!(
            view.handle_key(key(KeyCode::Down), ItemPosition::Middle),
            KeyAction::Move(MoveRequest::Down)
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Up), ItemPosition::Middle),
            KeyAction::Move(MoveRequest::Up)
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Home), ItemPosition::Middle),
            KeyAction::Move(MoveRequest::Top)
        );
        assert_eq!(
            view.handle_key(key(KeyCode::End), ItemPosition::Middle),
            KeyAction::Move(MoveRequest::Bottom)
        );
        assert!(view.is_dragging());
    }

    #[test]
    fn test_arrows_disabled_at_bounds() {
        let mut view = dragging();
        assert_eq!(
            view.handle_key(key(KeyCode::Up), ItemPosition::First),
            KeyAction::Handled
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Down), ItemPosition::Last),
            KeyAction::Handled
        );
        for code in [KeyCode::Up, KeyCode::Down, KeyCode::Home, KeyCode::End] {
            assert_eq!(view.handle_key(key(code), ItemPosition::Only), KeyAction::Handled);
        }
        assert!(view.is_dragging());
    }

    #[test]
    fn test_arrows_ignored_while_idle() {
        let mut view = ItemView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Down), ItemPosition::Middle),
            KeyAction::Ignored
        );
    }

    #[test]
    fn test_space_ignored_during_pointer_drag() {
        let mut view = ItemView::new();
        view.on_drag_enter(Some(Edge::After));
        assert_eq!(
            view.handle_key(key(KeyCode::Char(' ')), ItemPosition::Middle),
            KeyAction::Ignored
        );
        assert_eq!(view.drop_edge(), Some(Edge::After));
    }
}
