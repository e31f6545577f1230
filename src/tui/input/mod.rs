mod navigate;
mod pointer;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::App;

#[allow(unused_imports)]
use navigate::*;

pub use pointer::{DragPreview, DragSession, PointerTracker};

/// Handle a key press
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    // Help overlay swallows the key that closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // The pointer owns the list until it lets go
    if app.pointer.is_dragging() {
        if key.code == KeyCode::Esc && app.drag.cancel_on_escape {
            pointer::cancel_pointer_drag(app);
        }
        return;
    }

    let key = normalize_key(key);
    handle_list_key(app, key);
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        return;
    }
    pointer::handle_mouse(app, mouse);
}

/// Abandon any pointer drag, e.g. when the terminal loses focus.
pub fn cancel_pointer_drag(app: &mut App) {
    pointer::cancel_pointer_drag(app);
}
