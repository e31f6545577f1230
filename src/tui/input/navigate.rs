use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::item_view::KeyAction;

/// Terminals disagree on whether shifted symbols carry SHIFT. Drop it for
/// anything that isn't a letter so `?` matches either way.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && !c.is_ascii_alphabetic()
    {
        key.modifiers.remove(KeyModifiers::SHIFT);
    }
    key
}

/// Offer the key to the focused row first; it owns Space/Enter and
/// everything while it is held.
pub(super) fn handle_list_key(app: &mut App, key: KeyEvent) {
    let Some(index) = app.focus_index() else {
        handle_navigate(app, key);
        return;
    };
    let position = app.position_of(index);
    let Some(id) = app.focus.clone() else {
        return;
    };
    let action = match app.view_mut(&id) {
        Some(view) => view.handle_key(key, position),
        None => KeyAction::Ignored,
    };

    match action {
        KeyAction::Move(request) => {
            if let Some(moved) = app.store.move_item(index, request) {
                app.sync_views();
                app.announce_move(&moved);
            }
        }
        // Focus stays on the held item
        KeyAction::SuppressFocus | KeyAction::Handled => {}
        KeyAction::Ignored => handle_navigate(app, key),
    }
}

/// Keys that only make sense while nothing is held
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.move_focus(-1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.move_focus(1),
        KeyCode::Home | KeyCode::Char('g') => app.set_focus_index(0),
        KeyCode::End | KeyCode::Char('G') => {
            if let Some(last) = app.store.len().checked_sub(1) {
                app.set_focus_index(last);
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
