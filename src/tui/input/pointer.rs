use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::ops::{DragData, DropOutcome, DropTargetData};
use crate::tui::app::App;
use crate::tui::layout::Hit;
use crate::util::unicode::sanitize_label;

/// Floating copy of the dragged row, captured when the drag begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPreview {
    pub label: String,
}

/// A pointer drag in flight.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub source: DragData,
    /// Current drop target, if any
    pub over: Option<DropTargetData>,
    /// Last pointer cell (col, row)
    pub pointer: (u16, u16),
    pub preview: DragPreview,
}

#[derive(Debug, Clone)]
struct Press {
    id: String,
    origin: (u16, u16),
}

/// Turns raw mouse events into drag lifecycle notifications.
///
/// A press on a row arms a drag; moving at least `drag.threshold` cells
/// starts it (preview first, then drag start); release drops.
#[derive(Debug, Default)]
pub struct PointerTracker {
    press: Option<Press>,
    session: Option<DragSession>,
}

impl PointerTracker {
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

/// What the pointer is over, from the drop-target point of view
enum Candidate {
    Target(DropTargetData),
    /// Over the list but not over another item: keep the current target
    Sticky,
    /// Off the list
    Nothing,
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let pos = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => press(app, pos),
        MouseEventKind::Drag(MouseButton::Left) => drag_to(app, pos),
        MouseEventKind::Up(MouseButton::Left) => release(app, pos),
        MouseEventKind::ScrollDown if !busy(app) => app.move_focus(1),
        MouseEventKind::ScrollUp if !busy(app) => app.move_focus(-1),
        _ => {}
    }
}

/// A drag of either kind is in progress
fn busy(app: &App) -> bool {
    app.pointer.is_dragging() || app.keyboard_dragging()
}

fn press(app: &mut App, (col, row): (u16, u16)) {
    if busy(app) {
        return;
    }
    let Hit::Item { index, .. } = app.layout.hit_test(col, row) else {
        return;
    };
    // Only the label row is a drag handle
    if app.layout.label_row(index) != Some(row) {
        return;
    }
    let Some(item) = app.store.get(index) else {
        return;
    };
    let id = item.id.clone();
    app.focus = Some(id.clone());
    app.pointer.press = Some(Press {
        id,
        origin: (col, row),
    });
}

fn drag_to(app: &mut App, pos: (u16, u16)) {
    if app.pointer.session.is_none() && !start_if_past_threshold(app, pos) {
        return;
    }
    update_target(app, pos);
}

/// Start the drag once the pointer has travelled far enough from the press.
fn start_if_past_threshold(app: &mut App, (col, row): (u16, u16)) -> bool {
    if app.keyboard_dragging() {
        app.pointer.press = None;
        return false;
    }
    let Some(press) = &app.pointer.press else {
        return false;
    };
    let travelled = press.origin.0.abs_diff(col).max(press.origin.1.abs_diff(row));
    if travelled < app.drag.threshold.max(1) {
        return false;
    }
    let id = press.id.clone();
    let Some(index) = app.store.index_of(&id) else {
        app.pointer.press = None;
        return false;
    };
    let label = app.store.get(index).map(|i| i.label.clone()).unwrap_or_default();

    if let Some(view) = app.views.get_mut(&id) {
        view.on_generate_preview();
    }
    let preview = DragPreview {
        label: sanitize_label(&label),
    };
    if let Some(view) = app.views.get_mut(&id) {
        view.on_drag_start();
    }

    let source = DragData { id, index };
    app.monitor.on_drag_start(source.clone());
    app.pointer.press = None;
    app.pointer.session = Some(DragSession {
        source,
        over: None,
        pointer: (col, row),
        preview,
    });
    true
}

fn candidate_at(app: &App, source_id: &str, (col, row): (u16, u16)) -> Candidate {
    match app.layout.hit_test(col, row) {
        Hit::Outside => Candidate::Nothing,
        Hit::Empty => Candidate::Sticky,
        Hit::Item { index, edge } => match app.store.get(index) {
            // A row can't be dropped on itself
            Some(item) if item.id != source_id => Candidate::Target(DropTargetData {
                id: item.id.clone(),
                index,
                edge: Some(edge),
            }),
            _ => Candidate::Sticky,
        },
    }
}

fn update_target(app: &mut App, pos: (u16, u16)) {
    let Some(source_id) = app.pointer.session.as_ref().map(|s| s.source.id.clone()) else {
        return;
    };
    let candidate = candidate_at(app, &source_id, pos);

    let App { pointer, views, .. } = app;
    let Some(session) = pointer.session.as_mut() else {
        return;
    };
    session.pointer = pos;

    match candidate {
        Candidate::Sticky => {}
        Candidate::Nothing => {
            if let Some(old) = session.over.take()
                && let Some(view) = views.get_mut(&old.id)
            {
                view.on_drag_leave();
            }
        }
        Candidate::Target(target) => {
            let same = session.over.as_ref().is_some_and(|cur| cur.id == target.id);
            if same {
                if let Some(view) = views.get_mut(&target.id) {
                    view.on_drag(target.edge);
                }
            } else {
                if let Some(old) = session.over.take()
                    && let Some(view) = views.get_mut(&old.id)
                {
                    view.on_drag_leave();
                }
                if let Some(view) = views.get_mut(&target.id) {
                    view.on_drag_enter(target.edge);
                }
            }
            session.over = Some(target);
        }
    }
}

fn release(app: &mut App, pos: (u16, u16)) {
    app.pointer.press = None;
    if app.pointer.session.is_none() {
        return;
    }
    update_target(app, pos);
    let Some(session) = app.pointer.session.take() else {
        return;
    };

    if let Some(target) = &session.over
        && let Some(view) = app.views.get_mut(&target.id)
    {
        view.on_drop();
    }
    if let Some(view) = app.views.get_mut(&session.source.id) {
        view.on_drop();
    }

    let outcome = app
        .monitor
        .on_drop(&mut app.store, &session.source, session.over.as_ref());
    if let DropOutcome::Moved(moved) = outcome {
        app.start_flash(&moved.id);
        app.sync_views();
        app.announce_move(&moved);
    }
}

/// Abandon a pointer drag: every row goes back to idle, the list is untouched.
pub(super) fn cancel_pointer_drag(app: &mut App) {
    app.pointer.press = None;
    let Some(session) = app.pointer.session.take() else {
        return;
    };
    if let Some(target) = &session.over
        && let Some(view) = app.views.get_mut(&target.id)
    {
        view.on_drag_leave();
    }
    if let Some(view) = app.views.get_mut(&session.source.id) {
        view.on_drop();
    }
    app.monitor.on_cancel();
}
