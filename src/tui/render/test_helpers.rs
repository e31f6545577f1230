use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Item, ListFile};
use crate::tui::app::App;

pub const TERM_W: u16 = 40;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over items whose labels are their ids upper-cased.
pub fn app_with_ids(ids: &[&str]) -> App {
    let file = ListFile {
        items: ids
            .iter()
            .map(|id| Item::new(*id, id.to_uppercase()))
            .collect(),
        ..ListFile::default()
    };
    App::new(file, None).unwrap()
}

/// Like `app_with_ids`, with the list laid out as if rendered into a
/// `TERM_W`x`TERM_H` area at the top-left: item `i` has its label on
/// row `1 + 2i`.
pub fn layout_app(ids: &[&str]) -> App {
    let mut app = app_with_ids(ids);
    app.layout.area = Rect::new(0, 0, TERM_W, TERM_H);
    app.layout.row_height = 2;
    app.layout.scroll = 0;
    app.layout.count = ids.len();
    app
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::render;

    #[test]
    fn test_full_frame() {
        let mut app = app_with_ids(&["a", "b"]);
        let out = render_to_string(TERM_W, 8, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with(" Items"));
        assert!(lines[1].starts_with("────"));
        assert_eq!(lines[3], " ⋮⋮ A");
        assert_eq!(lines[5], " ⋮⋮ B");
        assert!(lines[7].ends_with("q quit"));
    }

    #[test]
    fn test_full_frame_with_help() {
        let mut app = app_with_ids(&["a"]);
        app.show_help = true;
        let out = render_to_string(TERM_W, 20, |frame, _| render(frame, &mut app));
        assert!(out.contains("Help"));
    }

    #[test]
    fn test_full_frame_during_pointer_drag() {
        use crate::tui::input::{handle_mouse, DragSession};
        use crossterm::event::MouseButton;

        let mut app = app_with_ids(&["a", "b", "c"]);
        // First frame records the layout the pointer is hit-tested against
        render_to_string(TERM_W, 10, |frame, _| render(frame, &mut app));
        // list starts at row 2; a's label is on row 3
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 2, 3));
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 2, 8));
        let session: Option<&DragSession> = app.pointer.session();
        assert!(session.is_some());

        let out = render_to_string(TERM_W, 10, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = out.lines().collect();
        // indicator below c, preview right of the pointer
        assert!(lines[8].contains('●'));
        assert!(lines[8].contains(" A"));
        assert!(lines[9].contains("dragging A"));
    }
}
