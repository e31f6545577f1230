use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::input::DragSession;
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

/// Widest the floating preview gets
const MAX_PREVIEW_WIDTH: usize = 32;

/// Draw the floating copy of the dragged row just right of the pointer,
/// clipped to `bounds`.
pub fn render_drag_preview(frame: &mut Frame, theme: &Theme, session: &DragSession, bounds: Rect) {
    let Some(rect) = preview_rect(session, bounds) else {
        return;
    };
    let text = truncate_to_width(
        &session.preview.label,
        (rect.width as usize).saturating_sub(2),
    );
    let style = Style::default().fg(theme.preview_fg).bg(theme.preview_bg);
    let pad = (rect.width as usize).saturating_sub(display_width(&text) + 1);
    let line = Line::from(vec![
        Span::styled(" ", style),
        Span::styled(text, style),
        Span::styled(" ".repeat(pad), style),
    ]);

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line), rect);
}

/// One row, starting a cell right of the pointer. `None` when there is no
/// room left of the bounds' right edge.
fn preview_rect(session: &DragSession, bounds: Rect) -> Option<Rect> {
    let (col, row) = session.pointer;
    if row < bounds.y || row >= bounds.bottom() {
        return None;
    }
    let x = col.saturating_add(1).max(bounds.x);
    if x >= bounds.right() {
        return None;
    }
    let wanted = (display_width(&session.preview.label) + 2).min(MAX_PREVIEW_WIDTH) as u16;
    let width = wanted.min(bounds.right() - x);
    Some(Rect {
        x,
        y: row,
        width,
        height: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::DragData;
    use crate::tui::input::DragPreview;
    use crate::tui::render::test_helpers::render_to_string;

    fn session(label: &str, pointer: (u16, u16)) -> DragSession {
        DragSession {
            source: DragData {
                id: "a".into(),
                index: 0,
            },
            over: None,
            pointer,
            preview: DragPreview {
                label: label.into(),
            },
        }
    }

    #[test]
    fn test_preview_follows_pointer() {
        let theme = Theme::default();
        let s = session("Apples", (3, 1));
        let out = render_to_string(20, 3, |frame, area| {
            render_drag_preview(frame, &theme, &s, area);
        });
        assert_eq!(out, "\n     Apples");
    }

    #[test]
    fn test_preview_clipped_at_right_edge() {
        let theme = Theme::default();
        let s = session("Apples", (14, 0));
        let out = render_to_string(20, 1, |frame, area| {
            render_drag_preview(frame, &theme, &s, area);
        });
        assert_eq!(out, "                Ap…");
    }

    #[test]
    fn test_preview_outside_bounds_is_skipped() {
        let s = session("Apples", (19, 0));
        assert_eq!(preview_rect(&s, Rect::new(0, 0, 20, 5)), None);
        let s = session("Apples", (2, 9));
        assert_eq!(preview_rect(&s, Rect::new(0, 0, 20, 5)), None);
    }
}
