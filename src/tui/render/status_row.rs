use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Key hints for whatever is going on right now
fn hints(app: &App) -> String {
    if app.pointer.is_dragging() {
        let label = app
            .pointer
            .session()
            .map(|s| s.preview.label.as_str())
            .unwrap_or_default();
        return if app.drag.cancel_on_escape {
            format!("dragging {}  Esc cancel", label)
        } else {
            format!("dragging {}", label)
        };
    }
    if app.keyboard_dragging() {
        return "\u{2191}\u{2193} move  Home/End top/bottom  Space/Esc drop".to_string();
    }
    if app.ui.show_key_hints {
        "\u{2191}\u{2193} focus  Space pick up  ? help  q quit".to_string()
    } else {
        String::new()
    }
}

/// Render the status row (bottom of screen): the last message on the left,
/// hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let message = app
        .status_message
        .as_deref()
        .map(|m| truncate_to_width(&format!(" {}", m), width))
        .unwrap_or_default();
    let hint = hints(app);
    let content_width = display_width(&message);
    let hint_width = display_width(&hint) + 1;

    let mut spans = vec![Span::styled(
        message,
        Style::default().fg(app.theme.text_bright).bg(bg),
    )];
    if !hint.is_empty() && content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_ids, render_to_string};

    fn status(app: &App, w: u16) -> String {
        render_to_string(w, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn test_idle_hints() {
        let app = app_with_ids(&["a"]);
        let out = status(&app, 60);
        assert!(out.ends_with("Space pick up  ? help  q quit"));
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let mut app = app_with_ids(&["a"]);
        app.ui.show_key_hints = false;
        assert_eq!(status(&app, 60), "");
    }

    #[test]
    fn test_held_hints() {
        let mut app = app_with_ids(&["a", "b"]);
        app.view_mut("a").unwrap().on_drag_start();
        assert!(status(&app, 60).ends_with("Space/Esc drop"));
    }

    #[test]
    fn test_message_and_hints() {
        let mut app = app_with_ids(&["a", "b"]);
        app.status_message = Some("A moved to position 2 of 2".into());
        let out = status(&app, 80);
        assert!(out.starts_with(" A moved to position 2 of 2"));
        assert!(out.ends_with("q quit"));
    }

    #[test]
    fn test_hints_dropped_when_narrow() {
        let mut app = app_with_ids(&["a"]);
        app.status_message = Some("list reloaded".into());
        assert_eq!(status(&app, 20), " list reloaded");
    }
}
