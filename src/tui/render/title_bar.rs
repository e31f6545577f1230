use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the title line and the separator under it
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let count = match app.store.len() {
        1 => "1 item ".to_string(),
        n => format!("{} items ", n),
    };
    let count_width = display_width(&count);
    let title = truncate_to_width(
        &format!(" {}", app.title),
        width.saturating_sub(count_width + 1),
    );
    let pad = width.saturating_sub(display_width(&title) + count_width);

    let title_line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    frame.render_widget(Paragraph::new(vec![title_line, separator]), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_ids, render_to_string};

    #[test]
    fn test_title_and_count() {
        let app = app_with_ids(&["a", "b"]);
        let out = render_to_string(20, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        assert_eq!(out, " Items      2 items\n────────────────────");
    }

    #[test]
    fn test_single_item_count() {
        let mut app = app_with_ids(&["a"]);
        app.title = "Columns".into();
        let out = render_to_string(30, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        assert!(out.starts_with(" Columns"));
        assert!(out.lines().next().unwrap().ends_with("1 item"));
    }
}
