use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Focus", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move focus", key_style, desc_style);
    add_binding(&mut lines, " Tab/S-Tab", "Next / previous item", key_style, desc_style);
    add_binding(&mut lines, " g/G", "First / last item", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Moving", header_style)));
    add_binding(&mut lines, " Space", "Pick up / drop", key_style, desc_style);
    add_binding(&mut lines, " \u{2191}\u{2193}", "Move held item", key_style, desc_style);
    add_binding(&mut lines, " Home/End", "Move held item to top / bottom", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Drop held item", key_style, desc_style);
    add_binding(&mut lines, " Mouse", "Drag by the \u{22EE}\u{22EE} handle", key_style, desc_style);
    if app.drag.cancel_on_escape {
        add_binding(&mut lines, " Esc", "Cancel mouse drag", key_style, desc_style);
    }
    lines.push(Line::from(""));

    add_binding(&mut lines, " ?", "Close help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(" Help ", header_style))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12}", key), key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle using percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_ids, render_to_string};

    #[test]
    fn test_help_lists_bindings() {
        let app = app_with_ids(&["a"]);
        let out = render_to_string(80, 30, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(out.contains("Help"));
        assert!(out.contains("Pick up / drop"));
        assert!(out.contains("Cancel mouse drag"));
    }

    #[test]
    fn test_help_omits_cancel_when_disabled() {
        let mut app = app_with_ids(&["a"]);
        app.drag.cancel_on_escape = false;
        let out = render_to_string(80, 30, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(!out.contains("Cancel mouse drag"));
    }
}
