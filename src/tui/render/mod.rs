pub mod drag_preview;
pub mod drop_indicator;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;
pub mod title_bar;

#[cfg(test)]
pub mod test_helpers;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let now = Instant::now();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar (2 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // list
            Constraint::Length(1), // status row
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1], now);

    // Floating copy of the dragged row follows the pointer
    if let Some(session) = app.pointer.session() {
        drag_preview::render_drag_preview(frame, &app.theme, session, area);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
