use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::item_view::DragState;
use crate::tui::layout::{ListLayout, scroll_to_show};
use crate::util::unicode::{fit_to_width, sanitize_label};

use super::drop_indicator::indicator_line;

/// Grip shown at the start of every row
const HANDLE: &str = "\u{22EE}\u{22EE}";
/// Cells before the label: space, grip, space
const LABEL_INDENT: usize = 4;

/// Render the list and record where it went so pointer events can be
/// mapped back to items.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let mut layout = ListLayout {
        area,
        row_height: app.ui.row_height.max(2),
        scroll: app.scroll,
        count: app.store.len(),
    };
    let capacity = layout.capacity();
    if let Some(focus) = app.focus_index() {
        app.scroll = scroll_to_show(app.scroll, focus, capacity);
    }
    app.scroll = app.scroll.min(layout.count.saturating_sub(capacity));
    layout.scroll = app.scroll;
    app.layout = layout;

    let bg = app.theme.background;
    let width = area.width as usize;
    let flash = app.active_flash(now);
    let pointer_dragging = app.pointer.is_dragging();

    for (index, item) in app.store.items().iter().enumerate() {
        let Some(row) = layout.label_row(index) else {
            continue;
        };
        let state = app.view(&item.id).map(|v| v.state()).unwrap_or_default();
        let focused = app.focus.as_deref() == Some(item.id.as_str());

        let mut row_bg = if focused && !pointer_dragging {
            app.theme.focus_bg
        } else {
            bg
        };
        if let Some(f) = flash
            && f.id == item.id
        {
            row_bg = if f.remaining_at(now) > 0.5 {
                app.theme.flash
            } else {
                app.theme.flash_fade
            };
        }

        // The held row stays in place, dimmed, while the pointer carries a copy
        let (handle_fg, label_style) = match state {
            DragState::Dragging => (
                app.theme.highlight,
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::DIM),
            ),
            _ if focused => (
                app.theme.highlight,
                Style::default().fg(app.theme.text_bright).bg(row_bg),
            ),
            _ => (app.theme.dim, Style::default().fg(app.theme.text).bg(row_bg)),
        };

        let label = fit_to_width(
            &sanitize_label(&item.label),
            width.saturating_sub(LABEL_INDENT),
        );
        let line = Line::from(vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(HANDLE, Style::default().fg(handle_fg).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(label, label_style),
        ]);
        frame.render_widget(Paragraph::new(line), row_rect(area, row));
    }

    // Indicators go in gutter rows, after the labels so nothing paints over them
    for (index, item) in app.store.items().iter().enumerate() {
        let Some(DragState::DraggingOver { edge: Some(edge) }) =
            app.view(&item.id).map(|v| v.state())
        else {
            continue;
        };
        let Some(row) = layout.indicator_row(index, edge) else {
            continue;
        };
        let inset = 1.min(area.width);
        let rect = Rect {
            x: area.x + inset,
            y: row,
            width: area.width.saturating_sub(inset * 2),
            height: 1,
        };
        let line = indicator_line(
            &app.ui.indicator,
            rect.width as usize,
            app.theme.indicator,
            bg,
        );
        frame.render_widget(Paragraph::new(line), rect);
    }
}

fn row_rect(area: Rect, row: u16) -> Rect {
    Rect {
        x: area.x,
        y: row,
        width: area.width,
        height: 1,
    }
}
