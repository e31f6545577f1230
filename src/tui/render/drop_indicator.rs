use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::model::IndicatorConfig;

/// Line marking where a dragged item would land: an optional terminal
/// glyph at the start, then the stroke for the rest of `width`.
pub fn indicator_line(
    config: &IndicatorConfig,
    width: usize,
    fg: Color,
    bg: Color,
) -> Line<'static> {
    let style = Style::default().fg(fg).bg(bg);
    let mut spans = Vec::with_capacity(2);
    let mut remaining = width;

    if let Some(glyph) = config.terminal.symbol()
        && remaining > 0
    {
        spans.push(Span::styled(glyph, style));
        remaining -= 1;
    }
    spans.push(Span::styled(config.stroke.symbol().repeat(remaining), style));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Stroke, Terminal};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_default_indicator() {
        let line = indicator_line(&IndicatorConfig::default(), 5, Color::Blue, Color::Black);
        insta::assert_snapshot!(text(&line), @"●────");
    }

    #[test]
    fn test_indicator_variants() {
        let config = IndicatorConfig {
            stroke: Stroke::Double,
            terminal: Terminal::Ring,
        };
        insta::assert_snapshot!(text(&indicator_line(&config, 4, Color::Blue, Color::Black)), @"○═══");

        let config = IndicatorConfig {
            stroke: Stroke::Thick,
            terminal: Terminal::None,
        };
        assert_eq!(text(&indicator_line(&config, 3, Color::Blue, Color::Black)), "━━━");
    }

    #[test]
    fn test_zero_width_is_empty() {
        let line = indicator_line(&IndicatorConfig::default(), 0, Color::Blue, Color::Black);
        assert_eq!(text(&line), "");
    }
}
