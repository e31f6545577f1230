use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Focused row background
    pub focus_bg: Color,
    /// Drop indicator line and terminal
    pub indicator: Color,
    pub preview_bg: Color,
    pub preview_fg: Color,
    /// Post-move flash, first half then second half
    pub flash: Color,
    pub flash_fade: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            focus_bg: Color::Rgb(0x3D, 0x14, 0x38),
            indicator: Color::Rgb(0x44, 0x88, 0xFF),
            preview_bg: Color::Rgb(0x64, 0x95, 0xED),
            preview_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            flash: Color::Rgb(0x44, 0x88, 0xFF),
            flash_fade: Color::Rgb(0x22, 0x33, 0x66),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from `[ui.colors]`, falling back to defaults.
    /// Unknown keys and malformed colors are skipped.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring malformed color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "focus_bg" => theme.focus_bg = color,
                "indicator" => theme.indicator = color,
                "preview_bg" => theme.preview_bg = color,
                "preview_fg" => theme.preview_fg = color,
                "flash" => theme.flash = color,
                "flash_fade" => theme.flash_fade = color,
                _ => {}
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#6495ED"),
            Some(Color::Rgb(0x64, 0x95, 0xED))
        );
        assert_eq!(parse_hex_color("6495ED"), None); // missing #
        assert_eq!(parse_hex_color("#6495"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("indicator".into(), "#00FF00".into());
        ui.colors.insert("preview_bg".into(), "#112233".into());
        ui.colors.insert("bogus".into(), "#112233".into());
        ui.colors.insert("text".into(), "not-a-color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.indicator, Color::Rgb(0, 0xFF, 0));
        assert_eq!(theme.preview_bg, Color::Rgb(0x11, 0x22, 0x33));
        // Unchanged defaults still present
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
    }
}
