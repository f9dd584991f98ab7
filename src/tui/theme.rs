use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    /// Task bar fill
    pub bar: Color,
    /// Bar fill for the selected row
    pub bar_selected: Color,
    /// Background for weekend day columns
    pub weekend: Color,
    /// Month boundary lines
    pub month_line: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x60, 0x60, 0x78),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            bar: Color::Rgb(0x7A, 0x7A, 0x8C),
            bar_selected: Color::Rgb(0x44, 0x88, 0xFF),
            weekend: Color::Rgb(0x1A, 0x1A, 0x26),
            month_line: Color::Rgb(0x50, 0x50, 0x68),
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
    /// Create a theme from the chart UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "highlight" => theme.highlight = color,
                "bar" => theme.bar = color,
                "bar_selected" => theme.bar_selected = color,
                "weekend" => theme.weekend = color,
                "month_line" => theme.month_line = color,
                _ => {}
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn hex_overrides_apply() {
        let mut colors = HashMap::new();
        colors.insert("bar".to_string(), "#4488FF".to_string());
        colors.insert("weekend".to_string(), "not-a-color".to_string());
        let ui = UiConfig {
            name_width: 26,
            colors,
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.bar, Color::Rgb(0x44, 0x88, 0xFF));
        // Bad values fall back to the default
        assert_eq!(theme.weekend, Theme::default().weekend);
    }
}
