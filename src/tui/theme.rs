use ratatui::style::Color;

use crate::model::{Priority, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub error_bg: Color,
    pub success_bg: Color,
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_normal: Color,
    pub priority_unset: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x70, 0x70, 0x88),
            highlight: Color::Rgb(0x41, 0x96, 0xFB),
            selection_bg: Color::Rgb(0x28, 0x30, 0x48),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            error_bg: Color::Rgb(0xF4, 0x43, 0x36),
            success_bg: Color::Rgb(0x4C, 0xAF, 0x50),
            priority_high: Color::Rgb(0xFF, 0x57, 0x22),
            priority_medium: Color::Rgb(0xFF, 0x98, 0x00),
            priority_normal: Color::Rgb(0x4C, 0xAF, 0x50),
            priority_unset: Color::Rgb(0x99, 0x99, 0x99),
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
    /// Create a theme from the `[ui.colors]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "selection_bg" => theme.selection_bg = color,
                    "red" => theme.red = color,
                    "green" => theme.green = color,
                    "yellow" => theme.yellow = color,
                    "error_bg" => theme.error_bg = color,
                    "success_bg" => theme.success_bg = color,
                    "priority_high" => theme.priority_high = color,
                    "priority_medium" => theme.priority_medium = color,
                    "priority_normal" => theme.priority_normal = color,
                    "priority_unset" => theme.priority_unset = color,
                    _ => {}
                }
            }
        }
        theme
    }

    /// Color for a task's priority level.
    pub fn priority_color(&self, priority: Option<Priority>) -> Color {
        match priority {
            Some(Priority::High) => self.priority_high,
            Some(Priority::Medium) => self.priority_medium,
            Some(Priority::Normal) => self.priority_normal,
            Some(Priority::Unknown) | None => self.priority_unset,
        }
    }
}
