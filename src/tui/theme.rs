use ratatui::style::Color;

use crate::model::{Status, UiConfig};

/// Colors used by every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub selection_bg: Color,
    /// Status values still waiting on a write
    pub pending: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xCF, 0xDA),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xF2, 0x9E, 0x4C),
            dim: Color::Rgb(0x6B, 0x73, 0x85),
            red: Color::Rgb(0xE0, 0x55, 0x55),
            green: Color::Rgb(0x7F, 0xD8, 0x8F),
            cyan: Color::Rgb(0x5F, 0xC8, 0xE6),
            purple: Color::Rgb(0xB4, 0x8E, 0xE8),
            selection_bg: Color::Rgb(0x2A, 0x30, 0x3D),
            pending: Color::Rgb(0xE6, 0xC3, 0x4A),
        }
    }
}

/// "#RRGGBB" to an RGB color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Defaults with `[ui.colors]` overrides applied. Unknown keys and
    /// malformed values are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(%key, %value, "ignoring malformed color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "red" => &mut theme.red,
                "green" => &mut theme.green,
                "cyan" => &mut theme.cyan,
                "purple" => &mut theme.purple,
                "selection_bg" => &mut theme.selection_bg,
                "pending" => &mut theme.pending,
                _ => continue,
            };
            *slot = color;
        }
        theme
    }

    pub fn status_color(&self, status: Status, pending: bool) -> Color {
        match (status, pending) {
            (_, true) => self.pending,
            (Status::Open, false) => self.text,
            (Status::Done, false) => self.green,
        }
    }
}
