use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeKind::Light => &LIGHT,
            ThemeKind::Dark => &DARK,
        }
    }

    /// Glyph for the theme toggle button: the theme it switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeKind::Light => "☾",
            ThemeKind::Dark => "☀",
        }
    }
}

/// Named colors shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub window_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub button_primary_bg: Color,
    pub button_primary_text: Color,
    pub button_danger_bg: Color,
    pub button_danger_text: Color,
    pub button_secondary_bg: Color,
    pub button_secondary_text: Color,
    pub input_bg: Color,
    pub input_border: Color,
}

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub const LIGHT: Palette = Palette {
    window_bg: hex(0xFFFFFF),
    text_primary: hex(0x000000),
    text_secondary: hex(0x555555),
    border: hex(0xCCCCCC),
    button_primary_bg: hex(0x4CAF50),
    button_primary_text: hex(0xFFFFFF),
    button_danger_bg: hex(0xD9534F),
    button_danger_text: hex(0xFFFFFF),
    button_secondary_bg: hex(0xF0F0F0),
    button_secondary_text: hex(0x000000),
    input_bg: hex(0xFFFFFF),
    input_border: hex(0xAAAAAA),
};

pub const DARK: Palette = Palette {
    window_bg: hex(0x2D2D2D),
    text_primary: hex(0xEAEAEA),
    text_secondary: hex(0xAAAAAA),
    border: hex(0x555555),
    button_primary_bg: hex(0x5DBB63),
    button_primary_text: hex(0x000000),
    button_danger_bg: hex(0xE57373),
    button_danger_text: hex(0x000000),
    button_secondary_bg: hex(0x4A4A4A),
    button_secondary_text: hex(0xEAEAEA),
    input_bg: hex(0x3A3A3A),
    input_border: hex(0x666666),
};

/// Scale an RGB color by `percent` (110 = ten percent lighter). Named colors
/// pass through unchanged.
pub fn lighter(color: Color, percent: u16) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (u16::from(c) * percent / 100).min(255) as u8;
            // Black cannot be scaled brighter; lift it a little instead
            if (r, g, b) == (0, 0, 0) && percent > 100 {
                let lift = ((percent - 100) * 255 / 100).min(255) as u8;
                return Color::Rgb(lift, lift, lift);
            }
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

impl Palette {
    pub fn window(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.window_bg)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.window_bg)
    }

    pub fn title_button(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .bg(self.window_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.window_bg)
    }

    pub fn separator(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.window_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input(&self, focused: bool) -> Style {
        let bg = if focused {
            lighter(self.input_bg, 110)
        } else {
            self.input_bg
        };
        Style::default().fg(self.text_primary).bg(bg)
    }

    pub fn input_border(&self, focused: bool) -> Style {
        let fg = if focused {
            self.button_primary_bg
        } else {
            self.input_border
        };
        Style::default().fg(fg).bg(self.window_bg)
    }

    pub fn primary_button(&self, focused: bool) -> Style {
        let bg = if focused {
            lighter(self.button_primary_bg, 110)
        } else {
            self.button_primary_bg
        };
        Style::default()
            .fg(self.button_primary_text)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary_button(&self) -> Style {
        Style::default()
            .fg(self.button_secondary_text)
            .bg(self.button_secondary_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn time(&self, expired: bool) -> Style {
        let fg = if expired {
            self.button_danger_bg
        } else {
            self.text_primary
        };
        Style::default()
            .fg(fg)
            .bg(self.window_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge(&self, expired: bool) -> Style {
        let fg = if expired {
            self.button_danger_bg
        } else {
            self.button_primary_bg
        };
        Style::default().fg(fg).bg(self.button_secondary_bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeKind::Light.toggled(), ThemeKind::Dark);
        assert_eq!(ThemeKind::Light.toggled().toggled(), ThemeKind::Light);
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(0x4CAF50), Color::Rgb(0x4C, 0xAF, 0x50));
        assert_eq!(DARK.window_bg, Color::Rgb(0x2D, 0x2D, 0x2D));
    }

    #[test]
    fn test_lighter() {
        assert_eq!(lighter(Color::Rgb(100, 200, 250), 110), Color::Rgb(110, 220, 255));
        assert_eq!(lighter(Color::Rgb(0, 0, 0), 120), Color::Rgb(51, 51, 51));
        assert_eq!(lighter(Color::Red, 150), Color::Red);
    }

    #[test]
    fn test_expired_time_uses_danger_color() {
        assert_eq!(LIGHT.time(true).fg, Some(LIGHT.button_danger_bg));
        assert_eq!(LIGHT.time(false).fg, Some(LIGHT.text_primary));
    }
}
