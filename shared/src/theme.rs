use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Color,
    pub text: Color,
    pub description: Color,
    pub card: Color,
    pub primary: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub dark: bool,
    pub colors: ThemeColors,
}

pub const LIGHT_THEME: Theme = Theme {
    dark: false,
    colors: ThemeColors {
        background: Color::rgb(0xFF, 0xFF, 0xFF),
        text: Color::rgb(0x00, 0x00, 0x00),
        description: Color::rgb(0x66, 0x66, 0x66),
        card: Color::rgb(0xF5, 0xF5, 0xF5),
        primary: Color::rgb(0x00, 0x7A, 0xFF),
    },
};

pub const DARK_THEME: Theme = Theme {
    dark: true,
    colors: ThemeColors {
        background: Color::rgb(0x12, 0x12, 0x12),
        text: Color::rgb(0xFF, 0xFF, 0xFF),
        description: Color::rgb(0xB3, 0xB3, 0xB3),
        card: Color::rgb(0x1E, 0x1E, 0x1E),
        primary: Color::rgb(0x0A, 0x84, 0xFF),
    },
};

/// Which of the two palettes is active. Not persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn theme(self) -> Theme {
        match self {
            Self::Light => LIGHT_THEME,
            Self::Dark => DARK_THEME,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the app-bar toggle button.
    #[must_use]
    pub const fn status_icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f}",
            Self::Dark => "\u{1f319}",
        }
    }
}
