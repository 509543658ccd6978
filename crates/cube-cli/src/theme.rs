use crossterm::style::Color;
use cube_core::Color as Sticker;
use serde::{Deserialize, Serialize};

/// Named palettes selectable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Dark,
    HighContrast,
}

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Sticker backgrounds, indexed by cube color
    pub stickers: [Color; 6],
    /// Sticker label color
    pub label: Color,
    /// Success/verified color
    pub success: Color,
    /// Error color
    pub error: Color,
    /// Secondary text color
    pub info: Color,
    /// Move notation color
    pub moves: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            stickers: [
                Color::Rgb { r: 240, g: 240, b: 245 },
                Color::Rgb { r: 255, g: 215, b: 0 },
                Color::Rgb { r: 200, g: 30, b: 45 },
                Color::Rgb { r: 255, g: 120, b: 20 },
                Color::Rgb { r: 0, g: 80, b: 200 },
                Color::Rgb { r: 0, g: 160, b: 70 },
            ],
            label: Color::Rgb { r: 20, g: 22, b: 30 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            moves: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// High contrast theme using the basic 16-color palette
    pub fn high_contrast() -> Self {
        Self {
            stickers: [
                Color::White,
                Color::Yellow,
                Color::DarkRed,
                Color::Magenta,
                Color::Blue,
                Color::Green,
            ],
            label: Color::Black,
            success: Color::Green,
            error: Color::Red,
            info: Color::Grey,
            moves: Color::Yellow,
        }
    }

    pub fn sticker(&self, color: Sticker) -> Color {
        self.stickers[color.index()]
    }
}
