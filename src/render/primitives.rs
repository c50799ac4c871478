use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Terminal color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

/// Foreground/background pair applied to every cell of one write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    #[must_use]
    pub const fn fg(fg: Color) -> Self {
        Self::new(fg, Color::Reset)
    }
}

/// One `set_string` call captured by a recording buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWrite {
    pub text: String,
    pub style: Style,
    pub at: Point,
}

impl TextWrite {
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style, at: Point) -> Self {
        Self {
            text: text.into(),
            style,
            at,
        }
    }
}
