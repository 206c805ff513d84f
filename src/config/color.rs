//! Colors used by welcome-screen content.
//!
//! Colors are stored in a toolkit-neutral form and serialized either as a
//! lowercase palette name (`"indigo"`) or as a hex triple (`"#5856d6"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A display color for icons, buttons and feature badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// System blue.
    Blue,
    /// System indigo.
    Indigo,
    /// System orange.
    Orange,
    /// System green.
    Green,
    /// System red.
    Red,
    /// Neutral gray.
    Gray,
    /// Black.
    Black,
    /// White.
    White,
    /// System purple.
    Purple,
    /// System pink.
    Pink,
    /// System teal.
    Teal,
    /// System yellow.
    Yellow,
    /// An explicit RGB value.
    Rgb(u8, u8, u8),
}

/// Error returned when a color string is neither a palette name nor `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color {0:?} (expected a palette name or #rrggbb)")]
pub struct ParseColorError(String);

impl Color {
    /// Palette colors paired with their serialized names.
    pub const NAMED: &'static [(&'static str, Self)] = &[
        ("blue", Self::Blue),
        ("indigo", Self::Indigo),
        ("orange", Self::Orange),
        ("green", Self::Green),
        ("red", Self::Red),
        ("gray", Self::Gray),
        ("black", Self::Black),
        ("white", Self::White),
        ("purple", Self::Purple),
        ("pink", Self::Pink),
        ("teal", Self::Teal),
        ("yellow", Self::Yellow),
    ];

    /// Resolve this color to concrete RGB components.
    #[must_use]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0, 122, 255),
            Self::Indigo => (88, 86, 214),
            Self::Orange => (255, 149, 0),
            Self::Green => (52, 199, 89),
            Self::Red => (255, 59, 48),
            Self::Gray => (142, 142, 147),
            Self::Black => (0, 0, 0),
            Self::White => (255, 255, 255),
            Self::Purple => (175, 82, 222),
            Self::Pink => (255, 45, 85),
            Self::Teal => (48, 176, 199),
            Self::Yellow => (255, 204, 0),
            Self::Rgb(r, g, b) => (r, g, b),
        }
    }

    fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        let (r, g, b) = self.to_rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();
        // "grey" shows up often enough in hand-written configs
        let lookup = if lowered == "grey" { "gray" } else { lowered.as_str() };

        if let Some((_, color)) = Self::NAMED.iter().find(|(name, _)| *name == lookup) {
            return Ok(*color);
        }

        let Some(hex) = lowered.strip_prefix('#') else {
            return Err(ParseColorError(trimmed.to_string()));
        };
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(trimmed.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(trimmed.to_string()))
        };
        Ok(Self::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
