//! Color palette for the terminal adapter
//!
//! Muted chrome colors plus the mapping from config colors to terminal RGB.

use crate::config::Color as ConfigColor;
use ratatui::style::Color;

// Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const SURFACE: Color = Color::Rgb(30, 32, 40);
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);
pub const TEXT_ON_ACCENT: Color = Color::Rgb(255, 255, 255);

// Links
pub const LINK: Color = Color::Rgb(100, 160, 240);

/// Map a config color onto the terminal's RGB space.
#[must_use]
pub const fn from_config(color: ConfigColor) -> Color {
    let (r, g, b) = color.to_rgb();
    Color::Rgb(r, g, b)
}
