//! App icon resolution.

use crate::config::{Color, WelcomeConfig};

/// Symbol shown when the config names neither an image nor a symbol.
pub const DEFAULT_ICON_SYMBOL: &str = "eyes";

/// The app icon at the top of the standard layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// A bundled image, drawn without a badge
    Image(String),
    /// A symbol on a badge filled with `tint`
    Symbol {
        /// Symbol name
        name: String,
        /// Badge fill
        tint: Color,
    },
    /// The built-in icon: [`DEFAULT_ICON_SYMBOL`] on an `accent` badge inside
    /// a `tint` badge
    Default {
        /// Outer badge fill
        tint: Color,
        /// Inner badge fill
        accent: Color,
    },
}

impl Icon {
    /// Pick the icon for `config`: image name, then symbol, then the default.
    #[must_use]
    pub fn resolve(config: &WelcomeConfig) -> Self {
        if let Some(name) = &config.icon_name {
            return Self::Image(name.clone());
        }
        if let Some(symbol) = &config.icon_symbol {
            return Self::Symbol {
                name: symbol.clone(),
                tint: config.primary_color,
            };
        }
        Self::Default {
            tint: config.primary_color,
            accent: config.secondary_color,
        }
    }

    /// Name of the glyph or image this icon shows.
    #[must_use]
    pub fn glyph(&self) -> &str {
        match self {
            Self::Image(name) | Self::Symbol { name, .. } => name,
            Self::Default { .. } => DEFAULT_ICON_SYMBOL,
        }
    }
}
