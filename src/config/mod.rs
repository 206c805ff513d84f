//! Welcome-screen content configuration
//!
//! A [`WelcomeConfig`] describes what a welcome screen shows: the app name,
//! feature highlights, icon, colors and button labels. It is a plain value:
//! the `with_*` methods return modified copies so a base configuration can be
//! shared between variants.

mod color;
mod feature;

pub use color::{Color, ParseColorError};
pub use feature::FeatureItem;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// Label used for the continue button when none is configured.
pub const DEFAULT_CONTINUE_TEXT: &str = "Continue";

/// Callback run when the user activates the privacy link.
///
/// Cloning shares the underlying closure.
#[derive(Clone)]
pub struct PrivacyAction(Rc<dyn Fn()>);

impl PrivacyAction {
    /// Wrap a closure as a privacy action.
    #[must_use]
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    /// Run the callback.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for PrivacyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivacyAction(..)")
    }
}

/// Content and style of a welcome screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeConfig {
    /// Application name, used in the default title
    pub app_name: String,

    /// Text shown under the title, before the feature list
    #[serde(default)]
    pub intro_text: Option<String>,

    /// Feature highlights in display order
    #[serde(default)]
    pub features: Vec<FeatureItem>,

    /// Symbol name for the app icon badge
    #[serde(default)]
    pub icon_symbol: Option<String>,

    /// Bundled image name for the app icon; wins over `icon_symbol`
    #[serde(default)]
    pub icon_name: Option<String>,

    /// Background image for the immersive variant
    #[serde(default)]
    pub background_image_name: Option<String>,

    /// Main accent color
    #[serde(default = "default_primary_color")]
    pub primary_color: Color,

    /// Secondary accent color (default icon inner badge)
    #[serde(default = "default_secondary_color")]
    pub secondary_color: Color,

    /// Continue button label
    #[serde(default = "default_continue_button_text")]
    pub continue_button_text: String,

    /// Privacy link label
    #[serde(default)]
    pub privacy_button_text: Option<String>,

    /// Small print shown between the feature list and the buttons
    #[serde(default)]
    pub disclaimer_text: Option<String>,

    /// Overrides the default `Welcome to "<app>"` title
    #[serde(default)]
    pub custom_title: Option<String>,

    /// Callback for the privacy link
    #[serde(skip)]
    pub privacy_action: Option<PrivacyAction>,
}

const fn default_primary_color() -> Color {
    Color::Blue
}

const fn default_secondary_color() -> Color {
    Color::Indigo
}

fn default_continue_button_text() -> String {
    DEFAULT_CONTINUE_TEXT.to_string()
}

impl WelcomeConfig {
    /// Create a configuration with defaults for everything but the app name.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            intro_text: None,
            features: Vec::new(),
            icon_symbol: None,
            icon_name: None,
            background_image_name: None,
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            continue_button_text: default_continue_button_text(),
            privacy_button_text: None,
            disclaimer_text: None,
            custom_title: None,
            privacy_action: None,
        }
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read welcome config from {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse welcome config from {}", path.display()))
    }

    /// Parse a configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or `app_name` is missing
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Title shown at the top of the standard layout.
    #[must_use]
    pub fn title_text(&self) -> String {
        self.custom_title
            .clone()
            .unwrap_or_else(|| format!("Welcome to \"{}\"", self.app_name))
    }

    /// Label for the privacy link, if the screen should show one.
    ///
    /// Present when either a label or a privacy action is configured.
    #[must_use]
    pub fn privacy_text(&self) -> Option<String> {
        self.privacy_button_text.clone().or_else(|| {
            self.privacy_action
                .as_ref()
                .map(|_| format!("About {} and privacy...", self.app_name))
        })
    }

    /// Return a copy with the intro text set.
    #[must_use]
    pub fn with_intro_text(&self, text: impl Into<String>) -> Self {
        Self {
            intro_text: Some(text.into()),
            ..self.clone()
        }
    }

    /// Return a copy with the feature list replaced.
    #[must_use]
    pub fn with_features(&self, features: Vec<FeatureItem>) -> Self {
        Self {
            features,
            ..self.clone()
        }
    }

    /// Return a copy with one feature appended.
    #[must_use]
    pub fn with_feature(&self, feature: FeatureItem) -> Self {
        let mut features = self.features.clone();
        features.push(feature);
        self.with_features(features)
    }

    /// Return a copy with the icon symbol set.
    #[must_use]
    pub fn with_icon_symbol(&self, symbol: impl Into<String>) -> Self {
        Self {
            icon_symbol: Some(symbol.into()),
            ..self.clone()
        }
    }

    /// Return a copy with the icon image name set.
    #[must_use]
    pub fn with_icon_name(&self, name: impl Into<String>) -> Self {
        Self {
            icon_name: Some(name.into()),
            ..self.clone()
        }
    }

    /// Return a copy with the immersive background image set.
    #[must_use]
    pub fn with_background_image(&self, name: impl Into<String>) -> Self {
        Self {
            background_image_name: Some(name.into()),
            ..self.clone()
        }
    }

    /// Return a copy with the primary color replaced.
    #[must_use]
    pub fn with_primary_color(&self, color: Color) -> Self {
        Self {
            primary_color: color,
            ..self.clone()
        }
    }

    /// Return a copy with the secondary color replaced.
    #[must_use]
    pub fn with_secondary_color(&self, color: Color) -> Self {
        Self {
            secondary_color: color,
            ..self.clone()
        }
    }

    /// Return a copy with the continue button label replaced.
    #[must_use]
    pub fn with_continue_button_text(&self, text: impl Into<String>) -> Self {
        Self {
            continue_button_text: text.into(),
            ..self.clone()
        }
    }

    /// Return a copy with the disclaimer text set.
    #[must_use]
    pub fn with_disclaimer_text(&self, text: impl Into<String>) -> Self {
        Self {
            disclaimer_text: Some(text.into()),
            ..self.clone()
        }
    }

    /// Return a copy with a custom title.
    #[must_use]
    pub fn with_custom_title(&self, title: impl Into<String>) -> Self {
        Self {
            custom_title: Some(title.into()),
            ..self.clone()
        }
    }

    /// Return a copy with the privacy link label set.
    #[must_use]
    pub fn with_privacy_button(&self, text: impl Into<String>) -> Self {
        Self {
            privacy_button_text: Some(text.into()),
            ..self.clone()
        }
    }

    /// Return a copy with the privacy callback set.
    #[must_use]
    pub fn with_privacy_action(&self, action: PrivacyAction) -> Self {
        Self {
            privacy_action: Some(action),
            ..self.clone()
        }
    }
}
