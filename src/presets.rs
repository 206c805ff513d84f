//! Built-in sample configurations
//!
//! Used by the `welcomer` binary's `--preset` flag and as starting points for
//! host applications.

use crate::config::{Color, FeatureItem, PrivacyAction, WelcomeConfig};
use crate::render::WelcomeStyle;
use crate::store::DEFAULT_WELCOME_KEY;
use std::fmt;
use std::str::FromStr;

/// Welcome key used by the [`customized`] preset.
pub const CUSTOMIZED_WELCOME_KEY: &str = "customWelcome";

/// A named sample: which config, in which style, under which key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Intro, three features and a disclaimer
    Basic,
    /// Custom title and a privacy button
    Customized,
    /// Two gray features, nothing else
    Minimal,
    /// Full-screen cover with one highlighted feature
    Immersive,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Basic,
        Self::Customized,
        Self::Minimal,
        Self::Immersive,
    ];

    /// Name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Customized => "customized",
            Self::Minimal => "minimal",
            Self::Immersive => "immersive",
        }
    }

    /// Layout the preset is meant to be shown in.
    #[must_use]
    pub const fn style(self) -> WelcomeStyle {
        match self {
            Self::Immersive => WelcomeStyle::Immersive,
            Self::Basic | Self::Customized | Self::Minimal => WelcomeStyle::Standard,
        }
    }

    /// Welcome key the preset is gated on.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Customized => CUSTOMIZED_WELCOME_KEY,
            Self::Basic | Self::Minimal | Self::Immersive => DEFAULT_WELCOME_KEY,
        }
    }

    /// Build the preset's config; `privacy` is used by [`Preset::Customized`].
    #[must_use]
    pub fn config(self, privacy: PrivacyAction) -> WelcomeConfig {
        match self {
            Self::Basic => basic(),
            Self::Customized => customized(privacy),
            Self::Minimal => minimal(),
            Self::Immersive => immersive(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|preset| preset.name()).collect();
                format!("unknown preset {s:?} (expected one of {})", names.join(", "))
            })
    }
}

fn sample_features() -> Vec<FeatureItem> {
    vec![
        FeatureItem::new("Core features", Color::Orange)
            .with_icon("star.fill")
            .with_description("A quick tour of what the app does best."),
        FeatureItem::new("Clean design", Color::Blue)
            .with_description("Focused on your content, free of distractions."),
        FeatureItem::new("Great experience", Color::Green).with_icon("hand.thumbsup.fill"),
    ]
}

/// Intro, three features (one without an icon, one without a description)
/// and a disclaimer with a policy link.
#[must_use]
pub fn basic() -> WelcomeConfig {
    WelcomeConfig::new("Sample App")
        .with_intro_text(
            "A simple, fast and smart app built to give you the best possible experience.",
        )
        .with_features(sample_features())
        .with_icon_symbol("app.gift.fill")
        .with_primary_color(Color::Blue)
        .with_disclaimer_text(
            "Device information and in-app activity may be used to improve the app. \
             See the [privacy policy](https://example.com/privacy) for details.",
        )
}

/// Custom title, a privacy button wired to `privacy`, and a longer intro.
#[must_use]
pub fn customized(privacy: PrivacyAction) -> WelcomeConfig {
    WelcomeConfig::new("Sample App")
        .with_intro_text(
            "To personalize your experience we collect data about your device and \
             how you use the app. You can change this at any time in Settings.",
        )
        .with_features(sample_features())
        .with_icon_symbol("app.gift.fill")
        .with_primary_color(Color::Blue)
        .with_disclaimer_text(
            "By continuing you confirm you have read and agree to our terms of use and \
             privacy policy.",
        )
        .with_custom_title("Welcome to our app")
        .with_privacy_button("Read the privacy policy")
        .with_privacy_action(privacy)
}

/// Two gray features on a black accent and nothing else.
#[must_use]
pub fn minimal() -> WelcomeConfig {
    WelcomeConfig::new("Minimal")
        .with_features(vec![
            FeatureItem::new("Minimal design", Color::Gray),
            FeatureItem::new("Content first", Color::Gray),
        ])
        .with_primary_color(Color::Black)
}

/// One described feature over a background image, for the immersive style.
#[must_use]
pub fn immersive() -> WelcomeConfig {
    WelcomeConfig::new("Photo Master")
        .with_feature(FeatureItem::new("Overview", Color::Blue).with_description(
            "Professional camera controls with full manual options, cloud sync for live \
             editing and sharing, and one tap to capture the moment.",
        ))
        .with_background_image("PhotoBackground")
        .with_primary_color(Color::Indigo)
        .with_continue_button_text("Get started")
}
