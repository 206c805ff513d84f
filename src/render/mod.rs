//! Welcome-screen documents
//!
//! [`render`] turns a [`WelcomeConfig`] and a [`WelcomeStyle`] into a
//! [`Document`]: a toolkit-neutral description of what the screen shows. It
//! has no side effects; the gate decides when to call it and the terminal
//! adapter in `tui` decides how to draw it.

mod features;
mod icon;
pub mod markup;

pub use features::body_blocks;
pub use icon::{DEFAULT_ICON_SYMBOL, Icon};
pub use markup::{FALLBACK_URL, Inline, RichText, parse_link};

use crate::config::{Color, FeatureItem, WelcomeConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Heading shown above the app name in the immersive variant.
pub const IMMERSIVE_HEADING: &str = "Welcome to";

/// Which layout a welcome screen uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WelcomeStyle {
    /// Sheet over the host content: icon, title and a feature list.
    #[default]
    Standard,
    /// Full-screen cover with a background and a large description.
    Immersive,
}

impl WelcomeStyle {
    /// All styles, in display order.
    pub const ALL: &'static [Self] = &[Self::Standard, Self::Immersive];

    /// Lowercase label used on the command line and in JSON.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Immersive => "immersive",
        }
    }
}

impl fmt::Display for WelcomeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WelcomeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown welcome style {s:?} (expected standard or immersive)"))
    }
}

/// Icon badge on a feature row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Symbol name
    pub symbol: String,
    /// Badge fill
    pub color: Color,
}

/// One icon + title + description row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    /// Id of the source feature, for stable list rendering
    pub id: Uuid,
    /// Icon slot; `None` when the feature has no icon
    pub badge: Option<Badge>,
    /// Row title
    pub title: String,
    /// Description line; `None` when the feature has none
    pub description: Option<String>,
}

impl From<&FeatureItem> for FeatureRow {
    fn from(feature: &FeatureItem) -> Self {
        Self {
            id: feature.id,
            badge: feature.icon.as_ref().map(|symbol| Badge {
                symbol: symbol.clone(),
                color: feature.color,
            }),
            title: feature.title.clone(),
            description: feature.description.clone(),
        }
    }
}

/// A block in the body of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Introductory paragraph
    Intro(RichText),
    /// A feature row
    Feature(FeatureRow),
    /// Enlarged single-feature description (immersive only)
    Highlight(RichText),
}

/// What sits behind the screen's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// The toolkit's normal surface
    Surface,
    /// A flat color
    Solid(Color),
    /// A named image
    Image(String),
}

/// A filled button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Button label
    pub label: String,
    /// Fill color
    pub color: Color,
}

/// Everything a welcome screen shows, in top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Layout this document was built for
    pub style: WelcomeStyle,
    /// Backdrop
    pub background: Background,
    /// App icon (standard only)
    pub icon: Option<Icon>,
    /// Title lines
    pub title: Vec<String>,
    /// Intro, highlight and feature blocks
    pub body: Vec<Block>,
    /// Small print above the buttons
    pub disclaimer: Option<RichText>,
    /// The button that dismisses the screen
    pub continue_button: Button,
    /// Label of the privacy link, with the link tint
    pub privacy_link: Option<Button>,
}

/// Build the document for `config` in `style`.
#[must_use]
pub fn render(config: &WelcomeConfig, style: WelcomeStyle) -> Document {
    let body = body_blocks(config, style);
    let disclaimer = config.disclaimer_text.as_deref().map(RichText::from_markup);

    match style {
        WelcomeStyle::Standard => Document {
            style,
            background: Background::Surface,
            icon: Some(Icon::resolve(config)),
            title: vec![config.title_text()],
            body,
            disclaimer,
            continue_button: Button {
                label: config.continue_button_text.clone(),
                color: config.primary_color,
            },
            privacy_link: config.privacy_text().map(|label| Button {
                label,
                color: config.primary_color,
            }),
        },
        WelcomeStyle::Immersive => Document {
            style,
            background: config
                .background_image_name
                .clone()
                .map_or(Background::Solid(Color::Black), Background::Image),
            icon: None,
            title: vec![IMMERSIVE_HEADING.to_string(), config.app_name.clone()],
            body,
            disclaimer,
            continue_button: Button {
                label: config.continue_button_text.clone(),
                color: Color::Indigo,
            },
            privacy_link: None,
        },
    }
}

impl Document {
    /// Feature rows in display order.
    pub fn feature_rows(&self) -> impl Iterator<Item = &FeatureRow> {
        self.body.iter().filter_map(|block| match block {
            Block::Feature(row) => Some(row),
            Block::Intro(_) | Block::Highlight(_) => None,
        })
    }

    /// Plain-text rendition, one entry per line.
    ///
    /// Links are written as `label <target>`.
    #[must_use]
    pub fn to_text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(icon) = &self.icon {
            lines.push(format!("[{}]", icon.glyph()));
            lines.push(String::new());
        }
        lines.extend(self.title.iter().cloned());
        lines.push(String::new());

        for block in &self.body {
            match block {
                Block::Intro(text) | Block::Highlight(text) => {
                    lines.push(text_with_targets(text));
                    lines.push(String::new());
                }
                Block::Feature(row) => {
                    let badge = row
                        .badge
                        .as_ref()
                        .map_or_else(String::new, |badge| format!("({}) ", badge.symbol));
                    lines.push(format!("{badge}{}", row.title));
                    if let Some(description) = &row.description {
                        lines.push(format!("    {description}"));
                    }
                }
            }
        }

        if let Some(disclaimer) = &self.disclaimer {
            lines.push(String::new());
            lines.push(text_with_targets(disclaimer));
        }

        lines.push(String::new());
        lines.push(format!("[ {} ]", self.continue_button.label));
        if let Some(privacy) = &self.privacy_link {
            lines.push(privacy.label.clone());
        }
        lines
    }
}

fn text_with_targets(text: &RichText) -> String {
    text.runs
        .iter()
        .map(|run| match run {
            Inline::Text(text) => text.clone(),
            Inline::Link { label, target } => format!("{label} <{target}>"),
        })
        .collect()
}
