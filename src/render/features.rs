//! Feature-list layout policy shared by both variants.

use super::markup::RichText;
use super::{Block, FeatureRow, WelcomeStyle};
use crate::config::{FeatureItem, WelcomeConfig};

/// Build the body blocks (intro and features) for `style`.
///
/// - No features: the intro text alone, when present.
/// - One feature in the immersive variant: that feature's description,
///   emphasized, with no icon or title.
/// - Otherwise: one row per feature in list order. The standard variant
///   also keeps the intro above the rows.
#[must_use]
pub fn body_blocks(config: &WelcomeConfig, style: WelcomeStyle) -> Vec<Block> {
    let intro = config
        .intro_text
        .as_deref()
        .map(|text| Block::Intro(RichText::from_markup(text)));

    match (style, config.features.as_slice()) {
        (_, []) => intro.into_iter().collect(),
        (WelcomeStyle::Immersive, [only]) => only
            .description
            .as_deref()
            .map(|text| Block::Highlight(RichText::from_markup(text)))
            .into_iter()
            .collect(),
        (WelcomeStyle::Immersive, features) => rows(features).collect(),
        (WelcomeStyle::Standard, features) => intro.into_iter().chain(rows(features)).collect(),
    }
}

fn rows(features: &[FeatureItem]) -> impl Iterator<Item = Block> + '_ {
    features.iter().map(|feature| Block::Feature(FeatureRow::from(feature)))
}
