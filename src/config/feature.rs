//! Feature highlights shown on the welcome screen.

use super::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One highlighted capability in the welcome screen's feature list.
///
/// The `id` is generated on construction and only exists so list renderers
/// can keep rows stable; it carries no meaning beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Unique row identifier
    #[serde(default = "Uuid::new_v4", skip_serializing)]
    pub id: Uuid,

    /// Symbol name for the row's icon badge
    #[serde(default)]
    pub icon: Option<String>,

    /// Feature title
    pub title: String,

    /// Short description shown under the title
    #[serde(default)]
    pub description: Option<String>,

    /// Badge background color
    #[serde(default = "default_feature_color")]
    pub color: Color,
}

const fn default_feature_color() -> Color {
    Color::Blue
}

impl FeatureItem {
    /// Create a feature with only a title and badge color.
    #[must_use]
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon: None,
            title: title.into(),
            description: None,
            color,
        }
    }

    /// Return a copy with the icon set.
    #[must_use]
    pub fn with_icon(&self, icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..self.clone()
        }
    }

    /// Return a copy with the description set.
    #[must_use]
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self.clone()
        }
    }
}
