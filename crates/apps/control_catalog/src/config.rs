//! Catalog surface settings loaded from `catalog.toml`.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stories::find_story;

const EMBEDDED_CONFIG: &str = include_str!("../catalog.toml");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Canvas placement of the rendered story.
pub enum CanvasLayout {
    /// Story centered in the canvas.
    #[default]
    Centered,
    /// Story anchored top-left with padding.
    Padded,
    /// Story fills the canvas.
    Fullscreen,
}

impl CanvasLayout {
    /// Stable `data-catalog-layout` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::Padded => "padded",
            Self::Fullscreen => "fullscreen",
        }
    }
}

#[derive(Debug, Error)]
/// Catalog configuration failures.
pub enum CatalogConfigError {
    /// The TOML document did not parse into [`CatalogConfig`].
    #[error("catalog config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    /// `default_story` names a story the catalog does not contain.
    #[error("default story `{0}` is not in the catalog")]
    UnknownStory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Catalog surface settings.
pub struct CatalogConfig {
    /// Sidebar heading.
    pub title: String,
    /// Canvas placement.
    pub layout: CanvasLayout,
    /// Story selected on first render. `None` selects the first story.
    pub default_story: Option<String>,
    /// Show the JSON args panel under the canvas.
    pub show_args: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            title: "Control Kit".to_string(),
            layout: CanvasLayout::Centered,
            default_story: None,
            show_args: true,
        }
    }
}

impl CatalogConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogConfigError::Parse`] for malformed TOML or unknown
    /// values and [`CatalogConfigError::UnknownStory`] when `default_story`
    /// does not name a catalog story.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogConfigError> {
        let config: Self = toml::from_str(raw)?;
        if let Some(id) = config.default_story.as_deref() {
            if find_story(id).is_none() {
                return Err(CatalogConfigError::UnknownStory(id.to_string()));
            }
        }
        Ok(config)
    }

    /// Loads the embedded `catalog.toml`, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("catalog config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = CatalogConfig::from_toml_str(EMBEDDED_CONFIG).expect("embedded config");
        assert_eq!(config.layout, CanvasLayout::Centered);
        assert_eq!(
            config.default_story.as_deref(),
            Some("components-controlbutton--primary-states")
        );
        assert_eq!(CatalogConfig::load(), config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = CatalogConfig::from_toml_str("layout = \"padded\"").expect("config");
        assert_eq!(
            config,
            CatalogConfig {
                layout: CanvasLayout::Padded,
                ..CatalogConfig::default()
            }
        );
    }

    #[test]
    fn unknown_layout_is_a_parse_error() {
        let err = CatalogConfig::from_toml_str("layout = \"sideways\"").unwrap_err();
        assert!(matches!(err, CatalogConfigError::Parse(_)));
    }

    #[test]
    fn unknown_default_story_is_rejected() {
        let err = CatalogConfig::from_toml_str("default_story = \"components-nope--missing\"")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "default story `components-nope--missing` is not in the catalog"
        );
    }
}
