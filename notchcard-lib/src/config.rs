//! Loading card settings.
//!
//! Settings are read from a JSON file; every field is optional and falls back
//! to its default, so an empty object is a valid config.
//!
//! ```text
//! {
//!     "label_inset_px": 24,
//!     "button_nudge_px": 20,
//!     "default_size": "24",
//!     "default_accent": "#5c3d52",
//!     "style_path": "resources/card.style"
//! }
//! ```

use std::path::{Path, PathBuf};

use piet::Color;

use crate::consts::{BUTTON_NUDGE_PX, DEFAULT_ACCENT, LABEL_INSET_PX};
use crate::error::ConfigError;
use crate::selector::SizeOption;
use crate::style::{hex_string, parse_color};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Pixels between the label and the notch wall.
    pub label_inset_px: f64,
    /// Pixels between the notch wall and the buttons.
    pub button_nudge_px: f64,
    /// The size selected when the card loads.
    pub default_size: SizeOption,
    /// The accent used when the host does not define `--accent`.
    pub default_accent: String,
    /// A style variable file for hosts that load one.
    pub style_path: Option<PathBuf>,
}

impl CardConfig {
    pub fn from_json(json: &str) -> Result<CardConfig, ConfigError> {
        let config: CardConfig = serde_json::from_str(json)?;
        config.accent_color()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<CardConfig, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        CardConfig::from_json(&json)
    }

    pub fn accent_color(&self) -> Result<Color, ConfigError> {
        parse_color(&self.default_accent)
            .ok_or_else(|| ConfigError::InvalidColor(self.default_accent.clone()))
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            label_inset_px: LABEL_INSET_PX,
            button_nudge_px: BUTTON_NUDGE_PX,
            default_size: SizeOption::default(),
            default_accent: hex_string(&DEFAULT_ACCENT),
            style_path: None,
        }
    }
}
