//! Layout configuration for the completion popup.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! max_height = 300.0
//! item_height = 18.0
//! ```

use std::path::{Path, PathBuf};

use horizon_completer_core::logging::targets;
use serde::{Deserialize, Serialize};

/// Result type alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a [`CompleterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read completer config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error.
    #[error("Failed to parse completer config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value outside its allowed range.
    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Layout constants for the popup, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleterConfig {
    /// Upper bound on the rendered height.
    pub max_height: f32,
    /// Horizontal offset compensating the popup's border.
    pub border_offset: f32,
    /// Slack kept around the active item when scrolling it into view.
    pub scroll_margin: f32,
    /// Natural height of one item row.
    pub item_height: f32,
    /// Natural width of the popup body.
    pub min_width: f32,
    /// Width of the vertical scrollbar gutter.
    pub scrollbar_width: f32,
}

impl Default for CompleterConfig {
    fn default() -> Self {
        Self {
            max_height: 250.0,
            border_offset: 1.0,
            scroll_margin: 10.0,
            item_height: 20.0,
            min_width: 200.0,
            scrollbar_width: 12.0,
        }
    }
}

impl CompleterConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded completer config");
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> String {
        // Flat struct of finite floats; serialization cannot fail.
        toml::to_string(self).unwrap_or_default()
    }

    /// Check every value is in range.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("max_height", self.max_height),
            ("item_height", self.item_height),
            ("min_width", self.min_width),
        ];
        let non_negative = [
            ("border_offset", self.border_offset),
            ("scroll_margin", self.scroll_margin),
            ("scrollbar_width", self.scrollbar_width),
        ];

        for (field, value) in positive.into_iter().chain(non_negative) {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, format!("{value} is not finite")));
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::invalid(field, format!("must not be negative, got {value}")));
            }
        }
        Ok(())
    }
}
