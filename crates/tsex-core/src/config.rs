//! Configuration for the TypeScriptEx menu.
//!
//! All settings are optional; a missing `tsex.json` yields the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decor::Decor;
use crate::error::{Result, TsexError};

/// The default config file name.
pub const CONFIG_FILE_NAME: &str = "tsex.json";

/// Default base URL for the posts API used by the API client lessons.
fn default_api_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

/// Default value for boolean options that default to true.
const fn default_true() -> bool {
    true
}

/// Main configuration for the lesson menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the JSONPlaceholder-compatible API used by lessons 26 and 27.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whether banners and prompts are decorated with random emoji.
    #[serde(default = "default_true")]
    pub decorations: bool,

    /// Whether the terminal is cleared before the menu is drawn.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            decorations: default_true(),
            clear_screen: default_true(),
        }
    }
}

impl Config {
    /// Loads configuration from `tsex.json` in the current working directory.
    ///
    /// Returns the defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            TsexError::config_parse(
                "<current directory>",
                format!("cannot determine current directory: {e}"),
            )
        })?;
        Self::load_from_dir(&current_dir)
    }

    /// Loads configuration from `tsex.json` inside `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_from_file(&dir.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from a specific file path.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `TsexError::ConfigParseError` if the file cannot be read or
    /// holds invalid JSON, and `TsexError::ConfigValidationError` if a value
    /// is out of range.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(TsexError::config_parse(
                    path,
                    format!("failed to read file: {e}"),
                ));
            }
        };

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| TsexError::config_parse(path, e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// `api_base_url` must be non-empty and use the `http` or `https` scheme.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(TsexError::config_validation(
                "apiBaseUrl must not be empty",
                "Set apiBaseUrl to an http(s) URL in your tsex.json or remove the field",
            ));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(TsexError::config_validation(
                format!("apiBaseUrl '{url}' must start with http:// or https://"),
                "Use a full URL such as https://jsonplaceholder.typicode.com in your tsex.json",
            ));
        }

        Ok(())
    }

    /// Returns the emoji picker implied by the `decorations` flag.
    #[must_use]
    pub const fn decor(&self) -> Decor {
        if self.decorations {
            Decor::Random
        } else {
            Decor::Plain
        }
    }
}
