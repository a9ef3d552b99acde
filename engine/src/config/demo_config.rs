//! Demo Configuration
//!
//! Window and frame-loop settings for the demo binary, read from an
//! optional JSON file. Key bindings are fixed and not part of this file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a [`DemoConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

/// Demo window and loop settings.
///
/// `Default` matches the built-in behaviour: an 800x600 window polled every
/// 100 ms. Missing fields in a file fall back to these values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window title
    pub title: String,
    /// Viewport width (pixels)
    pub viewport_width: u32,
    /// Viewport height (pixels)
    pub viewport_height: u32,
    /// Milliseconds between input polls
    pub tick_interval_ms: u64,
    /// Only log the action state when it differs from the previous frame
    pub log_changes_only: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Bitwise".to_string(),
            viewport_width: 800,
            viewport_height: 600,
            tick_interval_ms: 100,
            log_changes_only: true,
        }
    }
}

impl DemoConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Config: loaded {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the demo cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "viewport_width",
                reason: "must be non-zero",
            });
        }
        if self.viewport_height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "viewport_height",
                reason: "must be non-zero",
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
