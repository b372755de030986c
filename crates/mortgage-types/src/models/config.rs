//! Admin UI configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color scheme of the admin screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Per-browser settings of the admin screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminConfig {
    /// Ask before deleting a bank
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
    /// UI theme
    #[serde(default)]
    pub theme: Theme,
    /// How long status messages stay visible
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u32,
}

impl AdminConfig {
    /// Parse a stored config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::from_json_error(&e))
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            confirm_delete: default_confirm_delete(),
            theme: Theme::default(),
            message_timeout_ms: default_message_timeout_ms(),
        }
    }
}

const fn default_confirm_delete() -> bool {
    true
}

const fn default_message_timeout_ms() -> u32 {
    3000
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AdminConfig::from_json(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.confirm_delete);
        assert_eq!(config.message_timeout_ms, 3000);
    }

    #[test]
    fn test_round_trip() {
        let config = AdminConfig { confirm_delete: false, ..AdminConfig::default() };
        let json = config.to_json().unwrap();
        assert_eq!(AdminConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = AdminConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
