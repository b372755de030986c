//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or saving the admin UI config.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Stored config is not valid JSON for the expected shape
    #[error("Config parse error: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
    },

    /// Browser storage is unavailable or rejected the write
    #[error("Config storage error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::Parse { message: e.to_string() }
    }
}
