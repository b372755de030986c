//! Typed error definitions for the Mortgage Admin screen.
//!
//! This module provides a structured error hierarchy with specific error types
//! for different domains. All errors are designed to be:
//!
//! - **Serializable** for logging payloads via serde
//! - **Displayable** for banners via Display trait
//! - **Matchable** for error handling logic via enum variants

mod catalog;
mod config;

pub use catalog::CatalogError;
pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a bank catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Catalog(CatalogError::BankNotFound { id: "sber".to_string() });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Catalog"));
        assert!(json.contains("sber"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err: TypedError = ConfigError::Storage { message: "quota exceeded".to_string() }.into();

        let msg = format!("{}", err);
        assert!(msg.starts_with("Config error"));
        assert!(msg.contains("quota exceeded"));
    }
}
