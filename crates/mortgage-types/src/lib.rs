//! # Mortgage Types
//!
//! Core types, models, and error definitions for the Mortgage Admin screen.
//!
//! - **`error`** - Typed error hierarchy for the bank catalog and UI configuration
//! - **`models`** - Domain models (Bank, Program), expansion state, admin config
//!
//! ## Architecture Role
//!
//! `mortgage-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          mortgage-types (this crate)
//!                  │
//!                  ▼
//!        mortgage-admin-leptos
//! ```
//!
//! Records arrive from an external data source as camelCase JSON, so every
//! model is serde-serializable. Nothing here performs I/O.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{CatalogError, ConfigError, Result, TypedError};

// Re-export core model types
pub use models::{AdminConfig, Bank, CatalogStats, ExpandedBank, Program, Theme};
