//! Core domain models for the Mortgage Admin screen.

mod bank;
mod catalog;
mod config;
mod expansion;

// Re-export all models
pub use bank::{Bank, Program};
pub use catalog::{remove_bank, set_bank_status, validate_catalog, CatalogStats};
pub use config::{AdminConfig, Theme};
pub use expansion::ExpandedBank;
