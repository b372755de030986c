//! Bank catalog errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while applying owner-side changes to the bank list.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CatalogError {
    /// Bank with given ID not found
    #[error("Bank not found: {id}")]
    BankNotFound {
        /// Unique identifier of the missing bank
        id: String,
    },

    /// Two banks share one identifier
    #[error("Duplicate bank id: {id}")]
    DuplicateBankId {
        /// The repeated identifier
        id: String,
    },

    /// Two programs of one bank share one identifier
    #[error("Duplicate program id {program_id} in bank {bank_id}")]
    DuplicateProgramId {
        /// Owning bank
        bank_id: String,
        /// The repeated program identifier
        program_id: String,
    },

    /// A bank or program record failed field validation
    #[error("Invalid record {id}: {message}")]
    InvalidRecord {
        /// Identifier of the offending bank or program
        id: String,
        /// Description of the validation failure
        message: String,
    },
}

impl CatalogError {
    /// Create an invalid-record error from validator output.
    pub fn from_validation(id: &str, errors: &validator::ValidationErrors) -> Self {
        Self::InvalidRecord { id: id.to_string(), message: errors.to_string() }
    }
}
