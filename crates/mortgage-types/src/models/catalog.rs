//! Owner-side operations over the bank list.
//!
//! The table never mutates its input; the page that owns the list applies
//! callback results through these functions.

use super::Bank;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set `is_active` of the bank with `id`.
pub fn set_bank_status(banks: &mut [Bank], id: &str, active: bool) -> Result<(), CatalogError> {
    let bank = banks
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| CatalogError::BankNotFound { id: id.to_string() })?;
    bank.is_active = active;
    Ok(())
}

/// Remove the bank with `id`, returning it.
pub fn remove_bank(banks: &mut Vec<Bank>, id: &str) -> Result<Bank, CatalogError> {
    let index = banks
        .iter()
        .position(|b| b.id == id)
        .ok_or_else(|| CatalogError::BankNotFound { id: id.to_string() })?;
    Ok(banks.remove(index))
}

/// Validate every bank and bank id uniqueness. Returns all failures.
pub fn validate_catalog(banks: &[Bank]) -> Vec<CatalogError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for bank in banks {
        if !seen.insert(bank.id.as_str()) {
            errors.push(CatalogError::DuplicateBankId { id: bank.id.clone() });
        }
        if let Err(e) = bank.check() {
            errors.push(e);
        }
    }
    errors
}

/// Summary counters for the page header.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of banks
    pub total_banks: usize,
    /// Banks with `is_active`
    pub active_banks: usize,
    /// Programs across all banks
    pub total_programs: usize,
    /// Banks with `auto_rates`
    pub auto_rate_banks: usize,
}

impl CatalogStats {
    /// Count over a bank list.
    pub fn from_banks(banks: &[Bank]) -> Self {
        banks.iter().fold(Self::default(), |mut stats, bank| {
            stats.total_banks += 1;
            stats.active_banks += usize::from(bank.is_active);
            stats.total_programs += bank.program_count();
            stats.auto_rate_banks += usize::from(bank.auto_rates);
            stats
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Vec<Bank> {
        let mut sber = Bank::new("sber", "Сбербанк");
        sber.is_active = true;
        sber.auto_rates = true;
        vec![sber, Bank::new("vtb", "ВТБ")]
    }

    #[test]
    fn test_set_bank_status() {
        let mut banks = sample();
        set_bank_status(&mut banks, "vtb", true).unwrap();
        assert!(banks[1].is_active);

        let err = set_bank_status(&mut banks, "gazprom", true).unwrap_err();
        assert_eq!(err, CatalogError::BankNotFound { id: "gazprom".to_string() });
    }

    #[test]
    fn test_remove_bank_keeps_order() {
        let mut banks = sample();
        banks.push(Bank::new("alfa", "Альфа-Банк"));

        let removed = remove_bank(&mut banks, "vtb").unwrap();
        assert_eq!(removed.name, "ВТБ");
        let ids: Vec<_> = banks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["sber", "alfa"]);

        assert!(remove_bank(&mut banks, "vtb").is_err());
    }

    #[test]
    fn test_validate_catalog_reports_duplicates() {
        let mut banks = sample();
        banks.push(Bank::new("sber", "Сбер дубль"));

        let errors = validate_catalog(&banks);
        assert_eq!(errors, vec![CatalogError::DuplicateBankId { id: "sber".to_string() }]);
        assert!(validate_catalog(&sample()).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = CatalogStats::from_banks(&sample());
        assert_eq!(stats.total_banks, 2);
        assert_eq!(stats.active_banks, 1);
        assert_eq!(stats.auto_rate_banks, 1);
        assert_eq!(stats.total_programs, 0);
        assert_eq!(CatalogStats::from_banks(&[]), CatalogStats::default());
    }
}
