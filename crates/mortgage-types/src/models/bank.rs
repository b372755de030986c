//! Bank and mortgage program records.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// A mortgage product offered by a bank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Identifier, unique within the owning bank
    #[validate(length(min = 1_u64))]
    pub id: String,
    /// Display name
    #[validate(length(min = 1_u64))]
    pub name: String,
    /// Annual rate in percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub rate: f64,
    /// Shortest loan term in years
    #[validate(range(min = 1_u32, max = 50_u32))]
    pub min_term: u32,
    /// Longest loan term in years
    #[validate(range(min = 1_u32, max = 50_u32))]
    pub max_term: u32,
    /// Minimum down payment in percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_down_payment: f64,
    /// Free-text special conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_conditions: Option<String>,
    /// Program takes part in automatic rate adjustment
    #[serde(default)]
    pub auto_rates: bool,
}

impl Program {
    /// Whether special conditions are present and not blank.
    pub fn has_special_conditions(&self) -> bool {
        self.special_conditions.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Field validation plus the term ordering rule.
    pub fn check(&self) -> Result<(), CatalogError> {
        self.validate().map_err(|e| CatalogError::from_validation(&self.id, &e))?;
        if self.min_term > self.max_term {
            return Err(CatalogError::InvalidRecord {
                id: self.id.clone(),
                message: format!(
                    "min_term {} exceeds max_term {}",
                    self.min_term, self.max_term
                ),
            });
        }
        Ok(())
    }
}

/// A mortgage-issuing institution and its programs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Unique identifier
    #[validate(length(min = 1_u64))]
    pub id: String,
    /// Display name
    #[validate(length(min = 1_u64))]
    pub name: String,
    /// Short description shown under the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Bank takes part in automatic rate adjustment
    #[serde(default)]
    pub auto_rates: bool,
    /// Whether the bank is offered to calculator users
    #[serde(default)]
    pub is_active: bool,
    /// Programs in display order
    #[serde(default)]
    #[validate(nested)]
    pub programs: Vec<Program>,
}

impl Bank {
    /// Create an inactive bank with no programs.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            logo: None,
            auto_rates: false,
            is_active: false,
            programs: Vec::new(),
        }
    }

    /// Number of configured programs.
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Check if the bank has at least one program.
    pub fn has_programs(&self) -> bool {
        !self.programs.is_empty()
    }

    /// Description, treating blank text as absent.
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Logo URL, treating blank text as absent.
    pub fn logo(&self) -> Option<&str> {
        non_blank(self.logo.as_deref())
    }

    /// Validate the bank, each program, and program id uniqueness.
    pub fn check(&self) -> Result<(), CatalogError> {
        self.validate().map_err(|e| CatalogError::from_validation(&self.id, &e))?;

        let mut seen = HashSet::new();
        for program in &self.programs {
            program.check()?;
            if !seen.insert(program.id.as_str()) {
                return Err(CatalogError::DuplicateProgramId {
                    bank_id: self.id.clone(),
                    program_id: program.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn program(id: &str) -> Program {
        Program {
            id: id.to_string(),
            name: "Семейная".to_string(),
            rate: 6.0,
            min_term: 5,
            max_term: 30,
            min_down_payment: 20.1,
            special_conditions: None,
            auto_rates: false,
        }
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "id": "alfa",
            "name": "Альфа-Банк",
            "programs": [{
                "id": "it",
                "name": "IT-ипотека",
                "rate": 5.0,
                "minTerm": 3,
                "maxTerm": 30,
                "minDownPayment": 20,
                "specialConditions": "Для аккредитованных IT-компаний",
                "autoRates": true
            }]
        }"#;

        let bank: Bank = serde_json::from_str(json).unwrap();
        assert!(!bank.is_active);
        assert!(!bank.auto_rates);
        assert_eq!(bank.logo(), None);
        assert_eq!(bank.program_count(), 1);

        let it = &bank.programs[0];
        assert_eq!(it.id, "it");
        assert!(it.auto_rates);
        assert!(it.has_special_conditions());
        assert_eq!(it.min_down_payment, 20.0);
    }

    #[test]
    fn test_missing_programs_defaults_to_empty() {
        let bank: Bank = serde_json::from_str(r#"{"id":"x","name":"X","isActive":true}"#).unwrap();
        assert!(bank.is_active);
        assert!(!bank.has_programs());
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let mut bank = Bank::new("x", "X");
        bank.description = Some("   ".to_string());
        bank.logo = Some(String::new());
        assert_eq!(bank.description(), None);
        assert_eq!(bank.logo(), None);

        let mut p = program("p");
        p.special_conditions = Some(" ".to_string());
        assert!(!p.has_special_conditions());
    }

    #[test]
    fn test_program_term_order() {
        let mut p = program("p");
        assert!(p.check().is_ok());

        p.min_term = 31;
        assert!(matches!(p.check(), Err(CatalogError::InvalidRecord { .. })));
    }

    #[test]
    fn test_program_rate_range() {
        let mut p = program("p");
        p.rate = 120.0;
        let err = p.check().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { ref id, .. } if id == "p"));
    }

    #[test]
    fn test_bank_rejects_duplicate_program_ids() {
        let mut bank = Bank::new("dom", "ДОМ.РФ");
        bank.programs = vec![program("family"), program("family")];

        assert_eq!(
            bank.check(),
            Err(CatalogError::DuplicateProgramId {
                bank_id: "dom".to_string(),
                program_id: "family".to_string(),
            })
        );
    }

    #[test]
    fn test_bank_rejects_empty_name() {
        let bank = Bank::new("dom", "");
        assert!(bank.check().is_err());
    }
}
