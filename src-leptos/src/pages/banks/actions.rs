//! Action handlers for banks page

use crate::app::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mortgage_types::models::{remove_bank, set_bank_status};
use mortgage_types::{Bank, CatalogError, Result};

/// Banner message. `seq` tells apart repeated messages with the same text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notice {
    pub seq: u64,
    pub text: String,
    pub is_error: bool,
}

/// Clear the banner only if it still shows notice `seq`.
pub(crate) fn dismiss(current: &mut Option<Notice>, seq: u64) {
    if current.as_ref().is_some_and(|notice| notice.seq == seq) {
        *current = None;
    }
}

#[derive(Clone)]
pub(crate) struct BankActions {
    pub state: AppState,
    pub delete_confirm: RwSignal<Option<Bank>>,
    pub message: RwSignal<Option<Notice>>,
    next_seq: StoredValue<u64>,
}

impl BankActions {
    pub(crate) fn new(state: AppState) -> Self {
        Self {
            state,
            delete_confirm: RwSignal::new(None),
            message: RwSignal::new(None),
            next_seq: StoredValue::new(0),
        }
    }

    /// Put a notice on the banner and return its sequence number.
    pub(crate) fn post(&self, text: String, is_error: bool) -> u64 {
        let seq = self.next_seq.get_value() + 1;
        self.next_seq.set_value(seq);
        self.message.set(Some(Notice { seq, text, is_error }));
        seq
    }

    fn show_message(&self, text: String, is_error: bool) {
        let message = self.message;
        let timeout = self.state.config.with_untracked(|c| c.message_timeout_ms);
        let seq = self.post(text, is_error);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout).await;
            message.update(|current| dismiss(current, seq));
        });
    }

    fn report(&self, result: Result<String>) {
        match result {
            Ok(msg) => self.show_message(msg, false),
            Err(e) => {
                log::error!("Bank action failed: {}", e);
                self.show_message(format!("Ошибка: {}", e), true);
            }
        }
    }

    pub(crate) fn apply_status(&self, bank: &Bank, active: bool) -> Result<String> {
        let mut result = Ok(());
        self.state.banks.update(|banks| result = set_bank_status(banks, &bank.id, active));
        result?;
        log::info!("Bank {} active={}", bank.id, active);
        let state = if active { "включён" } else { "выключен" };
        Ok(format!("Банк «{}» {}", bank.name, state))
    }

    pub(crate) fn apply_delete(&self, id: &str) -> Result<String> {
        let mut result = Err(CatalogError::BankNotFound { id: id.to_string() });
        self.state.banks.update(|banks| result = remove_bank(banks, id));
        let removed = result?;
        log::info!("Bank {} deleted", removed.id);
        Ok(format!("Банк «{}» удалён", removed.name))
    }

    /// Ask for confirmation when configured, otherwise delete right away.
    /// Returns the outcome only when nothing was asked.
    pub(crate) fn request_delete(&self, bank: &Bank) -> Option<Result<String>> {
        if self.state.config.with_untracked(|c| c.confirm_delete) {
            self.delete_confirm.set(Some(bank.clone()));
            None
        } else {
            Some(self.apply_delete(&bank.id))
        }
    }

    pub fn on_toggle_status(&self, bank: &Bank, active: bool) {
        self.report(self.apply_status(bank, active));
    }

    pub fn on_delete(&self, bank: &Bank) {
        if let Some(result) = self.request_delete(bank) {
            self.report(result);
        }
    }

    pub fn execute_delete(&self) {
        let Some(bank) = self.delete_confirm.get_untracked() else {
            return;
        };
        self.delete_confirm.set(None);
        self.report(self.apply_delete(&bank.id));
    }

    pub fn on_edit(&self, bank: &Bank) {
        log::info!("Edit requested for bank {}", bank.id);
        self.show_message(format!("Редактирование банка «{}»", bank.name), false);
    }

    pub fn on_add_program(&self, bank: &Bank) {
        log::info!("New program requested for bank {}", bank.id);
        self.show_message(format!("Новая программа для банка «{}»", bank.name), false);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mortgage_types::{AdminConfig, TypedError};

    fn actions(confirm_delete: bool) -> BankActions {
        let banks = vec![Bank::new("sber", "Сбербанк"), Bank::new("vtb", "ВТБ")];
        let config = AdminConfig { confirm_delete, ..AdminConfig::default() };
        BankActions::new(AppState::new(banks, config))
    }

    #[test]
    fn test_apply_status_updates_owner_state() {
        let owner = Owner::new();
        owner.with(|| {
            let actions = actions(true);
            let vtb = actions.state.banks.get_untracked()[1].clone();

            let msg = actions.apply_status(&vtb, true).unwrap();
            assert!(msg.contains("ВТБ"));
            assert!(actions.state.banks.get_untracked()[1].is_active);
            assert!(!vtb.is_active);
        });
    }

    #[test]
    fn test_apply_status_unknown_bank() {
        let owner = Owner::new();
        owner.with(|| {
            let actions = actions(true);
            let err = actions.apply_status(&Bank::new("gone", "Gone"), true).unwrap_err();
            assert_eq!(
                err,
                TypedError::Catalog(CatalogError::BankNotFound { id: "gone".to_string() })
            );
        });
    }

    #[test]
    fn test_delete_waits_for_confirmation() {
        let owner = Owner::new();
        owner.with(|| {
            let actions = actions(true);
            let sber = actions.state.banks.get_untracked()[0].clone();

            assert!(actions.request_delete(&sber).is_none());
            assert_eq!(actions.delete_confirm.get_untracked(), Some(sber));
            assert_eq!(actions.state.banks.with_untracked(Vec::len), 2);
        });
    }

    #[test]
    fn test_delete_without_confirmation() {
        let owner = Owner::new();
        owner.with(|| {
            let actions = actions(false);
            let sber = actions.state.banks.get_untracked()[0].clone();

            let result = actions.request_delete(&sber).unwrap();
            assert!(result.unwrap().contains("Сбербанк"));
            assert_eq!(actions.delete_confirm.get_untracked(), None);
            let ids: Vec<_> = actions.state.banks.with_untracked(|b| b.iter().map(|b| b.id.clone()).collect());
            assert_eq!(ids, vec!["vtb".to_string()]);
        });
    }

    #[test]
    fn test_delete_twice_fails() {
        let owner = Owner::new();
        owner.with(|| {
            let actions = actions(false);
            assert!(actions.apply_delete("vtb").is_ok());
            assert!(actions.apply_delete("vtb").is_err());
        });
    }

    #[test]
    fn test_repeated_message_outlives_earlier_timer() {
        let owner = Owner::new();
        owner.with(|| {
            let actions = actions(true);
            let first = actions.post("Редактирование банка «ВТБ»".to_string(), false);
            let second = actions.post("Редактирование банка «ВТБ»".to_string(), false);
            assert_ne!(first, second);

            actions.message.update(|current| dismiss(current, first));
            assert_eq!(actions.message.with_untracked(|m| m.as_ref().map(|n| n.seq)), Some(second));

            actions.message.update(|current| dismiss(current, second));
            assert_eq!(actions.message.get_untracked(), None);
        });
    }
}
