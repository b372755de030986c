//! Bank table with expandable program rows

mod bank_row;
mod empty_state;
pub(crate) mod model;
mod programs_row;

use super::icons::ZapIcon;
use bank_row::BankRow;
use empty_state::EmptyState;
use leptos::prelude::*;
use model::{
    bank_by_id, footer_text, table_body, table_rows, TableRow, COLUMN_LABELS, NEXT_PAGE_LABEL,
    PREV_PAGE_LABEL,
};
use mortgage_types::{Bank, ExpandedBank};
use programs_row::ProgramsRow;

/// Owner callbacks, bundled so rows can share one copy.
#[derive(Clone, Copy)]
pub(crate) struct BankTableCallbacks {
    on_edit: Callback<Bank>,
    on_delete: Callback<Bank>,
    on_toggle_status: Callback<(Bank, bool)>,
    on_add_program: Callback<Bank>,
}

impl BankTableCallbacks {
    /// Switch handler. Forwards the bank as rendered; its `is_active` is left
    /// for the owner to update.
    pub(crate) fn status_handler(self, bank: Signal<Bank>) -> Callback<bool> {
        Callback::new(move |active: bool| {
            self.on_toggle_status.run((bank.get_untracked(), active));
        })
    }

    pub(crate) fn edit_handler(self, bank: Signal<Bank>) -> Callback<()> {
        Callback::new(move |_: ()| self.on_edit.run(bank.get_untracked()))
    }

    pub(crate) fn delete_handler(self, bank: Signal<Bank>) -> Callback<()> {
        Callback::new(move |_: ()| self.on_delete.run(bank.get_untracked()))
    }

    pub(crate) fn add_program_handler(self, bank: Signal<Bank>) -> Callback<()> {
        Callback::new(move |_: ()| self.on_add_program.run(bank.get_untracked()))
    }
}

/// Follows the bank a keyed row was created for. Keeps the last known record
/// while the row is being removed.
fn live_bank(banks: Signal<Vec<Bank>>, initial: Bank) -> Signal<Bank> {
    Memo::new(move |_| {
        banks.with(|list| bank_by_id(list, &initial.id).cloned()).unwrap_or_else(|| initial.clone())
    })
    .into()
}

/// Table of banks. Only one row can be expanded at a time; every data change
/// goes through the owner's callbacks.
#[component]
pub fn BankTable(
    #[prop(into)] banks: Signal<Vec<Bank>>,
    #[prop(into)] on_edit: Callback<Bank>,
    #[prop(into)] on_delete: Callback<Bank>,
    #[prop(into)] on_toggle_status: Callback<(Bank, bool)>,
    #[prop(into)] on_add_program: Callback<Bank>,
) -> impl IntoView {
    let expanded = RwSignal::new(ExpandedBank::none());
    let callbacks = BankTableCallbacks { on_edit, on_delete, on_toggle_status, on_add_program };
    let on_toggle_expand = Callback::new(move |id: String| expanded.update(|e| e.toggle(&id)));

    view! {
        <Show
            when=move || banks.with(|banks| table_body(banks).shows_table())
            fallback=|| view! { <EmptyState /> }
        >
            <div class="bank-table-card">
                <div class="bank-table-scroll">
                    <table class="bank-table">
                        <thead>
                            <tr class="bank-table-head">
                                <th class="col-bank">{COLUMN_LABELS[0]}</th>
                                <th class="col-programs">{COLUMN_LABELS[1]}</th>
                                <th class="col-status">{COLUMN_LABELS[2]}</th>
                                <th class="col-actions">{COLUMN_LABELS[3]}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || banks.with(|banks| expanded.with(|e| table_rows(banks, e)))
                                key=TableRow::key
                                children=move |row: TableRow| {
                                    let bank = live_bank(banks, row.bank().clone());
                                    match row {
                                        TableRow::Summary(initial) => {
                                            let is_expanded = Memo::new(move |_| {
                                                expanded.with(|e| e.is_expanded(&initial.id))
                                            });
                                            view! {
                                                <BankRow
                                                    bank=bank
                                                    expanded=is_expanded
                                                    on_toggle_expand=on_toggle_expand
                                                    callbacks=callbacks
                                                />
                                            }
                                            .into_any()
                                        }
                                        TableRow::Programs(_) => view! {
                                            <ProgramsRow bank=bank callbacks=callbacks />
                                        }
                                        .into_any(),
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <TableFooter bank_count=Signal::derive(move || banks.with(Vec::len)) />
            </div>
        </Show>
    }
}

/// Bank total and pagination placeholders. Paging is not implemented, so both
/// buttons stay disabled.
#[component]
fn TableFooter(#[prop(into)] bank_count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="bank-table-footer">
            <span class="bank-table-total">{move || footer_text(bank_count.get())}</span>
            <div class="pagination-controls">
                <button class="pagination-btn" disabled=true>{PREV_PAGE_LABEL}</button>
                <button class="pagination-btn" disabled=true>{NEXT_PAGE_LABEL}</button>
            </div>
        </div>
    }
}

/// Small round badge with a lightning bolt.
#[component]
fn AutoRatesBadge(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <span class="auto-rates-badge" title=title>
            <ZapIcon size=10 />
        </span>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorded {
        edits: Vec<String>,
        deletes: Vec<String>,
        statuses: Vec<(Bank, bool)>,
        add_programs: Vec<String>,
    }

    fn recording_callbacks(log: &Arc<Mutex<Recorded>>) -> BankTableCallbacks {
        let edits = Arc::clone(log);
        let deletes = Arc::clone(log);
        let statuses = Arc::clone(log);
        let adds = Arc::clone(log);
        BankTableCallbacks {
            on_edit: Callback::new(move |bank: Bank| edits.lock().unwrap().edits.push(bank.id)),
            on_delete: Callback::new(move |bank: Bank| {
                deletes.lock().unwrap().deletes.push(bank.id)
            }),
            on_toggle_status: Callback::new(move |change: (Bank, bool)| {
                statuses.lock().unwrap().statuses.push(change)
            }),
            on_add_program: Callback::new(move |bank: Bank| {
                adds.lock().unwrap().add_programs.push(bank.id)
            }),
        }
    }

    #[test]
    fn test_switch_change_reaches_owner_once_without_mutation() {
        let owner = Owner::new();
        owner.with(|| {
            let log = Arc::new(Mutex::new(Recorded::default()));
            let banks = RwSignal::new(vec![Bank::new("vtb", "ВТБ")]);
            let bank = live_bank(banks.into(), Bank::new("vtb", "ВТБ"));

            let on_change = recording_callbacks(&log).status_handler(bank);
            on_change.run(true);

            let recorded = log.lock().unwrap();
            assert_eq!(recorded.statuses.len(), 1);
            assert_eq!(recorded.statuses[0].0.id, "vtb");
            assert!(recorded.statuses[0].1);
            assert!(!recorded.statuses[0].0.is_active);
            assert!(!banks.with_untracked(|b| b[0].is_active));
        });
    }

    #[test]
    fn test_each_action_reaches_its_own_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let log = Arc::new(Mutex::new(Recorded::default()));
            let callbacks = recording_callbacks(&log);
            let sber = Signal::stored(Bank::new("sber", "Сбербанк"));
            let alfa = Signal::stored(Bank::new("alfa", "Альфа-Банк"));

            callbacks.edit_handler(sber).run(());
            callbacks.delete_handler(alfa).run(());
            callbacks.add_program_handler(sber).run(());

            let recorded = log.lock().unwrap();
            assert_eq!(recorded.edits, vec!["sber".to_string()]);
            assert_eq!(recorded.deletes, vec!["alfa".to_string()]);
            assert_eq!(recorded.add_programs, vec!["sber".to_string()]);
            assert!(recorded.statuses.is_empty());
        });
    }

    #[test]
    fn test_row_follows_owner_updates() {
        let owner = Owner::new();
        owner.with(|| {
            let banks = RwSignal::new(vec![Bank::new("sber", "Сбербанк")]);
            let bank = live_bank(banks.into(), Bank::new("sber", "Сбербанк"));

            banks.update(|list| list[0].is_active = true);
            assert!(bank.with_untracked(|b| b.is_active));

            banks.set(Vec::new());
            assert_eq!(bank.with_untracked(|b| b.id.clone()), "sber");
        });
    }

    #[test]
    fn test_expansion_signal_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            let expanded = RwSignal::new(ExpandedBank::none());
            let toggle = Callback::new(move |id: String| expanded.update(|e| e.toggle(&id)));

            toggle.run("sber".to_string());
            toggle.run("vtb".to_string());
            assert!(expanded.with_untracked(|e| e.is_expanded("vtb")));
            assert!(!expanded.with_untracked(|e| e.is_expanded("sber")));

            toggle.run("vtb".to_string());
            assert_eq!(expanded.get_untracked(), ExpandedBank::none());
        });
    }
}
