//! Presentation model of the bank table.
//!
//! Everything the table shows is derived here from the input banks and the
//! expansion state, so the rendering contract can be checked without a DOM.

use crate::formatters::{
    format_bank_total, format_down_payment, format_percent, format_program_count,
    format_term_range,
};
use mortgage_types::{Bank, ExpandedBank, Program};

pub(crate) const COLUMN_LABELS: [&str; 4] = ["Банк", "Программы", "Статус", "Действия"];

pub(crate) const EMPTY_TITLE: &str = "Банки не найдены";
pub(crate) const EMPTY_TEXT: &str =
    "Список банков пуст. Добавьте новый банк, чтобы начать работу с калькулятором.";

pub(crate) const PROGRAMS_HEADING: &str = "Ипотечные программы";
pub(crate) const ADD_PROGRAM_LABEL: &str = "Добавить программу";
pub(crate) const NO_PROGRAMS_TEXT: &str = "Программы для этого банка еще не настроены.";
pub(crate) const SPECIAL_CONDITIONS_BADGE: &str = "★ Особые условия";
pub(crate) const TERM_LABEL: &str = "Срок:";
pub(crate) const DOWN_PAYMENT_LABEL: &str = "Взнос:";

pub(crate) const EDIT_TITLE: &str = "Редактировать банк";
pub(crate) const DELETE_TITLE: &str = "Удалить банк";
pub(crate) const BANK_AUTO_RATES_TITLE: &str = "Автоставки банка";
pub(crate) const PROGRAM_AUTO_RATES_TITLE: &str = "Автоставки";

pub(crate) const PREV_PAGE_LABEL: &str = "Назад";
pub(crate) const NEXT_PAGE_LABEL: &str = "Вперед";

/// What the table area shows for a bank list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableBody {
    /// Only the empty-state block, no table and no footer
    Empty,
    /// Header, body rows and footer
    Rows { bank_count: usize },
}

impl TableBody {
    pub(crate) fn shows_table(self) -> bool {
        matches!(self, Self::Rows { .. })
    }
}

pub(crate) fn table_body(banks: &[Bank]) -> TableBody {
    if banks.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows { bank_count: banks.len() }
    }
}

/// One `<tr>` of the table body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TableRow {
    /// Summary row of a bank
    Summary(Bank),
    /// Full-width program list right after the expanded bank
    Programs(Bank),
}

impl TableRow {
    pub(crate) fn bank(&self) -> &Bank {
        match self {
            Self::Summary(bank) | Self::Programs(bank) => bank,
        }
    }

    /// Stable per-row key. Expanding or editing a bank keeps its summary key,
    /// so only the program row is added or dropped.
    pub(crate) fn key(&self) -> String {
        match self {
            Self::Summary(bank) => format!("bank:{}", bank.id),
            Self::Programs(bank) => format!("programs:{}", bank.id),
        }
    }
}

/// Body rows in input order, with at most one program row following the
/// expanded bank. A stale expanded id yields no program row.
pub(crate) fn table_rows(banks: &[Bank], expanded: &ExpandedBank) -> Vec<TableRow> {
    let mut rows = Vec::with_capacity(banks.len() + 1);
    for bank in banks {
        rows.push(TableRow::Summary(bank.clone()));
        if expanded.is_expanded(&bank.id) {
            rows.push(TableRow::Programs(bank.clone()));
        }
    }
    rows
}

/// Current record of a rendered row, if the bank is still listed.
pub(crate) fn bank_by_id<'a>(banks: &'a [Bank], id: &str) -> Option<&'a Bank> {
    banks.iter().find(|bank| bank.id == id)
}

pub(crate) fn footer_text(bank_count: usize) -> String {
    format_bank_total(bank_count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chevron {
    Up,
    Down,
}

/// What a summary row shows for one bank.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BankRowModel {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub show_auto_rates_badge: bool,
    pub program_label: String,
    pub pill_class: &'static str,
    pub row_class: &'static str,
    pub expand_class: &'static str,
    pub chevron: Chevron,
    pub is_active: bool,
}

impl BankRowModel {
    pub(crate) fn new(bank: &Bank, expanded: bool) -> Self {
        let count = bank.program_count();
        Self {
            name: bank.name.clone(),
            description: bank.description().map(str::to_string),
            logo: bank.logo().map(str::to_string),
            show_auto_rates_badge: bank.auto_rates,
            program_label: format_program_count(count),
            pill_class: if count > 0 { "pill pill--filled" } else { "pill pill--empty" },
            row_class: if expanded { "bank-row is-expanded" } else { "bank-row" },
            expand_class: if expanded { "expand-btn expand-btn--open" } else { "expand-btn" },
            chevron: if expanded { Chevron::Up } else { Chevron::Down },
            is_active: bank.is_active,
        }
    }
}

/// What a program card shows. Special condition text is never displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProgramCardModel {
    pub name: String,
    pub auto_rates: bool,
    pub rate: String,
    pub term: String,
    pub down_payment: String,
    pub special_conditions: bool,
}

impl From<&Program> for ProgramCardModel {
    fn from(program: &Program) -> Self {
        Self {
            name: program.name.clone(),
            auto_rates: program.auto_rates,
            rate: format_percent(program.rate),
            term: format_term_range(program.min_term, program.max_term),
            down_payment: format_down_payment(program.min_down_payment),
            special_conditions: program.has_special_conditions(),
        }
    }
}

/// Content of the expanded row below its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProgramSection {
    Cards(Vec<ProgramCardModel>),
    NoPrograms,
}

pub(crate) fn program_section(bank: &Bank) -> ProgramSection {
    if bank.has_programs() {
        ProgramSection::Cards(bank.programs.iter().map(ProgramCardModel::from).collect())
    } else {
        ProgramSection::NoPrograms
    }
}
