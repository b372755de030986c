//! Utility functions for formatting and display

use mortgage_types::CatalogStats;

/// Format a percentage with the shortest decimal form.
///
/// Examples:
/// - 7.5 -> "7.5%"
/// - 10.0 -> "10%"
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Loan term range in years, e.g. "5 - 30 лет".
pub fn format_term_range(min_term: u32, max_term: u32) -> String {
    format!("{} - {} лет", min_term, max_term)
}

/// Minimum down payment, e.g. "от 10%".
pub fn format_down_payment(value: f64) -> String {
    format!("от {}", format_percent(value))
}

/// Program count pill text, e.g. "3 Программ".
pub fn format_program_count(count: usize) -> String {
    format!("{} Программ", count)
}

/// Table footer summary, e.g. "Показано 4 банков".
pub fn format_bank_total(count: usize) -> String {
    format!("Показано {} банков", count)
}

/// Page header summary, e.g. "4 банков · 3 активных · 9 программ · 1 с автоставками".
pub fn format_catalog_stats(stats: &CatalogStats) -> String {
    format!(
        "{} банков · {} активных · {} программ · {} с автоставками",
        stats.total_banks, stats.active_banks, stats.total_programs, stats.auto_rate_banks
    )
}
