//! Expand/collapse state of the bank table.

/// Which single bank row, if any, shows its program list.
///
/// Holding one optional id (rather than a set) makes "at most one row open"
/// hold by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedBank(Option<String>);

impl ExpandedBank {
    /// Nothing expanded.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Collapse if `id` is the open row, otherwise open `id` instead.
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.0 = None;
        } else {
            self.0 = Some(id.to_string());
        }
    }

    /// Check if the row with `id` is open.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.0.as_deref() == Some(id)
    }
}
