//! Reusable UI components

mod bank_table;
mod button;
pub(crate) mod icons;
mod modal;
mod switch;

pub use bank_table::BankTable;
pub use button::{button_class, Button, ButtonSize, ButtonVariant};
pub use modal::{Modal, ModalType};
pub use switch::Switch;
