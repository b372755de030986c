//! Page components

mod banks;

pub use banks::Banks;
