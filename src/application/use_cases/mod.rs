//! Use case implementations.

mod load_bills_use_case;

pub use load_bills_use_case::{FormatAnomaly, LoadBillsUseCase};
