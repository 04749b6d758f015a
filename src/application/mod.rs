//! Application layer with use cases and pure services.

/// Pure services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use use_cases::{FormatAnomaly, LoadBillsUseCase};
