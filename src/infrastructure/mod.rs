//! Infrastructure layer with external service adapters.

/// Billed API client.
pub mod billed;
/// Application configuration.
pub mod config;
/// Client state persistence.
pub mod storage;

pub use billed::BilledApiClient;
pub use config::{AppConfig, LogLevel};
pub use storage::SessionStore;
