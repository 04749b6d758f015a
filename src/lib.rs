//! Fraisier - A lightweight expense-report terminal client.
//!
//! This crate provides a terminal-based client for browsing submitted
//! expense bills, with clean architecture separating the bill-loading
//! logic from its HTTP, storage and TUI adapters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and pure services.
pub mod application;
/// Domain layer containing entities, errors, routes and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "fraisier";
