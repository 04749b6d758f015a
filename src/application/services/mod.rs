//! Pure application services.

/// Display formatting for dates and statuses.
pub mod format;
