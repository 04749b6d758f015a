//! Billed API client.

mod client;
mod dto;

pub use client::BilledApiClient;
pub use dto::ErrorResponse;
