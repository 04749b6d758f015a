use serde::Deserialize;

/// Billed API error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the API.
    pub message: String,
}
