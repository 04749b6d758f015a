//! Billed API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::ErrorResponse;
use crate::domain::entities::Bill;
use crate::domain::errors::ApiError;
use crate::domain::ports::BillsPort;

const DEFAULT_API_BASE: &str = "http://localhost:5678";

/// HTTP adapter for the bills collection.
pub struct BilledApiClient {
    client: Client,
    base_url: String,
}

impl BilledApiClient {
    /// Creates a new client with the default base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn map_request_error(e: &reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::network("request timed out")
        } else if e.is_connect() {
            ApiError::network("failed to connect to the bills store")
        } else {
            ApiError::network(e.to_string())
        }
    }

    /// Maps a non-success response to the error surfaced to the user.
    ///
    /// Every HTTP failure becomes `Server { status }` so the screen shows
    /// the same `Erreur {status}` text the web back office shows.
    fn map_status(status: StatusCode) -> ApiError {
        ApiError::server(status.as_u16())
    }
}

#[async_trait]
impl BillsPort for BilledApiClient {
    async fn list(&self) -> Result<Vec<Bill>, ApiError> {
        let url = format!("{}/bills", self.base_url);

        debug!(url = %url, "Fetching bills");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach the bills store");
            Self::map_request_error(&e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .map_or_else(|_| status.to_string(), |e| e.message);
            warn!(status = %status, detail = %detail, "Bills store returned an error");
            return Err(Self::map_status(status));
        }

        let bills: Vec<Bill> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse bills response");
            ApiError::parse(e.to_string())
        })?;

        debug!(count = bills.len(), "Bills fetched");

        Ok(bills)
    }
}
