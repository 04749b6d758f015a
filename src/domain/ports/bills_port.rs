//! Bills store port definition.

use async_trait::async_trait;

use crate::domain::entities::Bill;
use crate::domain::errors::ApiError;

/// Port for reading the remote bill collection.
///
/// The only operation the bills screen depends on. Rejections carry a
/// human-readable message that is surfaced to the user unchanged.
#[async_trait]
pub trait BillsPort: Send + Sync {
    /// Fetches every bill visible to the connected user.
    async fn list(&self) -> Result<Vec<Bill>, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock bills store for testing.
    pub struct MockBillsPort {
        bills: Mutex<Vec<Bill>>,
        fail_status: Option<u16>,
        calls: AtomicUsize,
    }

    impl MockBillsPort {
        /// Creates a mock returning the given bills.
        pub fn with_bills(bills: Vec<Bill>) -> Self {
            Self {
                bills: Mutex::new(bills),
                fail_status: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// Creates a mock rejecting every call with the given HTTP status.
        pub fn failing_with(status: u16) -> Self {
            Self {
                bills: Mutex::new(Vec::new()),
                fail_status: Some(status),
                calls: AtomicUsize::new(0),
            }
        }

        /// Returns how many times `list` was called.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BillsPort for MockBillsPort {
        async fn list(&self) -> Result<Vec<Bill>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.fail_status {
                return Err(ApiError::server(status));
            }
            Ok(self.bills.lock().unwrap().clone())
        }
    }
}
