//! Load-bills use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::format::{format_status, try_format_date};
use crate::domain::entities::{Bill, BillId, DisplayBill};
use crate::domain::errors::ApiError;
use crate::domain::ports::BillsPort;

/// A per-record formatting failure, recovered locally and reported for
/// observability. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatAnomaly {
    /// Bill the anomaly was detected on.
    pub bill_id: BillId,
    /// The stored date value that could not be parsed.
    pub raw_date: String,
}

/// Retrieves and prepares the bills to display.
///
/// The bills port is optional: interaction-only usages construct the use
/// case without one, and `execute` then resolves to an empty list instead
/// of failing.
#[derive(Clone)]
pub struct LoadBillsUseCase {
    bills_port: Option<Arc<dyn BillsPort>>,
}

impl LoadBillsUseCase {
    /// Creates a new load-bills use case.
    #[must_use]
    pub fn new(bills_port: Arc<dyn BillsPort>) -> Self {
        Self {
            bills_port: Some(bills_port),
        }
    }

    /// Creates a use case with no backing store.
    #[must_use]
    pub const fn without_store() -> Self {
        Self { bills_port: None }
    }

    /// Fetches every bill, formats each record and sorts the result by
    /// raw date, most recent first.
    ///
    /// A record whose date cannot be parsed keeps its raw values and is
    /// logged; it is never dropped. The sort compares raw date strings
    /// lexically, which coincides with chronological order for the
    /// store's ISO-formatted dates.
    ///
    /// # Errors
    /// Returns the store's error unchanged when the list call fails; the
    /// caller surfaces its message verbatim.
    pub async fn execute(&self) -> Result<Vec<DisplayBill>, ApiError> {
        let Some(port) = &self.bills_port else {
            debug!("No bills store configured, resolving with empty list");
            return Ok(Vec::new());
        };

        let raw_bills = port.list().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch bills");
            e
        })?;

        let fetched = raw_bills.len();
        let mut anomalies = Vec::new();
        let mut bills: Vec<DisplayBill> = raw_bills
            .into_iter()
            .map(|bill| match format_record(&bill) {
                Ok(display) => display,
                Err(anomaly) => {
                    warn!(
                        bill_id = %anomaly.bill_id,
                        raw_date = %anomaly.raw_date,
                        "Unformatable date on bill record, keeping raw values"
                    );
                    let display = raw_record(bill);
                    anomalies.push(anomaly);
                    display
                }
            })
            .collect();

        // Stable sort: records with equal keys keep their fetch order.
        bills.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));

        info!(
            count = bills.len(),
            anomalies = anomalies.len(),
            "Bills loaded"
        );
        debug_assert_eq!(bills.len(), fetched);

        Ok(bills)
    }
}

/// Formats one record, failing only on an unparseable date.
fn format_record(bill: &Bill) -> Result<DisplayBill, FormatAnomaly> {
    let date = try_format_date(&bill.date).ok_or_else(|| FormatAnomaly {
        bill_id: bill.id.clone(),
        raw_date: bill.date.clone(),
    })?;

    Ok(DisplayBill {
        id: bill.id.clone(),
        date,
        raw_date: bill.date.clone(),
        status: format_status(&bill.status),
        amount: bill.amount,
        name: bill.name.clone(),
        file_url: bill.file_url.clone(),
    })
}

/// Fallback for an anomalous record: raw date, but the status label is
/// still total and applies.
fn raw_record(bill: Bill) -> DisplayBill {
    DisplayBill {
        date: bill.date.clone(),
        raw_date: bill.date,
        status: format_status(&bill.status),
        id: bill.id,
        amount: bill.amount,
        name: bill.name,
        file_url: bill.file_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockBillsPort;

    fn bill(id: &str, date: &str, status: &str) -> Bill {
        Bill {
            id: BillId::from(id),
            date: date.to_string(),
            status: status.to_string(),
            amount: 100.0,
            name: format!("expense {id}"),
            kind: "Transports".to_string(),
            file_url: Some(format!("https://storage.tld/{id}.jpg")),
            file_name: None,
            email: Some("a@a".to_string()),
            commentary: None,
        }
    }

    #[tokio::test]
    async fn test_sorts_most_recent_first() {
        let port = Arc::new(MockBillsPort::with_bills(vec![
            bill("b1", "2021-01-15", "pending"),
            bill("b2", "2021-06-02", "accepted"),
            bill("b3", "2020-12-30", "refused"),
        ]));

        let bills = LoadBillsUseCase::new(port).execute().await.unwrap();

        let dates: Vec<&str> = bills.iter().map(|b| b.raw_date.as_str()).collect();
        assert_eq!(dates, vec!["2021-06-02", "2021-01-15", "2020-12-30"]);
        for pair in bills.windows(2) {
            assert!(pair[0].raw_date >= pair[1].raw_date);
        }
    }

    #[tokio::test]
    async fn test_formats_dates_and_statuses() {
        let port = Arc::new(MockBillsPort::with_bills(vec![bill(
            "b1",
            "2004-04-04",
            "pending",
        )]));

        let bills = LoadBillsUseCase::new(port).execute().await.unwrap();

        assert_eq!(bills[0].date, "4 Avr. 04");
        assert_eq!(bills[0].raw_date, "2004-04-04");
        assert_eq!(bills[0].status, "En attente");
    }

    #[tokio::test]
    async fn test_malformed_record_is_kept_with_raw_date() {
        let port = Arc::new(MockBillsPort::with_bills(vec![
            bill("b1", "2021-06-02", "accepted"),
            bill("b2", "garbage-date", "pending"),
            bill("b3", "2020-12-30", "refused"),
        ]));

        let bills = LoadBillsUseCase::new(port).execute().await.unwrap();

        assert_eq!(bills.len(), 3);
        let broken = bills.iter().find(|b| b.id.as_str() == "b2").unwrap();
        assert_eq!(broken.date, "garbage-date");
        assert_eq!(broken.status, "En attente");
    }

    #[tokio::test]
    async fn test_empty_store_resolves_empty() {
        let port = Arc::new(MockBillsPort::with_bills(Vec::new()));
        let bills = LoadBillsUseCase::new(port).execute().await.unwrap();
        assert!(bills.is_empty());
    }

    #[tokio::test]
    async fn test_missing_store_resolves_empty() {
        let bills = LoadBillsUseCase::without_store().execute().await.unwrap();
        assert!(bills.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates_verbatim() {
        let port = Arc::new(MockBillsPort::failing_with(404));
        let err = LoadBillsUseCase::new(port).execute().await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur 404");
    }

    #[tokio::test]
    async fn test_repeat_execution_is_idempotent() {
        let port = Arc::new(MockBillsPort::with_bills(vec![
            bill("b1", "2021-01-15", "pending"),
            bill("b2", "broken", "accepted"),
        ]));
        let use_case = LoadBillsUseCase::new(port.clone());

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(port.call_count(), 2);
    }
}
