//! Expense bill entities.

use serde::{Deserialize, Serialize};

/// Unique identifier for a bill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId(pub String);

impl BillId {
    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BillId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A raw expense bill as stored remotely.
///
/// Records are not guaranteed well-formed: `date` may be missing or
/// non-parseable and `status` may carry an unknown code. Consumers must
/// tolerate both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier.
    pub id: BillId,
    /// Submission date, ISO-like but possibly malformed.
    #[serde(default)]
    pub date: String,
    /// Status code (`pending`, `accepted`, `refused`, or unknown).
    #[serde(default)]
    pub status: String,
    /// Amount in euros.
    #[serde(default)]
    pub amount: f64,
    /// Expense name entered by the employee.
    #[serde(default)]
    pub name: String,
    /// Expense category.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// URL of the attached receipt, if any.
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    /// Original filename of the attached receipt.
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    /// Email of the submitting employee.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form commentary.
    #[serde(default)]
    pub commentary: Option<String>,
}

/// A bill prepared for rendering.
///
/// Built fresh from a [`Bill`] on every fetch and discarded after
/// rendering; never cached across fetches. `date` and `status` hold the
/// localized representation, or the raw stored value when it could not be
/// formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    /// Unique identifier.
    pub id: BillId,
    /// Localized date, or the raw string when unparseable.
    pub date: String,
    /// Original stored date, used as the sort key.
    pub raw_date: String,
    /// Localized status label, or the raw code when unrecognized.
    pub status: String,
    /// Amount in euros.
    pub amount: f64,
    /// Expense name.
    pub name: String,
    /// URL of the attached receipt, if any.
    pub file_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_store_record() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://test.storage.tld/justificatif.jpg",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "email": "a@a"
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.id.as_str(), "47qAXb6fIm2zOKkLzMro");
        assert_eq!(bill.date, "2004-04-04");
        assert_eq!(bill.status, "pending");
        assert_eq!(bill.kind, "Hôtel et logement");
        assert!((bill.amount - 400.0).abs() < f64::EPSILON);
        assert!(bill.file_url.is_some());
    }

    #[test]
    fn test_tolerates_missing_optional_fields() {
        let json = r#"{"id": "abc", "status": "pending"}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.date, "");
        assert!(bill.file_url.is_none());
        assert!(bill.email.is_none());
    }
}
