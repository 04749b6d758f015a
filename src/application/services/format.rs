//! Display formatting for bill dates and statuses.
//!
//! Both functions are pure and total: every input maps to some output
//! string and nothing here can panic. Malformed values fall through
//! unchanged so one bad record never blocks rendering of the list.

use chrono::{DateTime, Datelike, NaiveDate};

/// Abbreviated French month names, capitalized and truncated to three
/// characters the way the original back office displays them (note that
/// juin and juillet both abbreviate to `Jui`).
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Formats a stored date string for display.
///
/// Accepts ISO dates (`2004-04-04`) and RFC 3339 timestamps; renders them
/// as `4 Avr. 04`. Anything unparseable, including the empty string, is
/// returned unchanged; the caller logs the anomaly but keeps rendering.
#[must_use]
pub fn format_date(raw: &str) -> String {
    try_format_date(raw).unwrap_or_else(|| raw.to_string())
}

/// Like [`format_date`], but reports an unparseable date as `None` so the
/// caller can record the anomaly before falling back to the raw value.
#[must_use]
pub fn try_format_date(raw: &str) -> Option<String> {
    let date = parse_date(raw)?;
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    Some(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Maps a status code to its localized label.
///
/// The store uses a closed set of codes; an unrecognized code is returned
/// unchanged rather than failing.
#[must_use]
pub fn format_status(code: &str) -> String {
    match code {
        "pending" => "En attente".to_string(),
        "accepted" => "Accepté".to_string(),
        "refused" => "Refusé".to_string(),
        other => other.to_string(),
    }
}
