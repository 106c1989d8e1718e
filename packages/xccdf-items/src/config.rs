//! Vocabulary constants and token parsing helpers for XCCDF documents.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Namespace of XCCDF 1.2 elements, declared on emitted documents.
pub const XCCDF_NAMESPACE: &str = "http://checklists.nist.gov/xccdf/1.2";

/// Namespace bound to the reserved `xml:` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Weight an item carries unless its `weight` attribute says otherwise.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Column limit for text fragments in the human-readable dump.
pub const DUMP_TEXT_WIDTH: usize = 70;

/// Format of `xsd:date` values such as status dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an XML schema boolean token.
///
/// Only the fixed two-sided vocabulary is accepted; anything else yields
/// `None` so the caller can keep its default.
///
/// # Examples
/// ```
/// use xccdf_items::config::parse_bool;
///
/// assert_eq!(parse_bool("True"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
#[must_use]
pub fn parse_bool(token: &str) -> Option<bool> {
    match token.trim() {
        "true" | "True" | "1" => Some(true),
        "false" | "False" | "0" => Some(false),
        _ => None,
    }
}

/// Canonical token for a boolean attribute value.
#[must_use]
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parse a non-negative, finite weight.
#[must_use]
pub fn parse_weight(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
}

/// Parse an `xsd:dateTime` value.
///
/// Values without an offset are taken as UTC. Absent or unparsable input
/// yields `None` ("unspecified").
///
/// # Examples
/// ```
/// use xccdf_items::config::parse_datetime;
///
/// assert!(parse_datetime(Some("2024-03-01T12:00:00Z")).is_some());
/// assert!(parse_datetime(Some("2024-03-01T12:00:00")).is_some());
/// assert!(parse_datetime(Some("yesterday")).is_none());
/// assert!(parse_datetime(None).is_none());
/// ```
#[must_use]
pub fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse an `xsd:date` value.
///
/// A full date-time is accepted as well and truncated to its date part.
/// Absent or unparsable input yields `None` ("unspecified").
///
/// # Examples
/// ```
/// use xccdf_items::config::parse_date;
///
/// assert!(parse_date(Some("2024-03-01")).is_some());
/// assert!(parse_date(Some("2024-13-01")).is_none());
/// ```
#[must_use]
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| parse_datetime(Some(value)).map(|dt| dt.date_naive()))
}

/// Render a date in `xsd:date` form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a timestamp in `xsd:dateTime` form (UTC).
///
/// Fractional seconds are written only when present, with as many digits as
/// needed, so [`parse_datetime`] reads back the same instant.
#[must_use]
pub fn format_datetime(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
