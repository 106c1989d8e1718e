//! Status history of an item.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{format_date, parse_date};
use crate::types::StatusType;
use crate::xml::XmlElement;

/// One entry of an item's status history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Acceptance level.
    pub status: StatusType,
    /// Date the status was assigned; `None` means unspecified.
    pub date: Option<NaiveDate>,
}

impl Status {
    #[must_use]
    pub fn new(status: StatusType, date: Option<NaiveDate>) -> Self {
        Self { status, date }
    }

    /// Build a status from its body token and `date` attribute.
    ///
    /// Returns `None` when the token is not a known status, so no partial
    /// record is ever produced. An unparsable date is treated as unspecified.
    ///
    /// # Examples
    /// ```
    /// use xccdf_items::records::Status;
    /// use xccdf_items::types::StatusType;
    ///
    /// let status = Status::from_token("draft", Some("not-a-date")).unwrap();
    /// assert_eq!(status.status, StatusType::Draft);
    /// assert!(status.date.is_none());
    ///
    /// assert!(Status::from_token("approved", None).is_none());
    /// ```
    #[must_use]
    pub fn from_token(token: &str, date: Option<&str>) -> Option<Self> {
        let status = StatusType::parse(token)?;
        Some(Self {
            status,
            date: parse_date(date),
        })
    }

    /// Append a `status` element to `parent`.
    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = parent.add_text_child("status", self.status.as_str());
        if let Some(date) = self.date {
            node.set_attribute("date", format_date(date));
        }
        node
    }
}

/// Resolve the current status of a status history.
///
/// Records are scanned in document order. A record takes over when its
/// date is unspecified or not older than the newest date seen so far, so an
/// undated record always wins over everything before it, and a dated record
/// following an undated one always wins too.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use xccdf_items::records::{current_status, Status};
/// use xccdf_items::types::StatusType;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d);
/// let history = [
///     Status::new(StatusType::Accepted, day(10)),
///     Status::new(StatusType::Draft, None),
/// ];
/// assert_eq!(current_status(&history), StatusType::Draft);
/// ```
#[must_use]
pub fn current_status(statuses: &[Status]) -> StatusType {
    let mut max_date: Option<NaiveDate> = None;
    let mut current = StatusType::NotSpecified;

    for status in statuses {
        // `None < Some(_)` for `Option`, so an unspecified max acts as zero.
        let takes_over = match status.date {
            None => true,
            Some(date) => Some(date) >= max_date,
        };
        if takes_over {
            max_date = status.date;
            current = status.status;
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, d)
    }

    #[test]
    fn test_empty_history_is_not_specified() {
        assert_eq!(current_status(&[]), StatusType::NotSpecified);
    }

    #[test]
    fn test_dated_record_after_undated_wins() {
        let history = [
            Status::new(StatusType::Draft, None),
            Status::new(StatusType::Accepted, day(5)),
        ];
        assert_eq!(current_status(&history), StatusType::Accepted);
    }

    #[test]
    fn test_undated_record_after_dated_wins() {
        let history = [
            Status::new(StatusType::Accepted, day(5)),
            Status::new(StatusType::Draft, None),
        ];
        assert_eq!(current_status(&history), StatusType::Draft);
    }

    #[test]
    fn test_older_record_does_not_override() {
        let history = [
            Status::new(StatusType::Accepted, day(20)),
            Status::new(StatusType::Deprecated, day(10)),
        ];
        assert_eq!(current_status(&history), StatusType::Accepted);
    }

    #[test]
    fn test_equal_dates_last_wins() {
        let history = [
            Status::new(StatusType::Interim, day(7)),
            Status::new(StatusType::Incomplete, day(7)),
        ];
        assert_eq!(current_status(&history), StatusType::Incomplete);
    }

    #[test]
    fn test_undated_resets_maximum() {
        let history = [
            Status::new(StatusType::Accepted, day(20)),
            Status::new(StatusType::Draft, None),
            Status::new(StatusType::Deprecated, day(1)),
        ];
        assert_eq!(current_status(&history), StatusType::Deprecated);
    }

    #[test]
    fn test_last_undated_wins() {
        let history = [
            Status::new(StatusType::Draft, None),
            Status::new(StatusType::Interim, None),
        ];
        assert_eq!(current_status(&history), StatusType::Interim);
    }

    #[test]
    fn test_to_dom_writes_date() {
        let mut parent = XmlElement::new("Rule");
        Status::new(StatusType::Accepted, day(3)).to_dom(&mut parent);
        Status::new(StatusType::Draft, None).to_dom(&mut parent);

        let children: Vec<_> = parent.child_elements().collect();
        assert_eq!(children[0].text(), "accepted");
        assert_eq!(children[0].attribute("date"), Some("2024-01-03"));
        assert_eq!(children[1].attribute("date"), None);
    }
}
