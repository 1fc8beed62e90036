//! Time utilities for MindFlow progress.
//!
//! Internal timestamps are Unix epoch microseconds (u64). Certificates carry
//! a human-readable calendar date instead, e.g. `October 17, 2026`.

use chrono::NaiveDate;

/// Format used for certificate issue dates.
pub const ISSUE_DATE_FORMAT: &str = "%B %-d, %Y";

/// Return the current time as microseconds since Unix epoch.
pub fn now_micros() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

/// Format a calendar date the way certificates print it.
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format(ISSUE_DATE_FORMAT).to_string()
}

/// Today's date in the local timezone, formatted for a certificate.
pub fn issue_date_today() -> String {
    format_issue_date(chrono::Local::now().date_naive())
}

/// Parse an issue date previously produced by [`format_issue_date`].
pub fn parse_issue_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%B %d, %Y").ok()
}
