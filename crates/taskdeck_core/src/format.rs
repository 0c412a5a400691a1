//! Display formatting for stored timestamps.

use chrono::DateTime;

/// Renders an ISO-8601 timestamp as `"Aug 5, 2026, 02:30 PM"`.
///
/// Presentation only; the stamp is rendered in its own UTC offset. Input
/// that does not parse is returned unchanged so display code never has to
/// branch on a failure.
pub fn format_date(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(stamp) => stamp.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => value.to_string(),
    }
}
