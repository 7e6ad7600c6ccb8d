//! ISO 8601 date handling for post timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display format for post dates.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO 8601 date or date-time into its calendar date.
///
/// Accepts RFC 3339 timestamps (`2023-03-05T00:00:00Z`,
/// `2023-03-05T10:00:00+02:00`), naive date-times (`2023-03-05T10:00:00`,
/// `2023-03-05 10:00`) and plain dates (`2023-03-05`). Timestamps with an
/// offset keep the date in that offset, so the date an author wrote is the
/// date that is shown.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Reformats an ISO 8601 value as `yyyy-MM-dd`.
pub fn format_display_date(value: &str) -> Option<String> {
    parse_iso_date(value).map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
}
