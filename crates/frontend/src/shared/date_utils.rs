//! Utilities for date and time formatting
//!
//! Absent input renders as "N/A", malformed input as "Invalid date".
//! Formatting never fails.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const ABSENT: &str = "N/A";
const INVALID: &str = "Invalid date";

/// Format an ISO date (or datetime, time part ignored) for display.
/// Example: `"2024-03-15"` -> `"Mar 15, 2024"`
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return ABSENT.to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID.to_string(),
    }
}

/// Format an ISO datetime for display.
/// Example: `"2024-03-15T14:02:26.123Z"` -> `"Mar 15, 2024, 02:02 PM"`
pub fn format_datetime(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return ABSENT.to_string();
    };
    match parse_datetime(raw) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => INVALID.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    // Tolerate a trailing Z and fractional seconds; both carry no
    // information we display.
    let raw = raw.strip_suffix('Z').unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    // Date-only input renders as midnight.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_input_is_na() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("   ")), "N/A");
        assert_eq!(format_datetime(None), "N/A");
        assert_eq!(format_datetime(Some("")), "N/A");
    }

    #[test]
    fn formats_dates_in_en_us_style() {
        assert_eq!(format_date(Some("2024-03-15")), "Mar 15, 2024");
        assert_eq!(format_date(Some("2024-12-05")), "Dec 5, 2024");
        assert_eq!(format_date(Some("2024-03-15T14:02:26.123Z")), "Mar 15, 2024");
        assert_eq!(format_date(Some("2024-03-15 14:02:26")), "Mar 15, 2024");
    }

    #[test]
    fn formats_datetimes_with_12_hour_clock() {
        assert_eq!(
            format_datetime(Some("2024-03-15T14:02:26.123Z")),
            "Mar 15, 2024, 02:02 PM"
        );
        assert_eq!(
            format_datetime(Some("2024-12-31 23:59:59")),
            "Dec 31, 2024, 11:59 PM"
        );
        assert_eq!(
            format_datetime(Some("2024-07-04T09:05")),
            "Jul 4, 2024, 09:05 AM"
        );
        // Date-only input renders as midnight.
        assert_eq!(
            format_datetime(Some("2024-03-15")),
            "Mar 15, 2024, 12:00 AM"
        );
    }

    #[test]
    fn malformed_input_is_invalid_not_a_panic() {
        assert_eq!(format_date(Some("not-a-date")), "Invalid date");
        assert_eq!(format_date(Some("2024-13-40")), "Invalid date");
        assert_eq!(format_datetime(Some("15/03/2024")), "Invalid date");
        assert_eq!(format_datetime(Some("2024-03-15T99:99")), "Invalid date");
    }
}
