//! Date/time utilities for newsdigest.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Storage format for entry timestamps.
pub const STORE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp into the canonical store format (UTC).
pub fn to_store_format(dt: &DateTime<Utc>) -> String {
    dt.format(STORE_FORMAT).to_string()
}

/// Current date (YYYY-MM-DD) in the given timezone.
///
/// Falls back to UTC when the timezone name does not parse.
pub fn today_in_timezone(timezone: &str) -> String {
    let now = Utc::now();
    match timezone.parse::<Tz>() {
        Ok(tz) => now.with_timezone(&tz).format("%Y-%m-%d").to_string(),
        Err(_) => now.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_store_format() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(to_store_format(&dt), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_to_store_format_sorts_lexicographically() {
        let earlier = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 11, 2, 9, 0, 0).unwrap();
        assert!(to_store_format(&earlier) < to_store_format(&later));
    }

    #[test]
    fn test_today_in_timezone_format() {
        let today = today_in_timezone("UTC");
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }

    #[test]
    fn test_today_in_invalid_timezone_falls_back() {
        // Should not panic, falls back to UTC
        let today = today_in_timezone("Invalid/Zone");
        assert_eq!(today.len(), 10);
    }
}
