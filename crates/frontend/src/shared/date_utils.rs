/// Utilities for date and time formatting
///
/// The table shows every timestamp in Philippine time (UTC+08:00, no DST).
use chrono::{DateTime, FixedOffset, Utc};
use contracts::shared::dates::parse_timestamp;

const MANILA_OFFSET_SECS: i32 = 8 * 3600;

fn to_manila(dt: DateTime<Utc>) -> Option<DateTime<FixedOffset>> {
    FixedOffset::east_opt(MANILA_OFFSET_SECS).map(|offset| dt.with_timezone(&offset))
}

/// Format a record date as `Mon DD, YYYY`
/// Example: "2024-05-01" -> "May 01, 2024"
pub fn format_date(date_str: &str) -> String {
    parse_timestamp(date_str)
        .and_then(to_manila)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Format a server timestamp as `Mon DD, YYYY, hh:mm:ss AM PHT`
/// Example: "2024-05-01T01:30:00Z" -> "May 01, 2024, 09:30:00 AM PHT"
pub fn format_datetime(datetime_str: &str) -> String {
    parse_timestamp(datetime_str)
        .and_then(to_manila)
        .map(|dt| format!("{} PHT", dt.format("%b %d, %Y, %I:%M:%S %p")))
        .unwrap_or_else(|| datetime_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-01"), "May 01, 2024");
        assert_eq!(format_date("Wed, 01 May 2024 00:00:00 GMT"), "May 01, 2024");
        // 17:00 UTC is already the next day in Manila
        assert_eq!(format_date("2024-05-01T17:00:00Z"), "May 02, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-05-01T01:30:00Z"),
            "May 01, 2024, 09:30:00 AM PHT"
        );
        assert_eq!(
            format_datetime("2024-12-31T15:59:59"),
            "Dec 31, 2024, 11:59:59 PM PHT"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
