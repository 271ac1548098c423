/// Utilities for date and time formatting
///
/// Timestamps are rendered the way an en-IN browser locale prints them.
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt::Display;

const DISPLAY_FORMAT: &str = "%d/%m/%Y, %-I:%M:%S %P";

/// Format an export timestamp in the browser's local time zone
/// Example: "2024-03-15T14:02:26" -> "15/03/2024, 2:02:26 pm"
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Same as [`format_timestamp`] with an explicit target zone.
///
/// Values carrying an offset are converted into `tz`; naive values are
/// already wall-clock time and are printed unchanged. Unparseable input
/// is returned as is.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return naive.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_naive_timestamp() {
        assert_eq!(
            format_timestamp_in("2024-03-15T14:02:26.123456", &Utc),
            "15/03/2024, 2:02:26 pm"
        );
        assert_eq!(
            format_timestamp_in("2024-12-31 09:05:00", &Utc),
            "31/12/2024, 9:05:00 am"
        );
    }

    #[test]
    fn test_format_offset_timestamp_converts_zone() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            format_timestamp_in("2024-03-15T08:32:26Z", &ist),
            "15/03/2024, 2:02:26 pm"
        );
        assert_eq!(
            format_timestamp_in("2024-03-15T00:00:00+05:30", &Utc),
            "14/03/2024, 6:30:00 pm"
        );
    }

    #[test]
    fn test_invalid_timestamp() {
        assert_eq!(format_timestamp_in("yesterday", &Utc), "yesterday");
    }
}
