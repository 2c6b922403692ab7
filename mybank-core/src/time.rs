//! Time utilities: timestamp unit normalization and French short dates.

use chrono::{Datelike, Local, TimeZone};
use chrono_tz::Tz;

/// Anything above this cannot plausibly be seconds (it is ~year 2286).
const MAX_EPOCH_SECONDS: i64 = 9_999_999_999;

/// Abbreviated French month names, January first. Stored exactly as displayed.
pub const FRENCH_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Normalize a timestamp of unknown unit (seconds or milliseconds) to seconds.
pub fn normalize_to_epoch_seconds(raw: i64) -> i64 {
    if raw > MAX_EPOCH_SECONDS { raw / 1000 } else { raw }
}

/// Format epoch seconds as e.g. "5 mars 2024" in the system time zone.
pub fn format_epoch_seconds(epoch_seconds: i64) -> String {
    format_in(epoch_seconds, &Local)
}

/// Same as [`format_epoch_seconds`] with an explicit IANA zone.
pub fn format_epoch_seconds_in(epoch_seconds: i64, tz: Tz) -> String {
    format_in(epoch_seconds, &tz)
}

fn format_in<Z: TimeZone>(epoch_seconds: i64, zone: &Z) -> String {
    // Only out-of-range timestamps have no mapping; render those as blank.
    let Some(dt) = zone.timestamp_opt(epoch_seconds, 0).earliest() else {
        return String::new();
    };
    let month = FRENCH_MONTHS[dt.month0() as usize];
    format!("{} {} {}", dt.day(), month, dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_seconds_unchanged() {
        assert_eq!(normalize_to_epoch_seconds(1_700_000_000), 1_700_000_000);
        assert_eq!(normalize_to_epoch_seconds(0), 0);
        assert_eq!(normalize_to_epoch_seconds(9_999_999_999), 9_999_999_999);
    }

    #[test]
    fn test_normalize_milliseconds_divided() {
        assert_eq!(normalize_to_epoch_seconds(1_700_000_000_000), 1_700_000_000);
        assert_eq!(normalize_to_epoch_seconds(1_707_561_600_999), 1_707_561_600);
        assert_eq!(normalize_to_epoch_seconds(10_000_000_000), 10_000_000);
    }

    #[test]
    fn test_format_in_paris() {
        // 2024-03-05 00:00:00 UTC
        assert_eq!(format_epoch_seconds_in(1_709_596_800, Tz::Europe__Paris), "5 mars 2024");
        // 2023-11-14 22:13:20 UTC, still the 14th in Paris
        assert_eq!(format_epoch_seconds_in(1_700_000_000, Tz::Europe__Paris), "14 nov. 2023");
    }

    #[test]
    fn test_format_crosses_midnight_by_zone() {
        // 2023-11-14 23:30:00 UTC is already the 15th in Paris
        let ts = 1_700_004_600;
        assert_eq!(format_epoch_seconds_in(ts, Tz::UTC), "14 nov. 2023");
        assert_eq!(format_epoch_seconds_in(ts, Tz::Europe__Paris), "15 nov. 2023");
    }

    #[test]
    fn test_month_table_is_literal() {
        let no_period: Vec<_> = FRENCH_MONTHS.iter().filter(|m| !m.ends_with('.')).collect();
        assert_eq!(no_period, vec![&"mars", &"mai", &"juin", &"août"]);
        // 2024-08-01 12:00:00 UTC
        assert_eq!(format_epoch_seconds_in(1_722_513_600, Tz::UTC), "1 août 2024");
    }

    #[test]
    fn test_local_format_shape() {
        // 2023-11-14 22:13:20 UTC is the 14th or 15th of November in any zone
        let out = format_epoch_seconds(1_700_000_000);
        let parts: Vec<_> = out.split(' ').collect();
        assert_eq!(parts.len(), 3, "unexpected format: {out}");
        assert!(matches!(parts[0], "14" | "15"), "unexpected day: {out}");
        assert_eq!(parts[1], "nov.");
        assert_eq!(parts[2], "2023");

        // 2024-08-15 12:00:00 UTC
        let out = format_epoch_seconds(1_722_513_600 + 86_400 * 14);
        assert!(
            out == "15 août 2024" || out == "16 août 2024",
            "unexpected format: {out}"
        );
    }
}
