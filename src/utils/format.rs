//! Formatting utilities for file sizes and timestamps.

/// Format an object size for the listing.
///
/// Below 1 KiB the raw byte count is shown without a unit; larger sizes are
/// floored to whole KB/MB/GB/TB (binary multiples).
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if size < 1024 {
        return size.to_string();
    }

    let mut value = size as f64 / 1024.0;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{} {}", value.floor(), unit);
        }
        value /= 1024.0;
    }
    format!("{} {}", value.floor(), UNITS[UNITS.len() - 1])
}

/// Format a Unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format_datetime(timestamp: i64) -> String {
    let days = timestamp.div_euclid(86_400);
    let secs = timestamp.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year,
        month,
        day,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
///
/// Constant time for any input, using 400-year eras starting on March 1.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(1023), "1023");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 1), "5 MB");
        assert_eq!(format_size(3 * 1024u64.pow(3)), "3 GB");
        assert_eq!(format_size(2048 * 1024u64.pow(4)), "2048 TB");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(0), "1970-01-01 00:00:00");
        // 2024-02-29 12:34:56 UTC
        assert_eq!(format_datetime(1_709_210_096), "2024-02-29 12:34:56");
        assert_eq!(format_datetime(-1), "1969-12-31 23:59:59");
        assert_eq!(format_datetime(951_782_400), "2000-02-29 00:00:00");
        assert_eq!(format_datetime(4_107_542_400), "2100-03-01 00:00:00");
    }

    #[test]
    fn test_format_datetime_extreme_values_return() {
        // Millisecond values mistaken for seconds still format.
        assert!(format_datetime(1_709_210_096_000).starts_with("56132-"));
        assert!(format_datetime(i64::MAX).ends_with("15:30:07"));
        assert!(format_datetime(i64::MIN).ends_with("08:29:52"));
    }
}
