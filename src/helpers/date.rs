//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a front-matter date in one of the common formats.
///
/// Dates without an offset are read as UTC, so the result does not depend on
/// the machine running the build.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Format a date the way RSS `pubDate` expects (RFC 822, GMT)
///
/// # Examples
/// ```ignore
/// rfc822(&date) // -> "Mon, 15 Jan 2024 00:00:00 GMT"
/// ```
pub fn rfc822(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date("2024-01-15").unwrap();
        assert_eq!(rfc822(&dt), "Mon, 15 Jan 2024 00:00:00 GMT");
    }

    #[test]
    fn test_parse_datetime_formats() {
        let dt = parse_date("2024/01/15 10:30").unwrap();
        assert_eq!(rfc822(&dt), "Mon, 15 Jan 2024 10:30:00 GMT");

        let dt = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(rfc822(&dt), "Mon, 15 Jan 2024 08:30:00 GMT");
    }

    #[test]
    fn test_unparseable_dates() {
        assert!(parse_date("").is_none());
        assert!(parse_date("sometime last week").is_none());
        assert!(parse_date("2024-13-45").is_none());
    }
}
