use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Strict `YYYY-MM-DD` (command-line arguments).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Lenient parser for dates coming from the onboarding form or a stored
/// document:
/// - YYYY-MM-DD
/// - ISO 8601 date-time (`2021-03-01T00:00:00.000Z`, `2021-03-01T00:00:00+02:00`)
/// - MM/DD/YYYY
///
/// For date-times only the calendar date is kept.
pub fn parse_form_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// Whole calendar months from `from` to `to` (0 when `to` precedes `from`).
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let mut months = (to.year() - from.year()) as i64 * 12 + to.month() as i64
        - from.month() as i64;

    if to.day() < from.day() {
        months -= 1;
    }

    months.max(0)
}

pub fn format_date(d: Option<NaiveDate>, fmt: &str) -> String {
    match d {
        Some(d) => d.format(fmt).to_string(),
        None => "--".to_string(),
    }
}
