use chrono::{Datelike, NaiveDate, Utc};

/// Calendar day used for "today" statistics. Matches how the records API
/// stamps dates: UTC, truncated to the day.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `Jan 05, 2024`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
