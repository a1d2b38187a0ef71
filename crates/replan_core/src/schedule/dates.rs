//! Calendar date standardization and formatting.
//!
//! # Responsibility
//! - Normalize user/store-provided date text into `NaiveDate`.
//! - Produce the canonical `YYYY-MM-DD` string the UI and store match on.
//!
//! # Invariants
//! - `standardize_date` never panics; unusable input yields `None`.
//! - `format_date_for_picker` output round-trips through
//!   `standardize_date` for every valid date.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading calendar-date portion of ISO-8601 text. Datetime strings are
/// accepted by taking this prefix, mirroring the `date.slice(0, 10)`
/// convention used by the surrounding UI and store.
static LEADING_ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("leading date pattern is a valid regex")
});

/// Parses date text into a calendar date.
///
/// Accepts `YYYY-MM-DD` and any ISO-8601 datetime starting with it.
/// Returns `None` for empty, unparseable or impossible dates.
pub fn standardize_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let prefix = LEADING_ISO_DATE.find(trimmed)?;
    NaiveDate::parse_from_str(prefix.as_str(), "%Y-%m-%d").ok()
}

/// Formats a date as the canonical `YYYY-MM-DD` picker string.
///
/// Returns an empty string for `None`, so callers can bind the result
/// directly to form fields without special-casing unset dates.
pub fn format_date_for_picker(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}
