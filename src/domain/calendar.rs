//! Calendar walk over an inclusive date range.

use chrono::{Datelike, NaiveDate, Weekday};

/// Every calendar day from `start` to `end`, inclusive and ascending.
/// A reversed range yields nothing.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
