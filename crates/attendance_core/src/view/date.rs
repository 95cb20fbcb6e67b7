//! Dashboard date label.

use chrono::{Local, NaiveDate};

/// Full en-US long date, e.g. `Thursday, October 15, 2026`.
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Formats `date` as weekday, month name, day and year.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
