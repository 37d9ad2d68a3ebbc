//! Calendar helpers for day, week and month windows.
//!
//! All timestamps are naive UTC, matching the database columns.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::server::error::Error;

/// Current naive UTC timestamp.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Half-open `[start, end)` window covering all of `date`.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = start_of_day(date);

    (start, start + Duration::days(1))
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> Result<NaiveDate, Error> {
    date.with_day(1)
        .ok_or_else(|| Error::ParseError(format!("Failed to find first day of month for {}", date)))
}

/// `YYYY-MM` label used to group revenue by month.
pub fn month_key(timestamp: NaiveDateTime) -> String {
    format!("{:04}-{:02}", timestamp.year(), timestamp.month())
}
