//! Birthday reminder labels.
//!
//! # Responsibility
//! - Compute the next occurrence of a year-agnostic month/day birthday.
//! - Produce a short chip label only when the birthday is at most a week out.
//!
//! # Invariants
//! - Day granularity throughout; time-of-day never affects the result.
//! - Feb 29 birthdays resolve to Mar 1 in non-leap years.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Next calendar occurrence of `(month, day)` on or after `today`.
fn next_occurrence(month: u32, day: u32, today: NaiveDate) -> NaiveDate {
    let in_year = |year: i32| {
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(today)
    };

    let this_year = in_year(today.year());
    if this_year >= today {
        this_year
    } else {
        in_year(today.year() + 1)
    }
}

/// Days from `today` until the next occurrence of the stored birthday.
///
/// The year component of `birthday` is ignored; only month/day matter.
pub fn days_until_birthday(birthday: DateTime<Utc>, today: NaiveDate) -> i64 {
    let date = birthday.date_naive();
    (next_occurrence(date.month(), date.day(), today) - today).num_days()
}

/// Reminder chip label for an upcoming birthday.
///
/// Returns `Some` only for birthdays 0-7 days out; anything further away
/// shows no reminder at all.
pub fn birthday_label(birthday: DateTime<Utc>, today: NaiveDate) -> Option<String> {
    match days_until_birthday(birthday, today) {
        0 => Some("Today!".to_string()),
        1 => Some("Tomorrow".to_string()),
        days @ 2..=6 => Some(format!("{days} days")),
        7 => Some("1 Week".to_string()),
        _ => None,
    }
}
