//! English names for months and weekdays.

use crate::weekday::Weekday;

/// Month names, `[0]` is January.
pub const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Monday first.
pub const WEEKDAY_NAMES: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Name of month `m`.
///
/// # Example
///
/// ```
/// use almanako::fmt;
///
/// assert_eq!("December", fmt::month(12));
/// ```
///
/// # Panics
///
/// Panics if `m` is not in `1..=12`.
pub fn month(m: u32) -> &'static str {
    match m {
        1..=12 => MONTH_NAMES[m as usize - 1],
        _ => panic!("month {} not in 1..=12", m),
    }
}

/// First two letters of the weekday name, as shown above grid columns.
///
/// ```
/// use almanako::{fmt, Weekday};
///
/// assert_eq!("Sa", fmt::weekday_short(Weekday::Saturday));
/// ```
pub fn weekday_short(day: Weekday) -> &'static str {
    &WEEKDAY_NAMES[day as usize][..2]
}
