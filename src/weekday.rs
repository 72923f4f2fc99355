//! Days of the week.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A day of the week, used both for a date's weekday and for the column a
/// grid starts with.
///
/// Variants are declared Monday first, following ISO-8601. Serializes as a
/// lowercase name (`"sunday"`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Creates a `Weekday` from its ISO-8601 number, `1..=7` for Monday
    /// through Sunday.
    pub fn from_iso(num: i32) -> Option<Self> {
        (1..=7)
            .contains(&num)
            .then(|| Self::ALL[(num - 1) as usize])
    }
    /// Returns the ISO-8601 number of the weekday.
    pub fn iso(self) -> i32 {
        self as i32 + 1
    }

    /// The following day.
    pub fn succ(self) -> Self {
        Self::ALL[(self as usize + 1) % 7]
    }
    /// The preceding day.
    pub fn pred(self) -> Self {
        Self::ALL[(self as usize + 6) % 7]
    }

    /// Number of days from the most recent `start` up to `self`, `0..=6`.
    ///
    /// This is the column of `self` in a week laid out from `start`.
    ///
    /// ```
    /// use almanako::Weekday::*;
    ///
    /// assert_eq!(0, Monday.days_since(Monday));
    /// assert_eq!(2, Wednesday.days_since(Monday));
    /// assert_eq!(6, Saturday.days_since(Sunday));
    /// ```
    pub fn days_since(self, start: Weekday) -> i32 {
        (self.iso() - start.iso()).rem_euclid(7)
    }

    /// The seven weekdays in display order, beginning with `self`.
    pub fn week_from(self) -> [Weekday; 7] {
        std::array::from_fn(|i| Self::ALL[(self as usize + i) % 7])
    }

    /// English name, e.g. `"Sunday"`.
    pub fn name(self) -> &'static str {
        crate::fmt::WEEKDAY_NAMES[self as usize]
    }
    /// Two-letter English abbreviation used for grid headers, e.g. `"Su"`.
    pub fn short_name(self) -> &'static str {
        crate::fmt::weekday_short(self)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a weekday name, case-insensitively. Unambiguous prefixes of at
/// least two letters (`"mo"`, `"sun"`) are accepted.
impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower.len() >= 2 {
            for day in Self::ALL {
                if day.name().to_ascii_lowercase().starts_with(&lower) {
                    return Ok(day);
                }
            }
        }
        Err(Error::ParseWeekday(s.to_owned()))
    }
}
