//! Calendar-independant date, with the Gregorian arithmetic needed to lay
//! out month grids.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::month::{MAX_YEAR, MIN_YEAR};
use crate::weekday::Weekday;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
/// Serializes as an ISO 8601 string (`"2021-12-05"`).
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    ///
    /// Any `u32` is accepted, but Gregorian conversion (and so formatting)
    /// is only supported within [`MAX_YEAR`], see [`Date::gregorian`].
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. Days past the end of the month roll over into the
    /// following month.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Date;
    ///
    /// let date = Date::from_gregorian(2021, 12, 1).unwrap();
    /// assert_eq!(2459550, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Panics
    ///
    /// Results are defined up to the end of [`MAX_YEAR`]. Panics if the JDN
    /// is `2**31` or more; in debug builds, JDNs above `536_870_911`
    /// already overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::Date;
    ///
    /// let date = Date::from_jdn(2459550);
    /// assert_eq!((2021, 12, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i32::try_from(self.jdn).expect("jdn >= 2**31 not supported");
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }
    /// Day of the month in Gregorian calendar, `1..=31`.
    pub fn day(&self) -> u32 {
        self.gregorian().2 as u32
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }
    /// Returns the day of week of the date.
    ///
    /// # Example
    ///
    /// ```
    /// use almanako::{Date, Weekday};
    ///
    /// let date = Date::from_gregorian(2021, 2, 1).unwrap();
    /// assert_eq!(Weekday::Monday, date.weekday());
    /// ```
    pub fn weekday(&self) -> Weekday {
        Weekday::ALL[(self.jdn % 7) as usize]
    }

    /// Adds `days` (possibly negative), returning `None` if the result falls
    /// before the supported range.
    pub fn checked_add(self, days: i32) -> Option<Self> {
        self.jdn.checked_add_signed(days).map(Self::from_jdn)
    }

    /// Returns the ISO-8601 week number (with the year of that week) of the
    /// date, in `(year, week)` format.
    ///
    /// ```
    /// use almanako::Date;
    ///
    /// let date = Date::from_gregorian(2022, 1, 2).unwrap();
    /// assert_eq!((2021, 52), date.year_week_gregorian()); // 2021-W52-7
    /// ```
    pub fn year_week_gregorian(&self) -> (i32, i32) {
        let (y, m, d) = self.gregorian();
        let y_type = YearType::from_gregorian(y);
        let y_is_leap = y_type.is_leap() as i32;
        let dn = ordinal_day_number(m, d, y_type);
        let dow = self.day_of_week();
        let dow1 = (dow - dn).rem_euclid(7) + 1;
        if dow1 > 4 && dow1 - 1 + dn <= 7 {
            use std::cmp::Ordering::*;
            return match dow1.cmp(&6) {
                Less => (y - 1, 53),
                Equal => (y - 1, 52 + YearType::from_gregorian(y - 1).is_leap() as i32),
                Greater => (y - 1, 52),
            };
        }
        let dow_last = (dow1 + 364 + y_is_leap - 1).rem_euclid(7) + 1;
        if dow_last < 4 && 365 + y_is_leap + 1 - dn <= dow_last {
            return (y + 1, 1);
        }

        (y, (dow1 + dn - 2) / 7 + (dow1 <= 4) as i32)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<i32> for Date {
    type Output = Date;
    fn sub(self, rhs: i32) -> Self::Output {
        self + rhs.wrapping_neg()
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Formats the date in ISO 8601 format. Years before 1 BC (astronomical
/// year `0`) get a leading `-`.
///
/// ```
/// use almanako::Date;
///
/// let date = Date::from_gregorian(2021, 12, 5).unwrap();
/// assert_eq!("2021-12-05", date.to_string());
/// let date = Date::from_gregorian(-1, 3, 1).unwrap();
/// assert_eq!("-0001-03-01", date.to_string());
/// ```
///
/// # Panics
///
/// Panics where [`Date::gregorian`] does.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.gregorian();
        let sign = if y < 0 { "-" } else { "" };
        write!(f, "{}{:04}-{:02}-{:02}", sign, y.unsigned_abs(), m, d)
    }
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`, or `-YYYY-MM-DD` for
/// negative years).
///
/// Unlike [`Date::from_gregorian`], days past the end of the month are
/// rejected.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::ParseDate(s.to_owned());
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut it = rest.splitn(3, '-');
        let mut field = |min: usize, max: usize| {
            it.next()
                .filter(|v| (min..=max).contains(&v.len()))
                .filter(|v| v.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|v| v.parse::<i32>().ok())
                .ok_or_else(err)
        };
        let (y, m, d) = (field(4, usize::MAX)?, field(2, 2)?, field(2, 2)?);
        let y = if negative { -y } else { y };
        if !(MIN_YEAR..=MAX_YEAR).contains(&y) || !(1..=12).contains(&m) {
            return Err(err());
        }
        let len = YearType::from_gregorian(y).days_in_month(m as u32) as i32;
        if !(1..=len).contains(&d) {
            return Err(err());
        }
        Date::from_gregorian(y, m, d).ok_or_else(err)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
impl From<Date> for String {
    fn from(date: Date) -> String {
        date.to_string()
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in `month` (`1..=12`) of a year of this type.
    ///
    /// # Panics
    ///
    /// Panics if `month` is not in `1..=12`.
    pub fn days_in_month(&self, month: u32) -> u32 {
        match month {
            2 => 28 + self.is_leap() as u32,
            4 | 6 | 9 | 11 => 30,
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            _ => panic!("month {} not in 1..=12", month),
        }
    }
}

fn ordinal_day_number(month: i32, day: i32, year_type: YearType) -> i32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 2, 1).unwrap();
        assert_eq!(2459247, date.jdn());
        assert_eq!(None, Date::from_gregorian(-4800, 1, 1));
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        assert_eq!(
            Date::from_gregorian(2022, 1, 1),
            Date::from_gregorian(2021, 12, 32)
        );
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459247);
        assert_eq!((2021, 2, 1), date.gregorian());
        assert_eq!(1, date.day());
    }

    #[test]
    fn weekdays() {
        use Weekday::*;
        for ((y, m, d), std) in [
            ((1970, 1, 1), Thursday),
            ((2021, 2, 1), Monday),
            ((2021, 12, 1), Wednesday),
            ((2021, 12, 31), Friday),
            ((2021, 8, 1), Sunday),
            ((2021, 5, 1), Saturday),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(std, date.weekday(), "{date}");
            assert_eq!(std.iso(), date.day_of_week(), "{date}");
        }
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2021, 12, 1).unwrap();
        assert_eq!("2021-11-29", (date - 2).to_string());
        assert_eq!("2022-01-02", (date + 32).to_string());
        assert_eq!(32, (date + 32) - date);
        assert_eq!(Some(date + 1), date.checked_add(1));
        assert_eq!(None, Date::from_jdn(3).checked_add(-4));
    }

    #[test]
    fn to_year_week() {
        for ((y, m, d), expected) in [
            ((1980, 12, 28), (1980, 52)),
            ((1980, 12, 31), (1981, 1)),
            ((1981, 1, 1), (1981, 1)),
            ((1981, 1, 5), (1981, 2)),
            ((1981, 12, 31), (1981, 53)),
            ((1982, 1, 1), (1981, 53)),
            ((2021, 12, 2), (2021, 48)),
            ((2021, 12, 30), (2021, 52)),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(expected, date.year_week_gregorian(), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn iso_format_and_parse() {
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!("2021-09-08", date.to_string());
        assert_eq!(Ok(date), "2021-09-08".parse());
        assert_eq!(Ok(date), Date::try_from(String::from(date)));
    }

    #[test]
    fn negative_years_round_trip() {
        for ((y, m, d), std) in [
            ((-1, 1, 1), "-0001-01-01"),
            ((0, 2, 29), "0000-02-29"),
            ((MIN_YEAR, 1, 1), "-4712-01-01"),
            ((MIN_YEAR, 12, 31), "-4712-12-31"),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!((y, m, d), date.gregorian());
            assert_eq!(std, date.to_string());
            assert_eq!(Ok(date), std.parse(), "{std}");

            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(date, serde_json::from_str::<Date>(&json).unwrap());
        }
    }

    #[test]
    #[should_panic]
    fn gregorian_panics_past_supported_range() {
        Date::from_jdn(u32::MAX).gregorian();
    }

    #[test]
    fn parse_rejects_malformed() {
        for s in [
            "",
            "2021",
            "2021-13-01",
            "2021-02-29",
            "2021-1-01",
            "21-01-01",
            "2021-01-xx",
            "2000000000-01-01",
            "2021-012-05",
            "2021-12-005",
            "--2021-12-05",
            "-4713-12-31",
        ] {
            assert_eq!(Err(Error::ParseDate(s.into())), s.parse::<Date>(), "{s:?}");
        }
        assert!("2020-02-29".parse::<Date>().is_ok());
    }

    #[test]
    fn month_lengths() {
        use YearType::*;
        assert_eq!(28, Common.days_in_month(2));
        assert_eq!(29, Leap.days_in_month(2));
        assert_eq!(30, Common.days_in_month(11));
        assert_eq!(31, Leap.days_in_month(12));
        assert_eq!(Leap, YearType::from_gregorian(2000));
        assert_eq!(Common, YearType::from_gregorian(2100));
    }
}

#[cfg(test)]
mod tests_priv {
    use super::*;

    #[test]
    fn priv_ordinal_day_number() {
        use YearType::*;
        assert_eq!(1, ordinal_day_number(1, 1, Common));
        assert_eq!(256, ordinal_day_number(9, 13, Common));
        assert_eq!(366, ordinal_day_number(12, 31, Leap));
    }
}
