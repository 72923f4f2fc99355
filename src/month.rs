//! Gregorian calendar months.

use std::fmt;

use crate::date::{Date, YearType};
use crate::error::{Error, Result};

/// Earliest year a [`Month`] may belong to.
pub const MIN_YEAR: i32 = -4712;
/// Latest year a [`Month`] may belong to.
pub const MAX_YEAR: i32 = 999_999;

/// A month of the Gregorian calendar.
///
/// Only years in [`MIN_YEAR`]`..=`[`MAX_YEAR`] are accepted, so that every
/// day shown in the month's grid, including the padding of neighbouring
/// months, is a representable [`Date`].
///
/// # Example
///
/// ```
/// use almanako::Month;
///
/// let month = Month::new(2021, 2).unwrap();
///
/// assert_eq!(28, month.days());
/// assert_eq!("2021-02-28", month.last_day().to_string());
/// assert_eq!("March 2021", month.next().unwrap().to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Month {
    year: i32,
    month: u32,
    first: Date,
}

impl Month {
    /// Creates the month `month` (`1..=12`) of `year`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange(year));
        }
        let first =
            Date::from_gregorian(year, month as i32, 1).ok_or(Error::YearOutOfRange(year))?;
        Ok(Self { year, month, first })
    }
    /// Creates a month from a zero-based month index, `0` being January.
    ///
    /// Indices outside `0..12` roll over into neighbouring years.
    ///
    /// ```
    /// use almanako::Month;
    ///
    /// assert_eq!(Month::new(2021, 12), Month::from_index(2021, 11));
    /// assert_eq!(Month::new(2022, 1), Month::from_index(2021, 12));
    /// assert_eq!(Month::new(2020, 12), Month::from_index(2021, -1));
    /// ```
    pub fn from_index(year: i32, index: i32) -> Result<Self> {
        let year = year
            .checked_add(index.div_euclid(12))
            .ok_or(Error::YearOutOfRange(year))?;
        Self::new(year, index.rem_euclid(12) as u32 + 1)
    }
    /// The month containing `date`.
    pub fn of(date: Date) -> Result<Self> {
        let (y, m, _) = date.gregorian();
        Self::new(y, m as u32)
    }

    /// Astronomical year number.
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Month number, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }
    /// Zero-based month index, `0..12`.
    pub fn index(&self) -> u32 {
        self.month - 1
    }
    /// English name of the month.
    pub fn name(&self) -> &'static str {
        crate::fmt::month(self.month)
    }

    /// Number of days in the month.
    pub fn days(&self) -> u32 {
        YearType::from_gregorian(self.year).days_in_month(self.month)
    }
    /// The 1st of the month.
    pub fn first_day(&self) -> Date {
        self.first
    }
    /// The last day of the month.
    pub fn last_day(&self) -> Date {
        self.first + (self.days() as i32 - 1)
    }
    /// Returns `true` if `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        (self.first_day()..=self.last_day()).contains(&date)
    }

    /// The month before this one.
    pub fn prev(&self) -> Result<Self> {
        Self::from_index(self.year, self.index() as i32 - 1)
    }
    /// The month after this one.
    pub fn next(&self) -> Result<Self> {
        Self::from_index(self.year, self.index() as i32 + 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn lengths() {
        let dataset = [
            ((2021, 2), 28),
            ((2020, 2), 29),
            ((1900, 2), 28),
            ((2000, 2), 29),
            ((2021, 4), 30),
            ((2021, 12), 31),
        ];
        for ((y, m), std) in dataset {
            assert_eq!(std, Month::new(y, m).unwrap().days(), "{y:04}-{m:02}");
        }
    }

    #[test]
    fn bounds() {
        let month = Month::new(2021, 12).unwrap();
        assert_eq!(ymd(2021, 12, 1), month.first_day());
        assert_eq!(ymd(2021, 12, 31), month.last_day());
        assert!(month.contains(ymd(2021, 12, 15)));
        assert!(!month.contains(ymd(2021, 11, 30)));
        assert!(!month.contains(ymd(2022, 1, 1)));
    }

    #[test]
    fn navigation() {
        let month = Month::new(2021, 12).unwrap();
        assert_eq!(Month::new(2022, 1), month.next());
        assert_eq!(Month::new(2021, 11), month.prev());
        assert_eq!(Month::new(2020, 12), Month::new(2021, 1).unwrap().prev());
        assert_eq!(Ok(month), Month::of(ymd(2021, 12, 25)));
    }

    #[test]
    fn index_rollover() {
        assert_eq!(Month::new(2023, 2), Month::from_index(2021, 25));
        assert_eq!(Month::new(2019, 11), Month::from_index(2021, -14));
        assert_eq!(11, Month::new(2021, 12).unwrap().index());
    }

    #[test]
    fn invalid() {
        assert_eq!(Err(Error::InvalidMonth(0)), Month::new(2021, 0));
        assert_eq!(Err(Error::InvalidMonth(13)), Month::new(2021, 13));
        assert_eq!(Err(Error::YearOutOfRange(-4713)), Month::new(-4713, 12));
        assert_eq!(Err(Error::YearOutOfRange(1_000_000)), Month::new(1_000_000, 1));
        assert_eq!(
            Err(Error::YearOutOfRange(MAX_YEAR + 1)),
            Month::new(MAX_YEAR, 12).unwrap().next()
        );
        assert!(Month::new(MIN_YEAR, 1).unwrap().prev().is_err());
    }

    #[test]
    fn extreme_months_have_room_for_padding() {
        let first = Month::new(MIN_YEAR, 1).unwrap().first_day();
        assert!(first.checked_add(-6).is_some());
        let last = Month::new(MAX_YEAR, 12).unwrap().last_day();
        assert!(i32::try_from(last.jdn() + 6).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!("December 2021", Month::new(2021, 12).unwrap().to_string());
    }
}
