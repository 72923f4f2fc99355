//! Selected date ranges.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::date::Date;

/// An inclusive span of days, as selected in a range picker.
///
/// The endpoints may be given in either order; they are stored with
/// `start <= end`. Serializes as a two-element array of ISO dates.
///
/// # Example
///
/// ```
/// use almanako::{Date, Range};
///
/// let a = Date::from_gregorian(2021, 12, 15).unwrap();
/// let b = Date::from_gregorian(2021, 12, 5).unwrap();
/// let range = Range::new(a, b);
///
/// assert_eq!(b, range.start());
/// assert_eq!(11, range.days());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "(Date, Date)", into = "(Date, Date)")]
pub struct Range {
    start: Date,
    end: Date,
}

impl Range {
    /// Creates a range between two dates, swapping them if `end` comes
    /// before `start`.
    pub fn new(start: Date, end: Date) -> Self {
        if end < start {
            debug!("range end {end} precedes start {start}, swapping");
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }
    /// A range covering the single day `date`.
    pub fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The earlier endpoint.
    pub fn start(&self) -> Date {
        self.start
    }
    /// The later endpoint.
    pub fn end(&self) -> Date {
        self.end
    }
    /// Number of days covered, counting both endpoints.
    pub fn days(&self) -> u32 {
        (self.end - self.start) as u32 + 1
    }

    /// Returns `true` if `date` lies within the range, endpoints included.
    pub fn contains(&self, date: Date) -> bool {
        (self.start..=self.end).contains(&date)
    }
    /// Returns `true` if `date` lies strictly between the endpoints.
    pub fn is_interior(&self, date: Date) -> bool {
        self.start < date && date < self.end
    }
    /// Returns `true` if the range shares at least one day with
    /// `first..=last`.
    pub fn overlaps(&self, first: Date, last: Date) -> bool {
        self.start <= last && first <= self.end
    }
}

impl From<(Date, Date)> for Range {
    fn from((start, end): (Date, Date)) -> Self {
        Self::new(start, end)
    }
}
impl From<Range> for (Date, Date) {
    fn from(range: Range) -> Self {
        (range.start, range.end)
    }
}
