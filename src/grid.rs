//! Month grids: the day cells of one month laid out in weeks.
//!
//! A grid always starts on the configured first day of the week and ends
//! on the day before it, so the leading and trailing rows are padded with
//! days of the neighbouring months. Depending on the month's length and
//! alignment a grid has 4, 5 or 6 rows.

use log::trace;

use crate::date::Date;
use crate::month::Month;
use crate::options::GridOptions;
use crate::range::Range;
use crate::weekday::Weekday;

/// One day of a month grid and its classification.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DayCell {
    /// The day this cell shows.
    pub date: Date,
    /// `false` for padding days of the previous or next month.
    pub in_current_month: bool,
    /// Strictly between the endpoints of the range.
    pub in_range: bool,
    /// Equal to the start of the range.
    pub is_range_start: bool,
    /// Equal to the end of the range.
    pub is_range_end: bool,
    /// Equal to the configured single value.
    pub is_selected: bool,
    /// Falls on one of the configured weekend days.
    pub is_weekend: bool,
}

impl DayCell {
    /// Returns `true` if the cell should be drawn as part of the range,
    /// endpoints included.
    pub fn is_highlighted(&self) -> bool {
        self.in_range || self.is_range_start || self.is_range_end
    }
    /// Weekday of the cell's date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// A row of seven consecutive day cells.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Week {
    days: [DayCell; 7],
}

impl Week {
    /// The seven cells, in column order.
    pub fn days(&self) -> &[DayCell; 7] {
        &self.days
    }
    /// Iterates the cells in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.days.iter()
    }
    /// ISO-8601 `(year, week)` of the row, taken from its Thursday.
    ///
    /// Rows that do not start on Monday straddle two ISO weeks; the
    /// Thursday decides in every case.
    pub fn iso_week(&self) -> (i32, i32) {
        let col = Weekday::Thursday.days_since(self.days[0].weekday());
        self.days[col as usize].date.year_week_gregorian()
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The layout of one month.
///
/// # Example
///
/// ```
/// use almanako::{Grid, GridOptions, Month, Weekday};
///
/// let month = Month::new(2021, 2).unwrap();
///
/// let grid = Grid::new(month, &GridOptions::default());
/// assert_eq!(4, grid.rows());
///
/// let options = GridOptions::new().with_first_day_of_week(Weekday::Sunday);
/// let grid = Grid::new(month, &options);
/// assert_eq!(5, grid.rows());
/// assert_eq!("2021-01-31", grid.first_date().to_string());
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    month: Month,
    first_day_of_week: Weekday,
    prevent_focus: bool,
    weeks: Vec<Week>,
}

impl Grid {
    /// Lays out `month` according to `options`.
    pub fn new(month: Month, options: &GridOptions) -> Self {
        let first = month.first_day();
        let offset = first.weekday().days_since(options.first_day_of_week);
        let rows = (offset as u32 + month.days()).div_ceil(7) as usize;
        let start = first - offset;

        let weeks = (0..rows)
            .map(|row| Week {
                days: std::array::from_fn(|col| {
                    classify(start + (row * 7 + col) as i32, month, options)
                }),
            })
            .collect();

        trace!(
            "laid out {month} from {}: offset {offset}, {rows} rows",
            options.first_day_of_week
        );
        Self {
            month,
            first_day_of_week: options.first_day_of_week,
            prevent_focus: options.prevent_focus,
            weeks,
        }
    }

    /// The displayed month.
    pub fn month(&self) -> Month {
        self.month
    }
    /// Weekday of the leftmost column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }
    /// Passed through from [`GridOptions::prevent_focus`].
    pub fn prevent_focus(&self) -> bool {
        self.prevent_focus
    }

    /// The rows, top to bottom.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }
    /// Number of rows, always `4..=6`.
    pub fn rows(&self) -> usize {
        self.weeks.len()
    }
    /// The column headers, beginning with the first day of the week.
    pub fn weekdays(&self) -> [Weekday; 7] {
        self.first_day_of_week.week_from()
    }
    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flat_map(Week::iter)
    }

    /// Date of the top-left cell.
    pub fn first_date(&self) -> Date {
        self.weeks[0].days[0].date
    }
    /// Date of the bottom-right cell.
    pub fn last_date(&self) -> Date {
        self.first_date() + (self.rows() * 7 - 1) as i32
    }

    /// `(row, column)` of the cell showing `date`, if it is displayed.
    pub fn position(&self, date: Date) -> Option<(usize, usize)> {
        let off = usize::try_from(date - self.first_date()).ok()?;
        (off < self.rows() * 7).then_some((off / 7, off % 7))
    }
    /// The cell showing `date`, if it is displayed.
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        let (row, col) = self.position(date)?;
        Some(&self.weeks[row].days[col])
    }
}

/// Lays out `month` starting from `first_day_of_week`, highlighting `range`.
///
/// Shorthand for [`Grid::new`] with default weekend days and no selected
/// value.
///
/// # Example
///
/// ```
/// use almanako::{Date, Month, Range, Weekday};
///
/// let month = Month::new(2021, 12).unwrap();
/// let range = Range::new(
///     Date::from_gregorian(2021, 12, 5).unwrap(),
///     Date::from_gregorian(2021, 12, 15).unwrap(),
/// );
/// let grid = almanako::build(month, Weekday::Monday, Some(range), false);
///
/// assert_eq!(9, grid.cells().filter(|c| c.in_range).count());
/// assert_eq!(11, grid.cells().filter(|c| c.is_highlighted()).count());
/// ```
pub fn build(
    month: Month,
    first_day_of_week: Weekday,
    range: Option<Range>,
    prevent_focus: bool,
) -> Grid {
    let options = GridOptions {
        first_day_of_week,
        range,
        prevent_focus,
        ..GridOptions::default()
    };
    Grid::new(month, &options)
}

fn classify(date: Date, month: Month, options: &GridOptions) -> DayCell {
    let (in_range, is_range_start, is_range_end) = match options.range {
        Some(r) => (r.is_interior(date), date == r.start(), date == r.end()),
        None => (false, false, false),
    };
    DayCell {
        date,
        in_current_month: month.contains(date),
        in_range,
        is_range_start,
        is_range_end,
        is_selected: options.value == Some(date),
        is_weekend: options.is_weekend(date.weekday()),
    }
}
