//! Utilities for laying out a Gregorian calendar month as a grid of day
//! cells, the way a date picker displays it.
//!
//! A [`Grid`] is built from a [`Month`] and [`GridOptions`]. Rows always
//! start on the configured first day of the week, so the first and last
//! rows are padded with days of the neighbouring months. Each [`DayCell`]
//! records whether it belongs to the displayed month and how it relates to
//! the selected [`Range`], if any.
//!
//! # Examples
//!
//! Basic layout:
//!
//! ```
//! use almanako::{Grid, GridOptions, Month, Weekday};
//!
//! let month = Month::new(2021, 12).unwrap();
//! let grid = Grid::new(month, &GridOptions::default());
//!
//! assert_eq!(5, grid.rows());
//! assert_eq!(Weekday::Monday, grid.weekdays()[0]);
//! assert_eq!("2021-11-29", grid.first_date().to_string());
//! ```
//!
//! Range highlighting, with a range running past the end of the month:
//!
//! ```
//! use almanako::{Date, Grid, GridOptions, Month};
//!
//! let month = Month::new(2021, 12).unwrap();
//! let options = GridOptions::new().with_range((
//!     "2021-12-25".parse::<Date>().unwrap(),
//!     "2022-01-15".parse::<Date>().unwrap(),
//! ));
//! let grid = Grid::new(month, &options);
//!
//! assert_eq!(1, grid.cells().filter(|c| c.is_range_start).count());
//! assert_eq!(0, grid.cells().filter(|c| c.is_range_end).count());
//! assert_eq!(8, grid.cells().filter(|c| c.in_range).count());
//! ```

pub mod date;
pub mod error;
pub mod fmt;
pub mod grid;
pub mod month;
pub mod options;
pub mod range;
pub mod weekday;

pub use date::{Date, YearType};
pub use error::{Error, Result};
pub use grid::{DayCell, Grid, Week, build};
pub use month::Month;
pub use options::GridOptions;
pub use range::Range;
pub use weekday::Weekday;
