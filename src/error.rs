//! Error types.

use thiserror::Error;

/// Errors raised while constructing months, dates and weekdays.
///
/// Building a [`Grid`](crate::Grid) never fails: everything that could go
/// wrong is rejected when its inputs are created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("month {0} not in 1..=12")]
    InvalidMonth(u32),

    #[error("year {0} out of supported range")]
    YearOutOfRange(i32),

    #[error("invalid ISO date: {0:?}")]
    ParseDate(String),

    #[error("unknown weekday: {0:?}")]
    ParseWeekday(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
