//! Grid layout options.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::range::Range;
use crate::weekday::Weekday;

/// Everything besides the month itself that affects a [`Grid`](crate::Grid).
///
/// Every field has a default, so a partial configuration deserializes
/// cleanly:
///
/// ```
/// use almanako::{GridOptions, Weekday};
///
/// let options: GridOptions =
///     serde_json::from_str(r#"{ "first_day_of_week": "sunday" }"#).unwrap();
///
/// assert_eq!(Weekday::Sunday, options.first_day_of_week);
/// assert_eq!(None, options.range);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Weekday of the leftmost column.
    pub first_day_of_week: Weekday,
    /// Highlighted range, if any.
    pub range: Option<Range>,
    /// Selected single date, if any.
    pub value: Option<Date>,
    /// Weekdays flagged as weekend.
    pub weekend_days: Vec<Weekday>,
    /// Whether day cells should refuse focus on pointer down. Carried
    /// through to the grid for the view layer; the layout ignores it.
    pub prevent_focus: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Monday,
            range: None,
            value: None,
            weekend_days: vec![Weekday::Saturday, Weekday::Sunday],
            prevent_focus: false,
        }
    }
}

impl GridOptions {
    /// Same as [`GridOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weekday of the leftmost column.
    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    /// Sets the highlighted range; endpoints may come in either order.
    pub fn with_range(mut self, range: impl Into<Range>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Sets the selected single date.
    pub fn with_value(mut self, value: Date) -> Self {
        self.value = Some(value);
        self
    }

    /// Replaces the weekend days.
    pub fn with_weekend_days(mut self, weekend_days: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekend_days = weekend_days.into_iter().collect();
        self
    }

    /// Sets the focus flag passed through to the grid.
    pub fn with_prevent_focus(mut self, prevent_focus: bool) -> Self {
        self.prevent_focus = prevent_focus;
        self
    }

    /// Returns `true` if `day` is one of the configured weekend days.
    pub fn is_weekend(&self, day: Weekday) -> bool {
        self.weekend_days.contains(&day)
    }
}
