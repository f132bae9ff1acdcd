use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeseries::DateRange;

/// A billing period selection: a whole year, a calendar month, or an
/// explicit date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    Year(i32),
    Month(i32, u32),
    DateRange(DateRange),
}

impl TimePeriod {
    pub fn year(year: i32) -> Self {
        TimePeriod::Year(year)
    }

    pub fn month(year: i32, month: u32) -> Self {
        TimePeriod::Month(year, month)
    }

    pub fn date_range(start: NaiveDate, end: NaiveDate) -> Self {
        TimePeriod::DateRange(DateRange::new(start, end))
    }

    /// Resolves the period to its inclusive date bounds.
    /// Returns `None` for an unrepresentable selection (e.g. month 13).
    pub fn bounds(&self) -> Option<DateRange> {
        match *self {
            TimePeriod::Year(year) => {
                let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
                let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
                Some(DateRange::new(start, end))
            }
            TimePeriod::Month(year, month) => {
                let start = NaiveDate::from_ymd_opt(year, month, 1)?;
                // The day before the first of the next month is the last day
                // of this one
                let (next_year, next_month) = if month == 12 {
                    (year + 1, 1)
                } else {
                    (year, month + 1)
                };
                let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
                Some(DateRange::new(start, end))
            }
            TimePeriod::DateRange(range) => Some(range),
        }
    }
}
