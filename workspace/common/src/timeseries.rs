use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of calendar days in the range, inclusive. Zero when inverted.
    pub fn num_days(&self) -> u64 {
        if self.start > self.end {
            return 0;
        }
        (self.end - self.start).num_days() as u64 + 1
    }
}

/// One day of a client's billing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPoint {
    pub date: NaiveDate,
    /// Value billed on this date; zero when the day did not bill.
    pub amount: Decimal,
    /// Whether the day counted towards the period's billable days.
    /// False for weekdays with no scheduled delivery and for skipped dates.
    pub billable: bool,
}

/// Day-by-day billing breakdown over a period, for the application's charts
/// and statements. Points cover every calendar day of the requested range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtTimeseries {
    pub client_id: i32,
    pub points: Vec<DebtPoint>,
}

impl DebtTimeseries {
    /// Sum of the billable points, i.e. the period total.
    pub fn total(&self) -> Decimal {
        self.points
            .iter()
            .filter(|point| point.billable)
            .map(|point| point.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_days_inclusive() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        );
        // Leap February: 26..29 plus 1..3 of March
        assert_eq!(range.num_days(), 7);
    }

    #[test]
    fn test_inverted_range_has_no_days() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
        );
        assert_eq!(range.num_days(), 0);
    }
}
