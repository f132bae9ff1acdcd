use chrono::{Datelike, NaiveDate};

/// Returns the number of days in the given month using chrono.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // First day of the following month, then step back one day
    let next_month_year = year + (month / 12) as i32;
    let next_month = (month % 12) + 1;

    let first_day_next_month = NaiveDate::from_ymd_opt(next_month_year, next_month, 1).unwrap();
    let last_day_current_month = first_day_next_month.pred_opt().unwrap();

    last_day_current_month.day()
}

pub mod debt;
pub mod payment;
pub mod schedule;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
