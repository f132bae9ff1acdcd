use common::DebtSummary;
use rust_decimal::Decimal;

use super::helpers::{monday_roll_client, roll_catalog, ymd};
use super::{AssertResult, TestScenario, TestScenarioBuilder};

/// Same plan as the weekly scenario, but one of the four Mondays is a
/// confirmed failed delivery. The skipped day leaves both the total and
/// the billable-day count; it is not billed as a zero-value day.
pub struct ScenarioSkippedDates {}

impl ScenarioSkippedDates {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioSkippedDates {
    fn get_scenario(&self) -> TestScenario {
        let mut client = monday_roll_client(2);
        client.skipped_dates.insert(ymd(2024, 5, 13));
        let catalog = roll_catalog();

        let assert_results: AssertResult = vec![(
            ymd(2024, 5, 1),
            ymd(2024, 5, 28),
            DebtSummary {
                total: Decimal::new(150, 2),
                days_count: 3,
                daily_value: Decimal::new(50, 2),
            },
        )];

        (client, catalog, assert_results)
    }
}
