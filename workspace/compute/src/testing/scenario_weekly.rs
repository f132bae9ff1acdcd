use common::DebtSummary;
use rust_decimal::Decimal;

use super::helpers::{monday_roll_client, roll_catalog, ymd};
use super::{AssertResult, TestScenario, TestScenarioBuilder};

/// The baseline billing scenario: two 0.25 rolls every Monday, no history,
/// no skipped dates, no custom prices. A four-week span containing exactly
/// four Mondays bills 4 × 2 × 0.25.
pub struct ScenarioWeekly {}

impl ScenarioWeekly {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioWeekly {
    fn get_scenario(&self) -> TestScenario {
        let client = monday_roll_client(1);
        let catalog = roll_catalog();

        // May 2024: Mondays on the 6th, 13th, 20th and 27th
        let assert_results: AssertResult = vec![
            (
                ymd(2024, 5, 1),
                ymd(2024, 5, 28),
                DebtSummary {
                    total: Decimal::new(200, 2),
                    days_count: 4,
                    daily_value: Decimal::new(50, 2),
                },
            ),
            // An inverted range iterates nothing and is not an error
            (ymd(2024, 5, 28), ymd(2024, 5, 1), DebtSummary::empty()),
        ];

        (client, catalog, assert_results)
    }
}
