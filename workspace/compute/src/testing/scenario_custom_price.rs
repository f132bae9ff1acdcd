use common::DebtSummary;
use rust_decimal::Decimal;

use super::helpers::{monday_roll_client, roll_catalog, ymd};
use super::{AssertResult, TestScenario, TestScenarioBuilder};

/// Same plan as the weekly scenario, with a per-client price override of
/// 0.10 on the 0.25 roll. Every billed Monday uses the override.
pub struct ScenarioCustomPrice {}

impl ScenarioCustomPrice {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioCustomPrice {
    fn get_scenario(&self) -> TestScenario {
        let mut client = monday_roll_client(3);
        client.custom_prices.insert(1, Decimal::new(10, 2));
        let catalog = roll_catalog();

        let assert_results: AssertResult = vec![(
            ymd(2024, 5, 1),
            ymd(2024, 5, 28),
            DebtSummary {
                total: Decimal::new(80, 2),
                days_count: 4,
                daily_value: Decimal::new(20, 2),
            },
        )];

        (client, catalog, assert_results)
    }
}
