//! Scenario-based test support.
//!
//! A scenario builder assembles a client snapshot, a product catalog and
//! the expected debt summaries for a set of date ranges; the runner
//! computes each range and asserts the result. Scenarios are plain values
//! (the core computes over snapshots, so no fixture store is involved) and
//! are reused by the workspace-level integration tests.

pub mod helpers;
pub mod scenario_custom_price;
pub mod scenario_schedule_change;
pub mod scenario_skipped_dates;
pub mod scenario_weekly;

pub use scenario_custom_price::ScenarioCustomPrice;
pub use scenario_schedule_change::ScenarioScheduleChange;
pub use scenario_skipped_dates::ScenarioSkippedDates;
pub use scenario_weekly::ScenarioWeekly;

use chrono::NaiveDate;
use common::DebtSummary;
use model::entities::client::Client;
use model::entities::product::ProductCatalog;

use crate::billing::debt::calculate_period_debt;

/// Expected results of a test scenario,
/// in the schema (date_from, date_to, expected summary).
pub type AssertResult = Vec<(NaiveDate, NaiveDate, DebtSummary)>;

/// Prepared test scenario.
pub type TestScenario = (Client, ProductCatalog, AssertResult);

/// Trait for building test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

/// Runs every expected range of a scenario through the calculator and
/// asserts the summaries match.
pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) {
    let (client, catalog, assert_results) = builder.get_scenario();

    for (date_from, date_to, expected) in &assert_results {
        let computed = calculate_period_debt(&client, &catalog, *date_from, *date_to);
        assert_eq!(
            &computed, expected,
            "period {} to {} for client id={}",
            date_from, date_to, client.id
        );
    }
}
