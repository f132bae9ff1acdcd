pub mod billing;
pub mod error;
pub mod pricing;
pub mod production;
pub mod testing;

pub use billing::debt::{calculate_period_debt, debt_timeseries};
pub use billing::payment::{refresh_balance, register_payment, toggle_skipped_date};
pub use production::ledger::ProductionLedger;

#[cfg(test)]
mod tests {
    use testing::{
        ScenarioCustomPrice, ScenarioScheduleChange, ScenarioSkippedDates, ScenarioWeekly,
        run_and_assert_scenario,
    };

    use super::*;

    /// The baseline weekly billing scenario: four Mondays of two 0.25 rolls
    /// plus an inverted (empty) range.
    #[test]
    fn test_scenario_weekly() {
        run_and_assert_scenario(&ScenarioWeekly::new());
    }

    /// One of the four Mondays is a confirmed failed delivery and leaves
    /// both the total and the billable-day count.
    #[test]
    fn test_scenario_skipped_dates() {
        run_and_assert_scenario(&ScenarioSkippedDates::new());
    }

    /// A per-client override of 0.10 replaces the 0.25 default on every
    /// billed day.
    #[test]
    fn test_scenario_custom_price() {
        run_and_assert_scenario(&ScenarioCustomPrice::new());
    }

    /// A schedule change two weeks into the range splits the billing
    /// between the old and the new plan.
    #[test]
    fn test_scenario_schedule_change() {
        run_and_assert_scenario(&ScenarioScheduleChange::new());
    }
}
