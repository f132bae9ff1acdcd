use common::DebtSummary;
use model::entities::schedule::ScheduleChange;
use rust_decimal::Decimal;

use super::helpers::{monday_roll_client, monday_schedule, roll_catalog, ymd};
use super::{AssertResult, TestScenario, TestScenarioBuilder};

/// A schedule change lands two weeks into the billed range: the Monday
/// delivery grows from 2 rolls to 5 effective May 15. The first two
/// Mondays bill on the old plan, the remaining two on the new one, so the
/// period total is the sum of both sub-periods rather than either plan
/// applied uniformly.
pub struct ScenarioScheduleChange {}

impl ScenarioScheduleChange {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioScheduleChange {
    fn get_scenario(&self) -> TestScenario {
        let mut client = monday_roll_client(4);
        client.schedule = monday_schedule(5);
        // History arrives unsorted on purpose; the resolver orders it
        client.schedule_history = vec![
            ScheduleChange {
                effective_date: ymd(2024, 5, 15),
                schedule: monday_schedule(5),
            },
            ScheduleChange {
                effective_date: ymd(2024, 1, 1),
                schedule: monday_schedule(2),
            },
        ];
        let catalog = roll_catalog();

        // Mondays May 6 and 13 at 2 × 0.25, May 20 and 27 at 5 × 0.25
        let assert_results: AssertResult = vec![(
            ymd(2024, 5, 1),
            ymd(2024, 5, 28),
            DebtSummary {
                total: Decimal::new(350, 2),
                days_count: 4,
                daily_value: Decimal::new(875, 3),
            },
        )];

        (client, catalog, assert_results)
    }
}
