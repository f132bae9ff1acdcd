//! Period-level billing summaries.
//!
//! Convenience entry points over the debt calculator for the periods the
//! application actually asks about: a calendar year, a calendar month, or
//! the period outstanding since the client last settled up. Also derives
//! the next payment due date from the client's billing cadence.

use chrono::{Datelike, Duration, NaiveDate};
use common::{DebtSummary, TimePeriod};
use model::entities::client::{Client, PaymentFrequency};
use model::entities::product::ProductCatalog;
use tracing::instrument;

use super::days_in_month;
use super::debt::calculate_period_debt;
use crate::error::{ComputeError, Result};

/// Computes the debt summary for an arbitrary period selection.
pub fn debt_for_period(
    client: &Client,
    catalog: &ProductCatalog,
    period: &TimePeriod,
) -> Result<DebtSummary> {
    let bounds = period
        .bounds()
        .ok_or_else(|| ComputeError::Date(format!("Unrepresentable period: {:?}", period)))?;
    Ok(calculate_period_debt(client, catalog, bounds.start, bounds.end))
}

/// Computes the debt summary for the specified year.
#[instrument(skip(client, catalog))]
pub fn debt_in_year(client: &Client, catalog: &ProductCatalog, year: i32) -> Result<DebtSummary> {
    debt_for_period(client, catalog, &TimePeriod::year(year))
}

/// Computes the debt summary for the specified month.
#[instrument(skip(client, catalog))]
pub fn debt_in_month(
    client: &Client,
    catalog: &ProductCatalog,
    year: i32,
    month: u32,
) -> Result<DebtSummary> {
    debt_for_period(client, catalog, &TimePeriod::month(year, month))
}

/// Computes the debt outstanding up to `today`.
///
/// The period starts the day after the last payment reconciliation. For a
/// client who has never settled up it starts at the oldest recorded
/// schedule change (the earliest evidence of a billing relationship), and
/// with no history either, at the first day of `today`'s month.
#[instrument(skip(client, catalog), fields(client_id = client.id, today = %today))]
pub fn outstanding_debt(
    client: &Client,
    catalog: &ProductCatalog,
    today: NaiveDate,
) -> DebtSummary {
    let start = match client.last_payment_date {
        Some(paid) => paid.succ_opt().unwrap(),
        None => client
            .schedule_history
            .iter()
            .map(|change| change.effective_date)
            .min()
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap()),
    };

    calculate_period_debt(client, catalog, start, today)
}

/// The next date a payment falls due after `from`, per the client's
/// billing cadence. Month steps clamp to the target month's length, so a
/// monthly cadence anchored on the 31st lands on the 28th/29th in February.
pub fn next_payment_due(client: &Client, from: NaiveDate) -> NaiveDate {
    match client.payment_frequency {
        PaymentFrequency::Daily => from.succ_opt().unwrap(),
        PaymentFrequency::Weekly => from + Duration::days(7),
        PaymentFrequency::Monthly => {
            // Add one month
            let year = from.year() + (from.month() / 12) as i32;
            let month = (from.month() % 12) + 1;
            let day = std::cmp::min(from.day(), days_in_month(year, month));
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        }
        PaymentFrequency::Custom(days) => from + Duration::days(days as i64),
    }
}
