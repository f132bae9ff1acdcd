//! Period debt calculation.
//!
//! Walks a calendar date range day by day, resolves the schedule version
//! that applied on each date, values that weekday's delivery items with the
//! client's prices and accumulates the amount owed. Skipped dates and
//! weekdays without deliveries bill nothing and do not count as billable
//! days. The walk is a pure projection over the supplied snapshots;
//! persisting the result is the caller's explicit action.

use chrono::NaiveDate;
use common::{DebtPoint, DebtSummary, DebtTimeseries};
use model::entities::client::Client;
use model::entities::product::ProductCatalog;
use model::entities::schedule::Weekday;
use rust_decimal::Decimal;
use tracing::{debug, instrument, trace};

use super::schedule::{items_on_weekday, schedule_on_date};
use crate::pricing;

/// Value of one calendar day for this client, or `None` when the day does
/// not bill (no scheduled delivery on that weekday, or the date is skipped).
///
/// A billable day whose products have all been removed from the catalog is
/// still billable: it contributes zero value but does count as a day.
fn billable_day_value(client: &Client, catalog: &ProductCatalog, date: NaiveDate) -> Option<Decimal> {
    let schedule = schedule_on_date(client, date);
    let items = items_on_weekday(schedule, Weekday::for_date(date));

    if items.is_empty() {
        return None;
    }
    if client.skipped_dates.contains(&date) {
        trace!("Date {} is a confirmed skipped delivery for client id={}", date, client.id);
        return None;
    }

    let day_value = items
        .iter()
        .map(|item| pricing::item_value(client, catalog, item))
        .sum();
    Some(day_value)
}

/// Computes the amount a client owes for every calendar date from
/// `date_from` to `date_to` inclusive.
///
/// An inverted range (`date_from` after `date_to`) is not an error: the
/// iteration is empty and the result is all zero. `daily_value` is the
/// average over billable days only, zero when no day billed.
#[instrument(skip(client, catalog), fields(client_id = client.id, date_from = %date_from, date_to = %date_to))]
pub fn calculate_period_debt(
    client: &Client,
    catalog: &ProductCatalog,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> DebtSummary {
    let mut total = Decimal::ZERO;
    let mut days_count: u32 = 0;

    let mut date = date_from;
    while date <= date_to {
        if let Some(day_value) = billable_day_value(client, catalog, date) {
            total += day_value;
            days_count += 1;
        }

        // Move to next date
        date = date.succ_opt().unwrap();
    }

    // Guard the average against periods where no day billed
    let daily_value = if days_count > 0 {
        total / Decimal::from(days_count)
    } else {
        Decimal::ZERO
    };

    debug!(
        "Period debt for client id={}: total={}, days_count={}, daily_value={}",
        client.id, total, days_count, daily_value
    );

    DebtSummary {
        total,
        days_count,
        daily_value,
    }
}

/// Day-by-day billing breakdown over the same walk as
/// [`calculate_period_debt`], one point per calendar date of the range.
/// Non-billable days appear with a zero amount and `billable = false` so
/// charts can show the full calendar.
#[instrument(skip(client, catalog), fields(client_id = client.id, date_from = %date_from, date_to = %date_to))]
pub fn debt_timeseries(
    client: &Client,
    catalog: &ProductCatalog,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> DebtTimeseries {
    let mut points = Vec::new();

    let mut date = date_from;
    while date <= date_to {
        let point = match billable_day_value(client, catalog, date) {
            Some(amount) => DebtPoint {
                date,
                amount,
                billable: true,
            },
            None => DebtPoint {
                date,
                amount: Decimal::ZERO,
                billable: false,
            },
        };
        points.push(point);

        date = date.succ_opt().unwrap();
    }

    DebtTimeseries {
        client_id: client.id,
        points,
    }
}
