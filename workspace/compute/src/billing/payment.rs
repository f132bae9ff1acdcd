//! Payment reconciliation and balance bookkeeping.
//!
//! These are the only mutating operations of the billing core. Each takes
//! the client snapshot by mutable reference and returns what the
//! application needs to persist; none of them touches the schedule history
//! or the skipped-date set.

use chrono::NaiveDate;
use common::{DebtSummary, PaymentMethod, PaymentReceipt};
use model::entities::client::Client;
use model::entities::product::ProductCatalog;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use super::debt::calculate_period_debt;

/// Registers a payment: stamps the reconciliation date and resets the
/// cached balance to zero. The receipt is returned for the application's
/// bookkeeping; schedule history and skipped dates are left untouched, so
/// past periods remain recomputable.
#[instrument(skip(client), fields(client_id = client.id, amount = %amount, date = %date))]
pub fn register_payment(
    client: &mut Client,
    amount: Decimal,
    method: PaymentMethod,
    date: NaiveDate,
) -> PaymentReceipt {
    info!(
        "Registering payment of {} ({:?}) for client id={} on {}",
        amount, method, client.id, date
    );

    client.last_payment_date = Some(date);
    client.current_balance = Decimal::ZERO;

    PaymentReceipt {
        client_id: client.id,
        amount,
        method,
        date,
    }
}

/// Flips a date's membership in the client's skipped-delivery set and
/// returns whether the date is now skipped. The cached balance is NOT
/// recomputed here; callers re-run the calculator (or use
/// [`refresh_balance`]) to reflect the change.
pub fn toggle_skipped_date(client: &mut Client, date: NaiveDate) -> bool {
    if client.skipped_dates.remove(&date) {
        info!("Unmarked skipped delivery on {} for client id={}", date, client.id);
        false
    } else {
        client.skipped_dates.insert(date);
        info!("Marked skipped delivery on {} for client id={}", date, client.id);
        true
    }
}

/// Recomputes the period debt and stores the total into the client's cached
/// balance in one step. The single entry point for keeping `current_balance`
/// in sync with the snapshot, so manual edits and calculator runs cannot
/// drift apart.
#[instrument(skip(client, catalog), fields(client_id = client.id, date_from = %date_from, date_to = %date_to))]
pub fn refresh_balance(
    client: &mut Client,
    catalog: &ProductCatalog,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> DebtSummary {
    let summary = calculate_period_debt(client, catalog, date_from, date_to);
    client.current_balance = summary.total;

    info!(
        "Refreshed balance for client id={}: {} over {} billable days",
        client.id, summary.total, summary.days_count
    );
    summary
}
