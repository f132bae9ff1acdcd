//! Common transport-layer types shared between the compute layer and the
//! surrounding application. These structs are the boundary contracts of the
//! billing core: the application hands in snapshots, the compute layer hands
//! back these result shapes for the application to persist or display.

pub mod converters;

mod production;
mod statistics;
mod timeseries;

pub use production::{DailyQuebraReport, QuebraLine};
pub use statistics::TimePeriod;
pub use timeseries::{DateRange, DebtPoint, DebtTimeseries};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a period debt calculation.
///
/// `days_count` counts billable days only: a day with no scheduled delivery,
/// or whose date was confirmed skipped, appears in neither the total nor the
/// count. `daily_value` is `total / days_count`, or zero when no day billed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    /// Amount owed over the period.
    pub total: Decimal,
    /// Number of days that actually billed.
    pub days_count: u32,
    /// Average value of a billable day.
    pub daily_value: Decimal,
}

impl DebtSummary {
    /// The zero result used for empty iterations (e.g. an inverted range).
    pub fn empty() -> Self {
        Self::default()
    }
}

/// How a payment was settled. Categorical only; no computational meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Other,
}

/// Record of a payment reconciliation, returned to the application for
/// persistence alongside the updated client snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub client_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub date: NaiveDate,
}
