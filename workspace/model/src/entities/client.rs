use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::schedule::{DeliverySchedule, ScheduleChange};

/// How often a client is expected to settle up. A billing-cadence hint for
/// the application; the debt calculator itself never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Daily,
    Weekly,
    Monthly,
    /// Every N days.
    Custom(u32),
}

/// A delivery client, as snapshotted by the store.
/// Corresponds to the application's client records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i32,
    pub name: String,
    /// The driver responsible for this client's deliveries.
    pub driver_id: i32,
    /// Optional route the client is assigned to.
    pub route_id: Option<i32>,
    /// The current (live) weekly delivery plan.
    pub schedule: DeliverySchedule,
    /// Dated snapshots of earlier plans, in no guaranteed order.
    pub schedule_history: Vec<ScheduleChange>,
    /// Calendar dates on which a scheduled delivery is confirmed not to have
    /// happened. Excluded from billing entirely.
    pub skipped_dates: BTreeSet<NaiveDate>,
    /// Per-client price overrides (`product_id -> unit price`). An absent
    /// entry falls back to the product's default price; an entry of exactly
    /// zero is a valid override (free deliveries are legitimate).
    pub custom_prices: HashMap<i32, Decimal>,
    /// Date of the last payment reconciliation, if any.
    pub last_payment_date: Option<NaiveDate>,
    /// Cached owed amount. Only explicit bookkeeping actions mutate this;
    /// any edit to the schedule, history, skipped dates or custom prices
    /// leaves it stale until the next recompute.
    pub current_balance: Decimal,
    pub payment_frequency: PaymentFrequency,
}

impl Client {
    /// Creates a client with an empty schedule, no history and a zero balance.
    pub fn new(id: i32, name: impl Into<String>, driver_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            driver_id,
            route_id: None,
            schedule: DeliverySchedule::new(),
            schedule_history: Vec::new(),
            skipped_dates: BTreeSet::new(),
            custom_prices: HashMap::new(),
            last_payment_date: None,
            current_balance: Decimal::ZERO,
            payment_frequency: PaymentFrequency::Monthly,
        }
    }
}
