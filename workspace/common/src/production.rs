use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breakage (quebra) for one product on one date.
///
/// `units` may be negative when sold + leftovers exceed what was produced;
/// the value is surfaced as-is for operator review, never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuebraLine {
    pub product_id: i32,
    pub units: i64,
    /// `units` valued at the product's default price (breakage is a
    /// production-side cost, so client price overrides never apply).
    pub value: Decimal,
}

/// Breakage for one date across every product with a production record.
/// A net-negative `total_value` is a meaningful under-reporting signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuebraReport {
    pub date: NaiveDate,
    pub lines: Vec<QuebraLine>,
    pub total_value: Decimal,
}
