//! Converter functions for the boundaries of the compute layer.
//!
//! Two concerns live here: the Empelo batch/unit conversion used when
//! high-volume staple products are entered in batches instead of base
//! units, and display formatting of decimal amounts with an ISO currency
//! code. Both are input/display transforms; the compute layer itself only
//! ever sees base units and plain decimals.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Units per Empelo batch.
pub const EMPELO_BATCH_SIZE: u32 = 30;

/// Converts a batch count entered in Empelo mode to base units.
pub fn empelo_to_units(batches: u32) -> u32 {
    batches * EMPELO_BATCH_SIZE
}

/// Converts a base-unit count back to a displayed batch count.
/// Integer truncation: a partial batch does not show.
pub fn units_to_empelo(units: u32) -> u32 {
    units / EMPELO_BATCH_SIZE
}

/// Formats an amount for display with the given ISO 4217 currency code.
///
/// Display only; all arithmetic stays in `Decimal`. Rounding to the
/// currency's exponent happens here, at the presentation boundary.
pub fn format_amount(amount: Decimal, currency_code: &str) -> Result<String, String> {
    let currency = iso::find(currency_code)
        .ok_or_else(|| format!("Unknown currency code: {}", currency_code))?;
    Ok(Money::from_decimal(amount, currency).to_string())
}
