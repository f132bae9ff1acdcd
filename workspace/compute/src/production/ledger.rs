//! Daily production and breakage (quebra) accounting.
//!
//! The ledger stores produced/delivered/sold/leftover counts per date and
//! product, always in base units, and derives breakage on read: units
//! produced but neither sold nor returned as leftovers, valued at the
//! product's default price. Breakage is a production-side cost, so client
//! price overrides never apply here.

use std::collections::HashMap;

use chrono::NaiveDate;
use common::converters::{empelo_to_units, units_to_empelo};
use common::{DailyQuebraReport, QuebraLine};
use model::entities::product::{Product, ProductCatalog};
use model::entities::production_record::{DailyProductionRecord, ProductionPatch};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use crate::error::{ComputeError, Result};

/// Breakage in units for one record: `produced - (sold + leftovers)`.
///
/// May be negative when more was sold plus returned than produced
/// (over-reporting or a data-entry inversion). The value is surfaced as-is
/// for operator review, never clamped or rejected.
pub fn quebra_units(record: &DailyProductionRecord) -> i64 {
    record.produced as i64 - (record.sold as i64 + record.leftovers as i64)
}

/// Breakage value for one record, at the product's default price.
pub fn quebra_value(record: &DailyProductionRecord, product: &Product) -> Decimal {
    Decimal::from(quebra_units(record)) * product.price
}

/// Base units for a batch count entered in Empelo mode.
/// Only products flagged batch-capable accept batch input.
pub fn produced_units_from_batches(product: &Product, batches: u32) -> Result<u32> {
    if !product.supports_batch {
        return Err(ComputeError::Production(format!(
            "Product id={} does not support batch input",
            product.id
        )));
    }
    Ok(empelo_to_units(batches))
}

/// The produced count of a record as a displayed batch count.
/// Integer truncation; only valid for batch-capable products.
pub fn produced_in_batches(record: &DailyProductionRecord, product: &Product) -> Result<u32> {
    if !product.supports_batch {
        return Err(ComputeError::Production(format!(
            "Product id={} does not support batch display",
            product.id
        )));
    }
    Ok(units_to_empelo(record.produced))
}

/// In-memory ledger of production records keyed by `(date, product_id)`.
///
/// Records are created lazily on the first write for a key and never
/// deleted; subsequent writes merge partial updates field by field.
#[derive(Debug, Clone, Default)]
pub struct ProductionLedger {
    records: HashMap<(NaiveDate, i32), DailyProductionRecord>,
}

impl ProductionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a patch into the record for `(date, product_id)`, creating it
    /// with all-zero defaults if absent. Returns the updated record for the
    /// application to persist.
    #[instrument(skip(self, patch), fields(date = %date, product_id))]
    pub fn record_production(
        &mut self,
        date: NaiveDate,
        product_id: i32,
        patch: &ProductionPatch,
    ) -> &DailyProductionRecord {
        let record = self
            .records
            .entry((date, product_id))
            .or_insert_with(|| DailyProductionRecord::new(date, product_id));
        record.apply(patch);

        debug!(
            "Production record for product id={} on {}: produced={}, delivered={}, sold={}, leftovers={}",
            product_id, date, record.produced, record.delivered, record.sold, record.leftovers
        );
        record
    }

    pub fn get(&self, date: NaiveDate, product_id: i32) -> Option<&DailyProductionRecord> {
        self.records.get(&(date, product_id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Breakage for one date across every product recorded on it, with the
    /// day total. Lines with negative units aggregate as-is; a net-negative
    /// day signals under-reporting and must stay visible. Products missing
    /// from the catalog are skipped from valuation.
    #[instrument(skip(self, catalog), fields(date = %date))]
    pub fn daily_report(&self, date: NaiveDate, catalog: &ProductCatalog) -> DailyQuebraReport {
        let mut lines = Vec::new();

        for record in self.records.values().filter(|r| r.date == date) {
            let Some(product) = catalog.get(record.product_id) else {
                warn!(
                    "Product id={} missing from catalog, skipping its quebra valuation",
                    record.product_id
                );
                continue;
            };

            let units = quebra_units(record);
            if units < 0 {
                warn!(
                    "Negative quebra of {} units for product id={} on {}",
                    units, record.product_id, date
                );
            }
            lines.push(QuebraLine {
                product_id: record.product_id,
                units,
                value: quebra_value(record, product),
            });
        }

        // HashMap iteration order is arbitrary; report lines sorted by product
        lines.sort_by_key(|line| line.product_id);
        let total_value = lines.iter().map(|line| line.value).sum();

        DailyQuebraReport {
            date,
            lines,
            total_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn roll() -> Product {
        Product {
            id: 1,
            name: "French roll".to_string(),
            price: Decimal::new(30, 2),
            supports_batch: true,
        }
    }

    fn loaf() -> Product {
        Product {
            id: 2,
            name: "Sliced loaf".to_string(),
            price: Decimal::new(450, 2),
            supports_batch: false,
        }
    }

    #[test]
    fn test_quebra_derivation() {
        let mut ledger = ProductionLedger::new();
        let record = ledger.record_production(
            date(2024, 5, 6),
            1,
            &ProductionPatch {
                produced: Some(100),
                sold: Some(60),
                leftovers: Some(30),
                ..Default::default()
            },
        );

        assert_eq!(quebra_units(record), 10);
        assert_eq!(quebra_value(record, &roll()), Decimal::new(300, 2));
    }

    #[test]
    fn test_negative_quebra_is_not_clamped() {
        let mut ledger = ProductionLedger::new();
        let record = ledger.record_production(
            date(2024, 5, 6),
            1,
            &ProductionPatch {
                produced: Some(100),
                sold: Some(70),
                leftovers: Some(40),
                ..Default::default()
            },
        );

        assert_eq!(quebra_units(record), -10);
        assert_eq!(quebra_value(record, &roll()), Decimal::new(-300, 2));
    }

    #[test]
    fn test_partial_patch_leaves_other_fields_alone() {
        let mut ledger = ProductionLedger::new();
        ledger.record_production(
            date(2024, 5, 6),
            1,
            &ProductionPatch {
                produced: Some(100),
                delivered: Some(80),
                ..Default::default()
            },
        );

        // A later write for the same key only touches what it names
        let record = ledger.record_production(
            date(2024, 5, 6),
            1,
            &ProductionPatch {
                sold: Some(75),
                ..Default::default()
            },
        );

        assert_eq!(record.produced, 100);
        assert_eq!(record.delivered, 80);
        assert_eq!(record.sold, 75);
        assert_eq!(record.leftovers, 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_lazy_creation_defaults_to_zero() {
        let mut ledger = ProductionLedger::new();
        assert!(ledger.get(date(2024, 5, 6), 1).is_none());

        let record =
            ledger.record_production(date(2024, 5, 6), 1, &ProductionPatch::default());
        assert_eq!(record.produced, 0);
        assert_eq!(record.sold, 0);
    }

    #[test]
    fn test_batch_entry_round_trip() {
        let mut ledger = ProductionLedger::new();
        // 3 Empelo batches of a batch-capable product store 90 base units
        let units = produced_units_from_batches(&roll(), 3).unwrap();
        let record = ledger.record_production(
            date(2024, 5, 6),
            1,
            &ProductionPatch {
                produced: Some(units),
                ..Default::default()
            },
        );

        assert_eq!(record.produced, 90);
        assert_eq!(produced_in_batches(record, &roll()).unwrap(), 3);
    }

    #[test]
    fn test_batch_input_rejected_for_plain_product() {
        assert!(produced_units_from_batches(&loaf(), 3).is_err());
    }

    #[test]
    fn test_daily_report_aggregates_across_products() {
        let catalog: ProductCatalog = [roll(), loaf()].into_iter().collect();
        let mut ledger = ProductionLedger::new();
        let day = date(2024, 5, 6);

        // 10 broken rolls at 0.30
        ledger.record_production(
            day,
            1,
            &ProductionPatch {
                produced: Some(100),
                sold: Some(60),
                leftovers: Some(30),
                ..Default::default()
            },
        );
        // 2 loaves over-reported at 4.50
        ledger.record_production(
            day,
            2,
            &ProductionPatch {
                produced: Some(10),
                sold: Some(8),
                leftovers: Some(4),
                ..Default::default()
            },
        );
        // Another date must not leak into the report
        ledger.record_production(
            date(2024, 5, 7),
            1,
            &ProductionPatch {
                produced: Some(50),
                ..Default::default()
            },
        );

        let report = ledger.daily_report(day, &catalog);
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].units, 10);
        assert_eq!(report.lines[0].value, Decimal::new(300, 2));
        assert_eq!(report.lines[1].units, -2);
        assert_eq!(report.lines[1].value, Decimal::new(-900, 2));
        // 3.00 - 9.00: the negative line aggregates as-is
        assert_eq!(report.total_value, Decimal::new(-600, 2));
    }

    #[test]
    fn test_daily_report_skips_products_missing_from_catalog() {
        let catalog: ProductCatalog = [roll()].into_iter().collect();
        let mut ledger = ProductionLedger::new();
        let day = date(2024, 5, 6);

        ledger.record_production(
            day,
            99,
            &ProductionPatch {
                produced: Some(10),
                ..Default::default()
            },
        );

        let report = ledger.daily_report(day, &catalog);
        assert!(report.lines.is_empty());
        assert_eq!(report.total_value, Decimal::ZERO);
    }
}
