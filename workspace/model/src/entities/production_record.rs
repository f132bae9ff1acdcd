use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-date, per-product production counts, always in base units.
///
/// Records are created lazily on first write and never deleted; later writes
/// for the same `(date, product_id)` key overwrite individual fields only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProductionRecord {
    pub date: NaiveDate,
    pub product_id: i32,
    pub produced: u32,
    pub delivered: u32,
    pub sold: u32,
    pub leftovers: u32,
}

impl DailyProductionRecord {
    /// A fresh all-zero record for the given key.
    pub fn new(date: NaiveDate, product_id: i32) -> Self {
        Self {
            date,
            product_id,
            produced: 0,
            delivered: 0,
            sold: 0,
            leftovers: 0,
        }
    }

    /// Merges a partial update into this record. Fields the patch leaves as
    /// `None` keep their current value.
    pub fn apply(&mut self, patch: &ProductionPatch) {
        if let Some(produced) = patch.produced {
            self.produced = produced;
        }
        if let Some(delivered) = patch.delivered {
            self.delivered = delivered;
        }
        if let Some(sold) = patch.sold {
            self.sold = sold;
        }
        if let Some(leftovers) = patch.leftovers {
            self.leftovers = leftovers;
        }
    }
}

/// Partial update for a production record, in base units.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPatch {
    pub produced: Option<u32>,
    pub delivered: Option<u32>,
    pub sold: Option<u32>,
    pub leftovers: Option<u32>,
}

impl ProductionPatch {
    pub fn is_empty(&self) -> bool {
        self.produced.is_none()
            && self.delivered.is_none()
            && self.sold.is_none()
            && self.leftovers.is_none()
    }
}
