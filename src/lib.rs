//! Padoca is the billing and production-accounting core of a bakery
//! delivery operation: drivers deliver a weekly per-client schedule of
//! products, clients are billed for past periods using the schedule
//! version that was actually in effect on each date, and daily production
//! is reconciled into breakage (quebra) figures.
//!
//! The surrounding application owns storage, identity and presentation; it
//! hands this core snapshots of its records and persists whatever the core
//! returns. The workspace splits accordingly:
//!
//! - [`model`]: the entity snapshots (products, clients, schedules,
//!   production records);
//! - [`compute`]: the engine with pricing resolution, schedule-history
//!   resolution, period debt calculation, payment bookkeeping and the
//!   production ledger;
//! - [`common`]: the result shapes handed back across the boundary, plus
//!   batch/currency display converters.

pub use common;
pub use compute;
pub use model;
