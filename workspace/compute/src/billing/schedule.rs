//! Resolution of the delivery schedule that applied on a given date.
//!
//! Clients carry their current plan plus a history of dated snapshots of
//! earlier plans. Billing a past period must use the plan that was actually
//! in effect at the time, so the resolver walks the history rather than the
//! live schedule.

use chrono::NaiveDate;
use model::entities::client::Client;
use model::entities::schedule::{DeliverySchedule, ScheduleChange, ScheduleItem, Weekday};
use tracing::trace;

/// Returns the delivery schedule effective on `date`.
///
/// With an empty history the live schedule applies unconditionally. With a
/// non-empty history, the entry with the latest `effective_date` at or
/// before `date` applies. When `date` precedes every recorded change, the
/// *oldest* entry on record applies (not the live schedule), because the
/// live schedule's edits postdate all history entries, so the earliest
/// known configuration is the best available evidence for those dates.
///
/// That asymmetry (empty history resolves to the live schedule, too-early
/// date resolves to the oldest history entry) is a deliberate policy carried
/// over from the operation's established billing behavior; confirm with the
/// product owner before changing it.
pub fn schedule_on_date<'a>(client: &'a Client, date: NaiveDate) -> &'a DeliverySchedule {
    if client.schedule_history.is_empty() {
        return &client.schedule;
    }

    // History arrives in no guaranteed order; sort a view of it ourselves,
    // newest change first
    let mut changes: Vec<&ScheduleChange> = client.schedule_history.iter().collect();
    changes.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));

    for change in &changes {
        if change.effective_date <= date {
            trace!(
                "Resolved schedule effective {} for client id={} on {}",
                change.effective_date, client.id, date
            );
            return &change.schedule;
        }
    }

    // The date precedes every recorded change; fall back to the oldest entry
    let oldest = changes[changes.len() - 1];
    trace!(
        "Date {} precedes all schedule changes for client id={}, using oldest entry ({})",
        date, client.id, oldest.effective_date
    );
    &oldest.schedule
}

/// Returns the item list a schedule delivers on the given weekday, or an
/// empty slice when that weekday has no delivery.
pub fn items_on_weekday(schedule: &DeliverySchedule, weekday: Weekday) -> &[ScheduleItem] {
    schedule.items_on(weekday)
}
