use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The seven fixed weekday identifiers used as delivery-schedule keys.
/// Indexing follows conventional calendar numbering: 0 = Sunday .. 6 = Saturday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in calendar order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn from_index(index: u32) -> Option<Weekday> {
        Weekday::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// The weekday a calendar date falls on.
    pub fn for_date(date: NaiveDate) -> Weekday {
        date.weekday().into()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

/// One line of a weekday's delivery list: a product and how many units of it
/// go out that day. Quantities are positive integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub product_id: i32,
    pub quantity: u32,
}

/// A client's weekly delivery plan: one item list per weekday.
/// An empty list means no delivery on that weekday.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliverySchedule {
    #[serde(default)]
    pub sunday: Vec<ScheduleItem>,
    #[serde(default)]
    pub monday: Vec<ScheduleItem>,
    #[serde(default)]
    pub tuesday: Vec<ScheduleItem>,
    #[serde(default)]
    pub wednesday: Vec<ScheduleItem>,
    #[serde(default)]
    pub thursday: Vec<ScheduleItem>,
    #[serde(default)]
    pub friday: Vec<ScheduleItem>,
    #[serde(default)]
    pub saturday: Vec<ScheduleItem>,
}

impl DeliverySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items_on(&self, weekday: Weekday) -> &[ScheduleItem] {
        match weekday {
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
        }
    }

    fn items_on_mut(&mut self, weekday: Weekday) -> &mut Vec<ScheduleItem> {
        match weekday {
            Weekday::Sunday => &mut self.sunday,
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
        }
    }

    /// Adds a product to a weekday's list, or updates its quantity if the
    /// product is already listed. Product ids are unique within a weekday.
    pub fn set_item(&mut self, weekday: Weekday, product_id: i32, quantity: u32) {
        let items = self.items_on_mut(weekday);
        match items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = quantity,
            None => items.push(ScheduleItem {
                product_id,
                quantity,
            }),
        }
    }

    /// Removes a product from a weekday's list. Returns whether it was present.
    pub fn remove_item(&mut self, weekday: Weekday, product_id: i32) -> bool {
        let items = self.items_on_mut(weekday);
        let before = items.len();
        items.retain(|item| item.product_id != product_id);
        items.len() != before
    }

    pub fn has_delivery_on(&self, weekday: Weekday) -> bool {
        !self.items_on(weekday).is_empty()
    }

    /// True when no weekday has any delivery at all.
    pub fn is_empty(&self) -> bool {
        Weekday::ALL
            .iter()
            .all(|weekday| self.items_on(*weekday).is_empty())
    }
}

/// A dated snapshot of a client's weekly plan: `schedule` became the active
/// plan on `effective_date`. The store appends one of these whenever an
/// operator edits a schedule, so past periods can be billed with the plan
/// that actually applied at the time.
///
/// History is handed over as-is; callers must not rely on insertion order
/// (the resolver orders entries itself).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleChange {
    pub effective_date: NaiveDate,
    pub schedule: DeliverySchedule,
}
