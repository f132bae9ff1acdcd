use chrono::NaiveDate;
use rust_decimal::Decimal;

use model::entities::client::Client;
use model::entities::product::{Product, ProductCatalog};
use model::entities::schedule::{DeliverySchedule, Weekday};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn new_product(id: i32, name: &str, price: Decimal) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        supports_batch: false,
    }
}

/// A catalog holding a single 0.25 roll with product id 1.
pub fn roll_catalog() -> ProductCatalog {
    [new_product(1, "French roll", Decimal::new(25, 2))]
        .into_iter()
        .collect()
}

/// A schedule delivering `quantity` units of product 1 every Monday.
pub fn monday_schedule(quantity: u32) -> DeliverySchedule {
    let mut schedule = DeliverySchedule::new();
    schedule.set_item(Weekday::Monday, 1, quantity);
    schedule
}

/// A client delivering two rolls every Monday, no history, no skips,
/// no custom prices. The shared starting point of the billing scenarios.
pub fn monday_roll_client(id: i32) -> Client {
    let mut client = Client::new(id, format!("Test client {}", id), 1);
    client.schedule = monday_schedule(2);
    client
}
