//! This file serves as the root for all domain entity modules.
//! We define the data models for the bakery delivery operation here.
//! The entities are plain typed snapshots: the surrounding application owns
//! storage and hands copies of these records to the compute layer, which
//! returns values or deltas for the application to persist.

pub mod client;
pub mod product;
pub mod production_record;
pub mod schedule;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::client::{Client, PaymentFrequency};
    pub use super::product::{Product, ProductCatalog};
    pub use super::production_record::{DailyProductionRecord, ProductionPatch};
    pub use super::schedule::{DeliverySchedule, ScheduleChange, ScheduleItem, Weekday};
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::prelude::*;

    #[test]
    fn test_entity_integration() {
        // Create a small product catalog
        let mut catalog = ProductCatalog::new();
        catalog.insert(Product {
            id: 1,
            name: "French roll".to_string(),
            price: Decimal::new(25, 2), // 0.25
            supports_batch: true,
        });
        catalog.insert(Product {
            id: 2,
            name: "Sliced loaf".to_string(),
            price: Decimal::new(450, 2), // 4.50
            supports_batch: false,
        });

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().name, "French roll");
        assert!(catalog.get(99).is_none());

        // Build a weekly schedule: rolls on Monday and Thursday, a loaf on Saturday
        let mut schedule = DeliverySchedule::new();
        schedule.set_item(Weekday::Monday, 1, 20);
        schedule.set_item(Weekday::Thursday, 1, 10);
        schedule.set_item(Weekday::Saturday, 2, 2);

        assert_eq!(schedule.items_on(Weekday::Monday).len(), 1);
        assert!(schedule.items_on(Weekday::Sunday).is_empty());
        assert!(schedule.has_delivery_on(Weekday::Saturday));

        // Re-adding a product on the same weekday updates its quantity in place
        schedule.set_item(Weekday::Monday, 1, 30);
        assert_eq!(schedule.items_on(Weekday::Monday).len(), 1);
        assert_eq!(schedule.items_on(Weekday::Monday)[0].quantity, 30);

        // Create a client using the schedule
        let mut client = Client::new(7, "Bar do Ze", 3);
        client.schedule = schedule;
        client.custom_prices.insert(1, Decimal::new(10, 2));
        client
            .skipped_dates
            .insert(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());

        assert_eq!(client.driver_id, 3);
        assert_eq!(client.payment_frequency, PaymentFrequency::Monthly);
        assert!(client.last_payment_date.is_none());
        assert_eq!(client.current_balance, Decimal::ZERO);

        // Record a day of production for the rolls
        let mut record =
            DailyProductionRecord::new(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(), 1);
        record.apply(&ProductionPatch {
            produced: Some(100),
            sold: Some(60),
            leftovers: Some(30),
            ..Default::default()
        });

        assert_eq!(record.produced, 100);
        assert_eq!(record.delivered, 0);
        assert_eq!(record.sold, 60);
        assert_eq!(record.leftovers, 30);
    }

    #[test]
    fn test_client_snapshot_serde_round_trip() {
        let mut client = Client::new(1, "Padaria Central", 2);
        client.schedule.set_item(Weekday::Monday, 1, 2);
        client.schedule_history.push(ScheduleChange {
            effective_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            schedule: client.schedule.clone(),
        });
        client.custom_prices.insert(1, Decimal::ZERO);
        client
            .skipped_dates
            .insert(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        client.last_payment_date = Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        client.payment_frequency = PaymentFrequency::Custom(15);

        let json = serde_json::to_string(&client).expect("serialize client");
        let back: Client = serde_json::from_str(&json).expect("deserialize client");
        assert_eq!(back, client);

        // Dates travel in ISO form so the store's date strings compare correctly
        assert!(json.contains("2024-03-04"));
        // A custom price of exactly zero survives the round trip as an override
        assert_eq!(back.custom_prices.get(&1), Some(&Decimal::ZERO));
    }

    #[test]
    fn test_weekday_indexing() {
        // 0 = Sunday .. 6 = Saturday, matching conventional calendar numbering
        assert_eq!(Weekday::from_index(0), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_index(6), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_index(7), None);

        for weekday in Weekday::ALL {
            assert_eq!(Weekday::from_index(weekday.index()), Some(weekday));
        }

        // 2024-05-06 is a Monday
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(Weekday::for_date(date), Weekday::Monday);
    }
}
