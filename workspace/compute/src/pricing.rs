//! Unit-price resolution for billing.
//!
//! A client may carry per-product price overrides; everything else falls
//! back to the product's default price. Overrides of exactly zero are
//! legitimate (free deliveries), so "absent" and "zero" are distinguished
//! by map membership, never by truthiness of the value.

use model::entities::client::Client;
use model::entities::product::{Product, ProductCatalog};
use model::entities::schedule::ScheduleItem;
use rust_decimal::Decimal;
use tracing::trace;

/// Returns the unit price that applies for this client and product:
/// the client's custom override if one exists, else the product default.
pub fn price_for(client: &Client, product: &Product) -> Decimal {
    match client.custom_prices.get(&product.id) {
        Some(custom) => {
            trace!(
                "Using custom price {} for product id={} on client id={}",
                custom, product.id, client.id
            );
            *custom
        }
        None => product.price,
    }
}

/// Value of one schedule item for this client: quantity times the resolved
/// unit price. An item whose product is no longer in the catalog is worth
/// zero, so billing over historical schedules survives product removal.
pub fn item_value(client: &Client, catalog: &ProductCatalog, item: &ScheduleItem) -> Decimal {
    match catalog.get(item.product_id) {
        Some(product) => Decimal::from(item.quantity) * price_for(client, product),
        None => {
            trace!(
                "Product id={} missing from catalog, item contributes zero for client id={}",
                item.product_id, client.id
            );
            Decimal::ZERO
        }
    }
}
