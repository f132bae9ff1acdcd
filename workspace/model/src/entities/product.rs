use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product the bakery produces and delivers.
/// Corresponds to the store's product records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Default unit price, a non-negative decimal currency value.
    /// Admin price edits never reach past calculations: the compute layer
    /// only ever sees the catalog snapshot it was handed.
    pub price: Decimal,
    /// Whether the product accepts batch ("Empelo") input of 30 units per
    /// batch. The batch toggle is an input/display convention; counts are
    /// always stored as base units.
    pub supports_batch: bool,
}

/// The product catalog snapshot handed in by the store (`id -> Product`).
///
/// Lookups on an id that is no longer in the catalog return `None`; billing
/// treats such items as worth zero rather than failing, so historical
/// schedule entries survive product removal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: HashMap<i32, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a product, keyed by its id.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    pub fn get(&self, id: i32) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates over the catalog in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}
