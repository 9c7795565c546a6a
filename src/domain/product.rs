use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of fractional digits kept for product prices.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Unit price with exactly two fractional digits.
    pub price: Decimal,
    /// Longer description shown to users.
    pub description: String,
    /// Units available in stock. Negative values are stored as-is.
    pub stock: i32,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to users.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Units available in stock.
    pub stock: i32,
}

impl NewProduct {
    /// Build a new product payload with the supplied details.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }
}

/// Replacement data applied when updating an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    /// Updated product name.
    pub name: String,
    /// Updated description.
    pub description: String,
    /// Updated unit price.
    pub price: Decimal,
    /// Updated stock counter.
    pub stock: i32,
}

impl UpdateProduct {
    /// Build a product update payload with the supplied values.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional search; every whitespace-separated term must match the name or description.
    pub search: Option<String>,
}

impl ProductListQuery {
    /// Construct a query that targets all products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Convert a price into the integer number of cents kept in storage.
///
/// Values with more than two fractional digits are rounded.
pub fn price_to_cents(price: Decimal) -> i64 {
    let mut scaled = price;
    scaled.rescale(PRICE_DECIMAL_PLACES);
    scaled.mantissa() as i64
}

/// Build a two-decimal price from stored cents.
pub fn price_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, PRICE_DECIMAL_PLACES)
}
