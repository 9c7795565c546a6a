use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of an order placed for a single product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Identifier of the ordered product.
    pub product_id: i32,
    /// Number of units ordered.
    pub quantity: i32,
    /// Timestamp assigned by the store when the order was inserted.
    pub order_date: NaiveDateTime,
}

impl Order {
    /// Human-readable label such as `Order of 3 x Widget`.
    pub fn label(&self, product: &Product) -> String {
        format!("Order of {} x {}", self.quantity, product.name)
    }
}

/// Payload required to insert a new order.
///
/// The order date is not part of the payload: the store assigns it on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Identifier of the ordered product.
    pub product_id: i32,
    /// Number of units ordered.
    pub quantity: i32,
}

impl NewOrder {
    /// Build a new order payload.
    pub fn new(product_id: i32, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Replacement data applied when updating an existing order.
///
/// There is no way to change the order date through an update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrder {
    /// Identifier of the ordered product.
    pub product_id: i32,
    /// Number of units ordered.
    pub quantity: i32,
}

impl UpdateOrder {
    /// Build an order update payload.
    pub fn new(product_id: i32, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Optional product identifier filter.
    pub product_id: Option<i32>,
}

impl OrderListQuery {
    /// Construct a query that targets all orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to orders of a single product.
    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::price_from_cents;
    use chrono::NaiveDate;

    #[test]
    fn label_mentions_quantity_and_product_name() {
        let order_date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid timestamp");
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            price: price_from_cents(999),
            description: "A widget".to_string(),
            stock: 10,
        };
        let order = Order {
            id: 2,
            product_id: 1,
            quantity: 3,
            order_date,
        };

        assert_eq!(order.label(&product), "Order of 3 x Widget");
    }
}
