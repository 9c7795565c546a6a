use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Extended free-form details attached to exactly one product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductDetail {
    /// Unique identifier of the detail record.
    pub id: i32,
    /// Identifier of the product the details belong to. Unique across records.
    pub product_id: i32,
    /// Free-form details text.
    pub details: String,
}

impl ProductDetail {
    /// Human-readable label such as `Details of Widget`.
    pub fn label(&self, product: &Product) -> String {
        format!("Details of {}", product.name)
    }
}

/// Payload required to insert product details.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductDetail {
    pub product_id: i32,
    pub details: String,
}

impl NewProductDetail {
    pub fn new(product_id: i32, details: impl Into<String>) -> Self {
        Self {
            product_id,
            details: details.into(),
        }
    }
}

/// Replacement data applied when updating product details.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductDetail {
    pub product_id: i32,
    pub details: String,
}

impl UpdateProductDetail {
    pub fn new(product_id: i32, details: impl Into<String>) -> Self {
        Self {
            product_id,
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::price_from_cents;

    #[test]
    fn label_mentions_product_name() {
        let product = Product {
            id: 4,
            name: "Widget".to_string(),
            price: price_from_cents(100),
            description: String::new(),
            stock: 0,
        };
        let detail = ProductDetail {
            id: 1,
            product_id: 4,
            details: "Made of steel".to_string(),
        };

        assert_eq!(detail.label(&product), "Details of Widget");
    }
}
