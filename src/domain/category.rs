use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain representation of a category grouping any number of products.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category. Names are not unique.
    pub name: String,
    /// Identifiers of the associated products in ascending order.
    pub product_ids: Vec<i32>,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Payload required to insert a new category together with its product associations.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Identifiers of the products to associate.
    pub product_ids: Vec<i32>,
}

impl NewCategory {
    /// Build a new category payload.
    pub fn new(name: impl Into<String>, product_ids: impl Into<Vec<i32>>) -> Self {
        Self {
            name: name.into(),
            product_ids: product_ids.into(),
        }
    }
}

/// Replacement data applied when updating an existing category.
///
/// The product associations are replaced as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub name: String,
    /// Full set of products associated after the update.
    pub product_ids: Vec<i32>,
}

impl UpdateCategory {
    /// Build a category update payload.
    pub fn new(name: impl Into<String>, product_ids: impl Into<Vec<i32>>) -> Self {
        Self {
            name: name.into(),
            product_ids: product_ids.into(),
        }
    }
}
