use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::serializers::{
    SerializerResult, derived_errors, field_error, finish, has_field_error, max_length,
    required_text, sanitize_inline_text, unresolved_references,
};

/// Maximum allowed length for a category name.
pub const NAME_MAX_LEN: usize = 100;

/// Wire representation `{id, name, products}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryRepr {
    pub id: i32,
    pub name: String,
    /// Identifiers of the associated products.
    pub products: Vec<i32>,
}

impl From<Category> for CategoryRepr {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
            products: value.product_ids,
        }
    }
}

/// Incoming category payload. `id` is read-only and ignored when present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CategoryPayload {
    #[validate(required(message = "This field is required."))]
    pub name: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub products: Option<Vec<i32>>,
}

impl CategoryPayload {
    /// Product identifiers that must be resolved before conversion, without duplicates.
    pub fn referenced_products(&self) -> Vec<i32> {
        let mut ids = self.products.clone().unwrap_or_default();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Validates the payload into a domain `NewCategory`.
    pub fn into_new_category(self, missing_products: &[i32]) -> SerializerResult<NewCategory> {
        let (name, product_ids) = self.clean(missing_products)?;
        Ok(NewCategory::new(name, product_ids))
    }

    /// Validates the payload into a domain `UpdateCategory`.
    pub fn into_update_category(
        self,
        missing_products: &[i32],
    ) -> SerializerResult<UpdateCategory> {
        let (name, product_ids) = self.clean(missing_products)?;
        Ok(UpdateCategory::new(name, product_ids))
    }

    fn clean(self, missing_products: &[i32]) -> SerializerResult<(String, Vec<i32>)> {
        let mut errors = derived_errors(&self);

        let name = required_text(
            &mut errors,
            "name",
            self.name.as_deref(),
            sanitize_inline_text,
        );
        max_length(&mut errors, "name", &name, NAME_MAX_LEN);

        let product_ids = self.referenced_products();
        if self.products.is_some()
            && product_ids.is_empty()
            && !has_field_error(&errors, "products")
        {
            errors.add(
                "products",
                field_error("empty", "This list may not be empty."),
            );
        }
        unresolved_references(&mut errors, "products", missing_products);

        finish(errors, || (name, product_ids))
    }
}
