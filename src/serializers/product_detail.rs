use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::product_detail::{NewProductDetail, ProductDetail, UpdateProductDetail};
use crate::serializers::{
    SerializerResult, derived_errors, field_error, finish, has_field_error, required_text,
    sanitize_multiline_text, unresolved_references,
};

/// Wire representation `{id, product, details}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductDetailRepr {
    pub id: i32,
    pub product: i32,
    pub details: String,
}

impl From<ProductDetail> for ProductDetailRepr {
    fn from(value: ProductDetail) -> Self {
        Self {
            id: value.id,
            product: value.product_id,
            details: value.details,
        }
    }
}

/// Error recorded on `product` when the product already has details.
pub fn product_detail_unique_error() -> ValidationError {
    field_error("unique", "product detail with this product already exists.")
}

/// Incoming product detail payload. `id` is read-only and ignored when present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductDetailPayload {
    #[validate(required(message = "This field is required."))]
    pub product: Option<i32>,
    #[validate(required(message = "This field is required."))]
    pub details: Option<String>,
}

impl ProductDetailPayload {
    /// Product identifiers that must be resolved before conversion.
    pub fn referenced_products(&self) -> Vec<i32> {
        self.product.into_iter().collect()
    }

    /// Validates the payload into a domain `NewProductDetail`.
    ///
    /// `product_taken` reports that the referenced product already has details.
    pub fn into_new_product_detail(
        self,
        missing_products: &[i32],
        product_taken: bool,
    ) -> SerializerResult<NewProductDetail> {
        let (product_id, details) = self.clean(missing_products, product_taken)?;
        Ok(NewProductDetail::new(product_id, details))
    }

    /// Validates the payload into a domain `UpdateProductDetail`.
    ///
    /// `product_taken` must ignore the record being updated.
    pub fn into_update_product_detail(
        self,
        missing_products: &[i32],
        product_taken: bool,
    ) -> SerializerResult<UpdateProductDetail> {
        let (product_id, details) = self.clean(missing_products, product_taken)?;
        Ok(UpdateProductDetail::new(product_id, details))
    }

    fn clean(
        self,
        missing_products: &[i32],
        product_taken: bool,
    ) -> SerializerResult<(i32, String)> {
        let mut errors = derived_errors(&self);

        let details = required_text(
            &mut errors,
            "details",
            self.details.as_deref(),
            sanitize_multiline_text,
        );

        unresolved_references(&mut errors, "product", missing_products);
        if product_taken && !has_field_error(&errors, "product") {
            errors.add("product", product_detail_unique_error());
        }

        finish(errors, || (self.product.unwrap_or_default(), details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ProductDetailPayload {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn product_detail_payload_converts_successfully() {
        let new_detail = payload(json!({"id": 9, "product": 1, "details": " Steel body \r\n"}))
            .into_new_product_detail(&[], false)
            .expect("expected success");

        assert_eq!(new_detail, NewProductDetail::new(1, "Steel body"));
    }

    #[test]
    fn product_detail_payload_rejects_taken_product() {
        let errors = payload(json!({"product": 1, "details": "Steel body"}))
            .into_new_product_detail(&[], true)
            .expect_err("expected validation to fail");

        let codes: Vec<String> = errors
            .field_errors()
            .get("product")
            .map(|errors| errors.iter().map(|error| error.code.to_string()).collect())
            .unwrap_or_default();
        assert_eq!(codes, vec!["unique".to_string()]);
    }

    #[test]
    fn product_detail_payload_rejects_unknown_product() {
        let errors = payload(json!({"product": 3, "details": "Steel body"}))
            .into_update_product_detail(&[3], false)
            .expect_err("expected validation to fail");

        assert!(errors.field_errors().contains_key("product"));
    }

    #[test]
    fn product_detail_payload_rejects_blank_details() {
        let errors = payload(json!({"product": 1, "details": "  "}))
            .into_new_product_detail(&[], false)
            .expect_err("expected validation to fail");

        assert!(errors.field_errors().contains_key("details"));
    }
}
