use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::serializers::{SerializerResult, derived_errors, finish, unresolved_references};

/// Wire representation `{id, product, quantity, order_date}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderRepr {
    pub id: i32,
    /// Identifier of the ordered product.
    pub product: i32,
    pub quantity: i32,
    pub order_date: NaiveDateTime,
}

impl From<Order> for OrderRepr {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            product: value.product_id,
            quantity: value.quantity,
            order_date: value.order_date,
        }
    }
}

/// Incoming order payload. `id` and `order_date` are read-only and ignored when present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OrderPayload {
    #[validate(required(message = "This field is required."))]
    pub product: Option<i32>,
    #[validate(required(message = "This field is required."))]
    pub quantity: Option<i32>,
}

impl OrderPayload {
    /// Product identifiers that must be resolved before conversion.
    pub fn referenced_products(&self) -> Vec<i32> {
        self.product.into_iter().collect()
    }

    /// Validates the payload into a domain `NewOrder`.
    ///
    /// `missing_products` lists referenced product ids that do not exist.
    pub fn into_new_order(self, missing_products: &[i32]) -> SerializerResult<NewOrder> {
        let (product_id, quantity) = self.clean(missing_products)?;
        Ok(NewOrder::new(product_id, quantity))
    }

    /// Validates the payload into a domain `UpdateOrder`.
    pub fn into_update_order(self, missing_products: &[i32]) -> SerializerResult<UpdateOrder> {
        let (product_id, quantity) = self.clean(missing_products)?;
        Ok(UpdateOrder::new(product_id, quantity))
    }

    fn clean(self, missing_products: &[i32]) -> SerializerResult<(i32, i32)> {
        let mut errors = derived_errors(&self);
        unresolved_references(&mut errors, "product", missing_products);

        finish(errors, || {
            (
                self.product.unwrap_or_default(),
                self.quantity.unwrap_or_default(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn order_payload_converts_successfully() {
        let payload: OrderPayload =
            serde_json::from_value(json!({"product": 5, "quantity": 3})).expect("deserialize");

        assert_eq!(payload.referenced_products(), vec![5]);

        let new_order = payload.into_new_order(&[]).expect("expected success");

        assert_eq!(new_order, NewOrder::new(5, 3));
    }

    #[test]
    fn order_payload_ignores_supplied_order_date() {
        let payload: OrderPayload = serde_json::from_value(json!({
            "product": 5,
            "quantity": 3,
            "order_date": "1999-01-01T00:00:00"
        }))
        .expect("deserialize");

        let update = payload.into_update_order(&[]).expect("expected success");

        assert_eq!(update, UpdateOrder::new(5, 3));
    }

    #[test]
    fn order_payload_rejects_unknown_product() {
        let payload: OrderPayload =
            serde_json::from_value(json!({"product": 42, "quantity": 1})).expect("deserialize");

        let errors = payload
            .into_new_order(&[42])
            .expect_err("expected validation to fail");

        let codes: Vec<String> = errors
            .field_errors()
            .get("product")
            .map(|errors| errors.iter().map(|error| error.code.to_string()).collect())
            .unwrap_or_default();
        assert_eq!(codes, vec!["does_not_exist".to_string()]);
    }

    #[test]
    fn order_payload_requires_product_and_quantity() {
        let errors = OrderPayload::default()
            .into_new_order(&[])
            .expect_err("expected validation to fail");

        assert!(errors.field_errors().contains_key("product"));
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn order_repr_renames_product_reference() {
        let order_date = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(12, 30, 0))
            .expect("valid timestamp");
        let repr = OrderRepr::from(Order {
            id: 8,
            product_id: 5,
            quantity: 3,
            order_date,
        });

        let value = serde_json::to_value(&repr).expect("serialization should succeed");

        assert_eq!(
            value,
            json!({
                "id": 8,
                "product": 5,
                "quantity": 3,
                "order_date": "2024-03-01T12:30:00"
            })
        );
    }
}
