use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, PRICE_DECIMAL_PLACES, Product, UpdateProduct};
use crate::serializers::{
    REQUIRED_MESSAGE, SerializerResult, derived_errors, field_error, finish, max_length,
    required_text, sanitize_inline_text, sanitize_multiline_text,
};

/// Maximum allowed length for a product name.
pub const NAME_MAX_LEN: usize = 100;

/// Total number of digits a price may carry.
pub const PRICE_MAX_DIGITS: u32 = 10;
const PRICE_MAX_WHOLE_DIGITS: usize = (PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES) as usize;

/// Wire representation `{id, name, price, description, stock}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductRepr {
    pub id: i32,
    pub name: String,
    /// Serialized as a decimal string such as `"9.99"`.
    pub price: Decimal,
    pub description: String,
    pub stock: i32,
}

impl From<Product> for ProductRepr {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
            stock: value.stock,
        }
    }
}

/// Incoming product payload. `id` is read-only and ignored when present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(required(message = "This field is required."))]
    pub name: Option<String>,
    /// Accepts a JSON string or number.
    pub price: Option<Value>,
    #[validate(required(message = "This field is required."))]
    pub description: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub stock: Option<i32>,
}

struct CleanProduct {
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
}

impl ProductPayload {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> SerializerResult<NewProduct> {
        let clean = self.clean()?;
        Ok(NewProduct::new(
            clean.name,
            clean.description,
            clean.price,
            clean.stock,
        ))
    }

    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> SerializerResult<UpdateProduct> {
        let clean = self.clean()?;
        Ok(UpdateProduct::new(
            clean.name,
            clean.description,
            clean.price,
            clean.stock,
        ))
    }

    fn clean(self) -> SerializerResult<CleanProduct> {
        let mut errors = derived_errors(&self);

        let name = required_text(
            &mut errors,
            "name",
            self.name.as_deref(),
            sanitize_inline_text,
        );
        max_length(&mut errors, "name", &name, NAME_MAX_LEN);
        let description = required_text(
            &mut errors,
            "description",
            self.description.as_deref(),
            sanitize_multiline_text,
        );
        let price = clean_price(&mut errors, self.price.as_ref());
        let stock = self.stock.unwrap_or_default();

        finish(errors, || CleanProduct {
            name,
            description,
            price,
            stock,
        })
    }
}

/// Parse a price and check it fits ten digits with two fractional digits.
fn clean_price(errors: &mut ValidationErrors, value: Option<&Value>) -> Decimal {
    let raw = match value {
        None => {
            errors.add("price", field_error("required", REQUIRED_MESSAGE));
            return Decimal::ZERO;
        }
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(_) => {
            errors.add(
                "price",
                field_error("invalid", "A valid number is required."),
            );
            return Decimal::ZERO;
        }
    };

    let Ok(price) = Decimal::from_str(&raw) else {
        errors.add(
            "price",
            field_error("invalid", "A valid number is required."),
        );
        return Decimal::ZERO;
    };

    let normalized = price.normalize();

    if normalized.scale() > PRICE_DECIMAL_PLACES {
        errors.add(
            "price",
            field_error(
                "max_decimal_places",
                format!(
                    "Ensure that there are no more than {PRICE_DECIMAL_PLACES} decimal places."
                ),
            ),
        );
    }

    let whole = normalized.trunc().abs();
    let whole_digits = if whole.is_zero() {
        0
    } else {
        whole.to_string().len()
    };
    if whole_digits > PRICE_MAX_WHOLE_DIGITS {
        errors.add(
            "price",
            field_error(
                "max_whole_digits",
                format!(
                    "Ensure that there are no more than {PRICE_MAX_WHOLE_DIGITS} digits before the decimal point."
                ),
            ),
        );
    }

    normalized
}
