//! JSON wire representations of the catalog records.
//!
//! Each submodule pairs an output representation (`*Repr`) with an input
//! payload (`*Payload`). Payloads collect every field-level problem into a
//! single [`ValidationErrors`] value so that a request is either converted
//! completely or rejected without touching storage.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

pub mod category;
pub mod order;
pub mod product;
pub mod product_detail;

/// Result type returned by the payload conversions.
pub type SerializerResult<T> = Result<T, ValidationErrors>;

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required.";
pub(crate) const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Build a validation error with a code and a human-readable message.
pub(crate) fn field_error(
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Run the derived validators and return the collected errors, possibly empty.
pub(crate) fn derived_errors<T: Validate>(payload: &T) -> ValidationErrors {
    match payload.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    }
}

/// Whether `field` already carries an error.
pub(crate) fn has_field_error(errors: &ValidationErrors, field: &str) -> bool {
    errors.field_errors().contains_key(field)
}

/// Return `value` when no error was collected.
pub(crate) fn finish<T>(
    errors: ValidationErrors,
    value: impl FnOnce() -> T,
) -> SerializerResult<T> {
    if errors.errors().is_empty() {
        Ok(value())
    } else {
        Err(errors)
    }
}

/// Trim and collapse whitespace, dropping control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Trim surrounding whitespace and normalise line endings of multi-line text.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    input.trim().replace("\r\n", "\n")
}

/// Sanitize a required text field, recording a `blank` error when nothing is left.
pub(crate) fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    sanitize: fn(&str) -> String,
) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let sanitized = sanitize(value);
    if sanitized.is_empty() && !has_field_error(errors, field) {
        errors.add(field, field_error("blank", BLANK_MESSAGE));
    }

    sanitized
}

/// Record a `length` error when the sanitized `value` is longer than `max` characters.
pub(crate) fn max_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    max: usize,
) {
    if value.chars().count() > max && !has_field_error(errors, field) {
        errors.add(
            field,
            field_error(
                "length",
                format!("Ensure this field has no more than {max} characters."),
            ),
        );
    }
}

/// Record a `does_not_exist` error on `field` for every id in `missing`.
pub(crate) fn unresolved_references(
    errors: &mut ValidationErrors,
    field: &'static str,
    missing: &[i32],
) {
    for id in missing {
        errors.add(
            field,
            field_error(
                "does_not_exist",
                format!("Invalid pk \"{id}\" - object does not exist."),
            ),
        );
    }
}
