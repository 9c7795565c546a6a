//! Shared plumbing of the JSON API handlers.

use std::collections::BTreeMap;

use actix_web::{HttpResponse, error::InternalError, web};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

use crate::services::ServiceError;

/// Body of a `400 Bad Request` caused by field validation.
#[derive(Debug, Serialize, PartialEq)]
pub struct ValidationErrorBody {
    /// Messages keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationErrorBody {
    fn from(value: &ValidationErrors) -> Self {
        let errors = value
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| match &error.message {
                        Some(message) => message.to_string(),
                        None => error.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        Self { errors }
    }
}

/// JSON extractor configuration answering malformed bodies with `{"detail": ..}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(json!({ "detail": err.to_string() }));
        InternalError::from_response(err, response).into()
    })
}

/// Map a service failure onto the API status codes.
///
/// `action` describes the failed operation in the error log.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => HttpResponse::Unauthorized().finish(),
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "detail": "Not found." })),
        ServiceError::Validation(errors) => {
            HttpResponse::BadRequest().json(ValidationErrorBody::from(&errors))
        }
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(json!({ "detail": message }))
        }
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
