use pushkind_common::repository::errors::RepositoryError;
use thiserror::Error;
use validator::ValidationErrors;

pub mod admin;
pub mod categories;
pub mod contents;
pub mod orders;
pub mod playlists;
pub mod product_details;
pub mod products;

/// Errors surfaced by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The user lacks the role required to access the service.
    #[error("unauthorized")]
    Unauthorized,
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,
    /// Field-level validation failures of an API payload.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    /// Rejected admin form submission.
    #[error("{0}")]
    Form(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(value: ValidationErrors) -> Self {
        ServiceError::Validation(value)
    }
}
