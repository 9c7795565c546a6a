use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::content::NewContent;

/// Maximum allowed length for a content title.
const TITLE_MAX_LEN: usize = 255;
const TITLE_MAX_LEN_VALIDATOR: u64 = TITLE_MAX_LEN as u64;

/// Maximum allowed length for a file URL.
const FILE_URL_MAX_LEN: usize = 200;
const FILE_URL_MAX_LEN_VALIDATOR: u64 = FILE_URL_MAX_LEN as u64;

/// Maximum allowed length for a content type.
const CONTENT_TYPE_MAX_LEN: usize = 50;
const CONTENT_TYPE_MAX_LEN_VALIDATOR: u64 = CONTENT_TYPE_MAX_LEN as u64;

/// Result type returned by the content form helpers.
pub type ContentFormResult<T> = Result<T, ContentFormError>;

/// Errors that can occur while processing content forms.
#[derive(Debug, Error)]
pub enum ContentFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided title is empty after sanitization.
    #[error("content title cannot be empty")]
    EmptyTitle,
    /// The provided content type is empty after sanitization.
    #[error("content type cannot be empty")]
    EmptyContentType,
}

/// Form payload emitted when submitting the admin "Add content" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddContentForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[validate(url, length(max = FILE_URL_MAX_LEN_VALIDATOR))]
    pub file_url: String,
    #[validate(length(min = 1, max = CONTENT_TYPE_MAX_LEN_VALIDATOR))]
    pub content_type: String,
    /// Checkbox value; any submitted value marks the content as public.
    #[serde(default)]
    pub is_public: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl AddContentForm {
    /// Validates and sanitizes the payload into a domain `NewContent`.
    pub fn into_new_content(self) -> ContentFormResult<NewContent> {
        self.validate()?;

        let title = self.title.trim();
        if title.is_empty() {
            return Err(ContentFormError::EmptyTitle);
        }

        let content_type = self.content_type.trim().to_lowercase();
        if content_type.is_empty() {
            return Err(ContentFormError::EmptyContentType);
        }

        Ok(NewContent::new(
            title,
            self.file_url.trim(),
            content_type,
            self.description.trim(),
        )
        .public(self.is_public.is_some()))
    }
}
