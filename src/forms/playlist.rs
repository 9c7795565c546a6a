use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::playlist::NewPlaylist;

/// Maximum allowed length for a playlist name.
const NAME_MAX_LEN: usize = 100;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Errors that can occur while processing playlist forms.
#[derive(Debug, Error)]
pub enum PlaylistFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("playlist name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when submitting the admin "Add playlist" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPlaylistForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl AddPlaylistForm {
    pub fn into_new_playlist(self) -> Result<NewPlaylist, PlaylistFormError> {
        self.validate()?;

        let name = self.name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(PlaylistFormError::EmptyName);
        }

        Ok(NewPlaylist::new(name))
    }
}
