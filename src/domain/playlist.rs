use std::fmt;

use chrono::NaiveDateTime;
use pushkind_common::pagination::Pagination;
use serde::{Deserialize, Serialize};

use crate::domain::SortKey;

/// Named playlist managed through the default admin pages.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Playlist {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Payload required to insert a new playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlaylist {
    pub name: String,
}

impl NewPlaylist {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Columns of a playlist record addressable by admin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaylistField {
    Id,
    Name,
    CreatedAt,
}

impl PlaylistField {
    /// Resolve a column name into a field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Query definition used to list playlists in the admin changelist.
#[derive(Debug, Clone, Default)]
pub struct PlaylistListQuery {
    /// Ordering terms applied in sequence.
    pub ordering: Vec<SortKey<PlaylistField>>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl PlaylistListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ordering term.
    pub fn order_by(mut self, key: SortKey<PlaylistField>) -> Self {
        self.ordering.push(key);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
