use std::fmt;

use chrono::NaiveDateTime;
use pushkind_common::pagination::Pagination;
use serde::{Deserialize, Serialize};

use crate::domain::SortKey;

/// Domain representation of an uploaded media item.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Content {
    /// Unique identifier of the content item.
    pub id: i32,
    /// Title shown in listings.
    pub title: String,
    /// Location of the media file.
    pub file_url: String,
    /// Free-form media kind, for example `video` or `audio`.
    pub content_type: String,
    /// Whether the item is visible to everyone.
    pub is_public: bool,
    /// Timestamp assigned by the store when the item was inserted.
    pub upload_date: NaiveDateTime,
    /// Longer description of the item.
    pub description: String,
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Payload required to insert a new content item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContent {
    pub title: String,
    pub file_url: String,
    pub content_type: String,
    pub is_public: bool,
    pub description: String,
}

impl NewContent {
    /// Build a private content payload.
    pub fn new(
        title: impl Into<String>,
        file_url: impl Into<String>,
        content_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            file_url: file_url.into(),
            content_type: content_type.into(),
            is_public: false,
            description: description.into(),
        }
    }

    /// Mark the content as public.
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

/// Columns of a content record addressable by admin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentField {
    Id,
    Title,
    FileUrl,
    ContentType,
    IsPublic,
    UploadDate,
    Description,
}

impl ContentField {
    /// Resolve a column name into a field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "file_url" => Some(Self::FileUrl),
            "content_type" => Some(Self::ContentType),
            "is_public" => Some(Self::IsPublic),
            "upload_date" => Some(Self::UploadDate),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    /// Column name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::FileUrl => "file_url",
            Self::ContentType => "content_type",
            Self::IsPublic => "is_public",
            Self::UploadDate => "upload_date",
            Self::Description => "description",
        }
    }
}

/// Query definition used to list content items in the admin changelist.
#[derive(Debug, Clone, Default)]
pub struct ContentListQuery {
    /// Optional case-insensitive search; every whitespace-separated term must match.
    pub search: Option<String>,
    /// Fields the search term is matched against. An empty list disables search.
    pub search_fields: Vec<ContentField>,
    /// Optional exact content type filter.
    pub content_type: Option<String>,
    /// Optional visibility filter.
    pub is_public: Option<bool>,
    /// Ordering terms applied in sequence.
    pub ordering: Vec<SortKey<ContentField>>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ContentListQuery {
    /// Construct a query that targets all content items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `term` across `fields`.
    pub fn search(mut self, term: impl Into<String>, fields: impl Into<Vec<ContentField>>) -> Self {
        self.search = Some(term.into());
        self.search_fields = fields.into();
        self
    }

    /// Filter the results by exact content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Filter the results by visibility.
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    /// Append an ordering term.
    pub fn order_by(mut self, key: SortKey<ContentField>) -> Self {
        self.ordering.push(key);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
