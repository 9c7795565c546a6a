use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::content::{Content as DomainContent, NewContent as DomainNewContent};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contents)]
pub struct Content {
    pub id: i32,
    pub title: String,
    pub file_url: String,
    pub content_type: String,
    pub is_public: bool,
    pub upload_date: NaiveDateTime,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contents)]
pub struct NewContent<'a> {
    pub title: &'a str,
    pub file_url: &'a str,
    pub content_type: &'a str,
    pub is_public: bool,
    pub description: &'a str,
}

impl From<Content> for DomainContent {
    fn from(value: Content) -> Self {
        Self {
            id: value.id,
            title: value.title,
            file_url: value.file_url,
            content_type: value.content_type,
            is_public: value.is_public,
            upload_date: value.upload_date,
            description: value.description,
        }
    }
}

impl<'a> From<&'a DomainNewContent> for NewContent<'a> {
    fn from(value: &'a DomainNewContent) -> Self {
        Self {
            title: value.title.as_str(),
            file_url: value.file_url.as_str(),
            content_type: value.content_type.as_str(),
            is_public: value.is_public,
            description: value.description.as_str(),
        }
    }
}
