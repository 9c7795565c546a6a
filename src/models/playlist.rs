use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::playlist::{NewPlaylist as DomainNewPlaylist, Playlist as DomainPlaylist};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::playlists)]
pub struct Playlist {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::playlists)]
pub struct NewPlaylist<'a> {
    pub name: &'a str,
}

impl From<Playlist> for DomainPlaylist {
    fn from(value: Playlist) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewPlaylist> for NewPlaylist<'a> {
    fn from(value: &'a DomainNewPlaylist) -> Self {
        Self {
            name: value.name.as_str(),
        }
    }
}
