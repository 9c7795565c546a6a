use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::playlist::{
    NewPlaylist as DomainNewPlaylist, Playlist as DomainPlaylist, PlaylistField,
    PlaylistListQuery,
};
use crate::domain::{SortDirection, SortKey};
use crate::models::playlist::{NewPlaylist as DbNewPlaylist, Playlist as DbPlaylist};
use crate::repository::{DieselRepository, PlaylistReader, PlaylistWriter, page_window};
use crate::schema::playlists;

impl PlaylistReader for DieselRepository {
    fn get_playlist_by_id(&self, id: i32) -> RepositoryResult<Option<DomainPlaylist>> {
        let mut conn = self.conn()?;

        let playlist = playlists::table
            .find(id)
            .first::<DbPlaylist>(&mut conn)
            .optional()?;

        Ok(playlist.map(DomainPlaylist::from))
    }

    fn list_playlists(
        &self,
        query: PlaylistListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainPlaylist>)> {
        let mut conn = self.conn()?;

        let total = playlists::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = playlists::table.into_boxed::<Sqlite>();

        for key in &query.ordering {
            items = order_playlists(items, key);
        }
        items = items.then_order_by(playlists::id.desc());

        if let Some(pagination) = &query.pagination {
            let (offset, limit) = page_window(pagination);
            items = items.offset(offset).limit(limit);
        }

        let db_playlists = items.load::<DbPlaylist>(&mut conn)?;

        Ok((
            total,
            db_playlists.into_iter().map(DomainPlaylist::from).collect(),
        ))
    }
}

impl PlaylistWriter for DieselRepository {
    fn create_playlist(
        &self,
        new_playlist: &DomainNewPlaylist,
    ) -> RepositoryResult<DomainPlaylist> {
        let mut conn = self.conn()?;
        let insertable = DbNewPlaylist::from(new_playlist);

        let created = diesel::insert_into(playlists::table)
            .values(&insertable)
            .get_result::<DbPlaylist>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_playlist(&self, playlist_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(playlists::table.find(playlist_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn order_playlists(
    items: playlists::BoxedQuery<'static, Sqlite>,
    key: &SortKey<PlaylistField>,
) -> playlists::BoxedQuery<'static, Sqlite> {
    macro_rules! by {
        ($column:expr) => {
            match key.direction {
                SortDirection::Ascending => items.then_order_by($column.asc()),
                SortDirection::Descending => items.then_order_by($column.desc()),
            }
        };
    }

    match key.field {
        PlaylistField::Id => by!(playlists::id),
        PlaylistField::Name => by!(playlists::name),
        PlaylistField::CreatedAt => by!(playlists::created_at),
    }
}
