use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::check_role;

use crate::SERVICE_ACCESS_ROLE;
use crate::admin::{ModelAdmin, PLAYLIST_MODEL, streaming_admin_site};
use crate::domain::playlist::{Playlist, PlaylistField, PlaylistListQuery};
use crate::forms::playlist::AddPlaylistForm;
use crate::repository::{PlaylistReader, PlaylistWriter};
use crate::services::admin::{ChangeList, ChangeListParams, ordering_keys};
use crate::services::{ServiceError, ServiceResult};

fn playlist_query(admin: &dyn ModelAdmin, params: &ChangeListParams) -> PlaylistListQuery {
    let mut query = PlaylistListQuery::new();
    for key in ordering_keys(admin, PlaylistField::from_name) {
        query = query.order_by(key);
    }
    query.paginate(params.page(), admin.list_per_page())
}

/// Loads the playlist changelist using the registered admin configuration.
pub fn load_playlist_changelist<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ChangeListParams,
) -> ServiceResult<ChangeList>
where
    R: PlaylistReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let site = streaming_admin_site();
    let admin = site.get(PLAYLIST_MODEL).ok_or(ServiceError::NotFound)?;

    let (total, playlists) = repo.list_playlists(playlist_query(admin, &params))?;

    Ok(ChangeList::build(admin, &params, total, &playlists, Vec::new()))
}

pub fn create_playlist<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddPlaylistForm,
) -> ServiceResult<Playlist>
where
    R: PlaylistWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_playlist = form
        .into_new_playlist()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_playlist(&new_playlist)
        .map_err(ServiceError::from)
}

pub fn delete_playlist<R>(repo: &R, user: &AuthenticatedUser, playlist_id: i32) -> ServiceResult<()>
where
    R: PlaylistWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_playlist(playlist_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use pushkind_common::repository::errors::RepositoryError;

    use crate::domain::SortDirection;
    use crate::repository::mock::{MockPlaylistReader, MockPlaylistWriter};
    use crate::services::test_support::user_with_roles;

    fn sample_playlist(id: i32, name: &str) -> Playlist {
        Playlist {
            id,
            name: name.to_string(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn load_playlist_changelist_uses_default_configuration() {
        let mut repo = MockPlaylistReader::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        let playlists = vec![sample_playlist(2, "Evening"), sample_playlist(1, "Morning")];
        repo.expect_list_playlists()
            .times(1)
            .withf(|query| {
                assert_eq!(query.ordering.len(), 1);
                assert_eq!(query.ordering[0].field, PlaylistField::Id);
                assert_eq!(query.ordering[0].direction, SortDirection::Descending);
                true
            })
            .returning(move |_| Ok((2, playlists.clone())));

        let change_list = load_playlist_changelist(&repo, &user, ChangeListParams::default())
            .expect("expected success");

        assert!(!change_list.searchable);
        assert!(change_list.filters.is_empty());
        assert_eq!(change_list.columns.len(), 1);
        assert_eq!(change_list.columns[0].title, "Playlist");
    }

    #[test]
    fn create_playlist_requires_role() {
        let repo = MockPlaylistWriter::new();
        let user = user_with_roles(&[]);
        let form = AddPlaylistForm {
            name: "Morning".to_string(),
        };

        let result = create_playlist(&repo, &user, form);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn create_playlist_persists_sanitized_name() {
        let mut repo = MockPlaylistWriter::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_create_playlist()
            .times(1)
            .withf(|new_playlist| new_playlist.name == "Morning Mix")
            .returning(|new_playlist| Ok(sample_playlist(1, &new_playlist.name)));

        let form = AddPlaylistForm {
            name: "  Morning \t Mix ".to_string(),
        };

        let created = create_playlist(&repo, &user, form).expect("expected success");

        assert_eq!(created.name, "Morning Mix");
    }

    #[test]
    fn delete_playlist_maps_missing_record() {
        let mut repo = MockPlaylistWriter::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_delete_playlist()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_playlist(&repo, &user, 9);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
