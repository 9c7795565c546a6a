use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{base_context, redirect, render_template};
use tera::Tera;

use crate::admin::{CONTENT_MODEL, PLAYLIST_MODEL};
use crate::forms::content::AddContentForm;
use crate::forms::playlist::AddPlaylistForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::admin::{ChangeList, ChangeListParams, list_admin_models};
use crate::services::{contents, playlists};

const CONTENT_CHANGELIST_URL: &str = "/admin/content/";
const PLAYLIST_CHANGELIST_URL: &str = "/admin/playlist/";

fn render_change_list(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    server_config: &CommonServerConfig,
    change_list: &ChangeList,
) -> HttpResponse {
    let mut context = base_context(
        flash_messages,
        user,
        "admin",
        &server_config.auth_service_url,
    );
    context.insert("change_list", change_list);
    context.insert(
        "search_action",
        &format!("/admin/{}/", change_list.model_name),
    );
    render_template(tera, "admin/change_list.html", &context)
}

#[get("/admin/")]
pub async fn show_admin_index(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_admin_models(&user) {
        Ok(models) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "admin",
                &server_config.auth_service_url,
            );
            context.insert("models", &models);
            render_template(&tera, "admin/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list admin models: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/admin/content/")]
pub async fn show_content_changelist(
    params: web::Query<ChangeListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match contents::load_content_changelist(repo.get_ref(), &user, params.into_inner()) {
        Ok(change_list) => render_change_list(
            &tera,
            &flash_messages,
            &user,
            &server_config,
            &change_list,
        ),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list {CONTENT_MODEL} records: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/content/add")]
pub async fn add_content(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddContentForm>,
) -> impl Responder {
    match contents::create_content(repo.get_ref(), &user, form.into_inner()) {
        Ok(content) => {
            FlashMessage::success(format!("Content \"{content}\" added.")).send();
            redirect(CONTENT_CHANGELIST_URL)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(CONTENT_CHANGELIST_URL)
        }
        Err(err) => {
            log::error!("Failed to create content: {err}");
            FlashMessage::error("Could not add content.").send();
            redirect(CONTENT_CHANGELIST_URL)
        }
    }
}

#[post("/admin/content/{content_id}/delete")]
pub async fn delete_content(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contents::delete_content(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Content deleted.").send();
            redirect(CONTENT_CHANGELIST_URL)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Content not found.").send();
            redirect(CONTENT_CHANGELIST_URL)
        }
        Err(err) => {
            log::error!("Failed to delete content: {err}");
            FlashMessage::error("Could not delete content.").send();
            redirect(CONTENT_CHANGELIST_URL)
        }
    }
}

#[get("/admin/playlist/")]
pub async fn show_playlist_changelist(
    params: web::Query<ChangeListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match playlists::load_playlist_changelist(repo.get_ref(), &user, params.into_inner()) {
        Ok(change_list) => render_change_list(
            &tera,
            &flash_messages,
            &user,
            &server_config,
            &change_list,
        ),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list {PLAYLIST_MODEL} records: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/playlist/add")]
pub async fn add_playlist(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddPlaylistForm>,
) -> impl Responder {
    match playlists::create_playlist(repo.get_ref(), &user, form.into_inner()) {
        Ok(playlist) => {
            FlashMessage::success(format!("Playlist \"{playlist}\" added.")).send();
            redirect(PLAYLIST_CHANGELIST_URL)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(PLAYLIST_CHANGELIST_URL)
        }
        Err(err) => {
            log::error!("Failed to create playlist: {err}");
            FlashMessage::error("Could not add playlist.").send();
            redirect(PLAYLIST_CHANGELIST_URL)
        }
    }
}

#[post("/admin/playlist/{playlist_id}/delete")]
pub async fn delete_playlist(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match playlists::delete_playlist(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Playlist deleted.").send();
            redirect(PLAYLIST_CHANGELIST_URL)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Playlist not found.").send();
            redirect(PLAYLIST_CHANGELIST_URL)
        }
        Err(err) => {
            log::error!("Failed to delete playlist: {err}");
            FlashMessage::error("Could not delete playlist.").send();
            redirect(PLAYLIST_CHANGELIST_URL)
        }
    }
}
