use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::serializers::category::{CategoryPayload, CategoryRepr};
use crate::services::categories::{
    create_category, delete_category, get_category, list_categories, update_category,
};

#[get("/v1/categories")]
pub async fn api_list_categories(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_categories(repo.get_ref(), &user) {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryRepr::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err, "list categories"),
    }
}

#[post("/v1/categories")]
pub async fn api_create_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<CategoryPayload>,
) -> impl Responder {
    match create_category(repo.get_ref(), &user, payload.into_inner()) {
        Ok(category) => HttpResponse::Created().json(CategoryRepr::from(category)),
        Err(err) => error_response(err, "create category"),
    }
}

#[get("/v1/categories/{category_id}")]
pub async fn api_get_category(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_category(repo.get_ref(), &user, path.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(CategoryRepr::from(category)),
        Err(err) => error_response(err, "load category"),
    }
}

#[put("/v1/categories/{category_id}")]
/// Replace the name and the product list of a category.
pub async fn api_update_category(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<CategoryPayload>,
) -> impl Responder {
    match update_category(
        repo.get_ref(),
        &user,
        path.into_inner(),
        payload.into_inner(),
    ) {
        Ok(category) => HttpResponse::Ok().json(CategoryRepr::from(category)),
        Err(err) => error_response(err, "update category"),
    }
}

#[delete("/v1/categories/{category_id}")]
pub async fn api_delete_category(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete category"),
    }
}
