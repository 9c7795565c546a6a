use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::serializers::product_detail::{ProductDetailPayload, ProductDetailRepr};
use crate::services::product_details::{
    create_product_detail, delete_product_detail, get_product_detail, list_product_details,
    update_product_detail,
};

#[get("/v1/product-details")]
pub async fn api_list_product_details(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_product_details(repo.get_ref(), &user) {
        Ok(details) => HttpResponse::Ok().json(
            details
                .into_iter()
                .map(ProductDetailRepr::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err, "list product details"),
    }
}

#[post("/v1/product-details")]
/// Create details for a product. A product may have at most one set of details.
pub async fn api_create_product_detail(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<ProductDetailPayload>,
) -> impl Responder {
    match create_product_detail(repo.get_ref(), &user, payload.into_inner()) {
        Ok(detail) => HttpResponse::Created().json(ProductDetailRepr::from(detail)),
        Err(err) => error_response(err, "create product detail"),
    }
}

#[get("/v1/product-details/{detail_id}")]
pub async fn api_get_product_detail(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_detail(repo.get_ref(), &user, path.into_inner()) {
        Ok(detail) => HttpResponse::Ok().json(ProductDetailRepr::from(detail)),
        Err(err) => error_response(err, "load product detail"),
    }
}

#[put("/v1/product-details/{detail_id}")]
pub async fn api_update_product_detail(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<ProductDetailPayload>,
) -> impl Responder {
    match update_product_detail(
        repo.get_ref(),
        &user,
        path.into_inner(),
        payload.into_inner(),
    ) {
        Ok(detail) => HttpResponse::Ok().json(ProductDetailRepr::from(detail)),
        Err(err) => error_response(err, "update product detail"),
    }
}

#[delete("/v1/product-details/{detail_id}")]
pub async fn api_delete_product_detail(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_detail(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete product detail"),
    }
}
