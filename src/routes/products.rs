use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::serializers::category::CategoryRepr;
use crate::serializers::product::{ProductPayload, ProductRepr};
use crate::services::categories::list_product_categories;
use crate::services::products::{
    ProductQuery, create_product, delete_product, get_product, list_products, update_product,
};

#[get("/v1/products")]
/// Return every product, optionally filtered with `?search=`.
pub async fn api_list_products(
    params: web::Query<ProductQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products(repo.get_ref(), &user, params.into_inner()) {
        Ok(products) => HttpResponse::Ok().json(
            products
                .into_iter()
                .map(ProductRepr::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err, "list products"),
    }
}

#[post("/v1/products")]
pub async fn api_create_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<ProductPayload>,
) -> impl Responder {
    match create_product(repo.get_ref(), &user, payload.into_inner()) {
        Ok(product) => HttpResponse::Created().json(ProductRepr::from(product)),
        Err(err) => error_response(err, "create product"),
    }
}

#[get("/v1/products/{product_id}")]
pub async fn api_get_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product(repo.get_ref(), &user, path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(ProductRepr::from(product)),
        Err(err) => error_response(err, "load product"),
    }
}

#[put("/v1/products/{product_id}")]
pub async fn api_update_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<ProductPayload>,
) -> impl Responder {
    match update_product(
        repo.get_ref(),
        &user,
        path.into_inner(),
        payload.into_inner(),
    ) {
        Ok(product) => HttpResponse::Ok().json(ProductRepr::from(product)),
        Err(err) => error_response(err, "update product"),
    }
}

#[delete("/v1/products/{product_id}")]
/// Delete a product together with its orders, details and category links.
pub async fn api_delete_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete product"),
    }
}

#[get("/v1/products/{product_id}/categories")]
/// Return the categories the product belongs to.
pub async fn api_list_product_categories(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_product_categories(repo.get_ref(), &user, path.into_inner()) {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryRepr::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err, "list product categories"),
    }
}
