use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::serializers::order::{OrderPayload, OrderRepr};
use crate::services::orders::{
    OrderQuery, create_order, delete_order, get_order, list_orders, update_order,
};

#[get("/v1/orders")]
/// Return orders, optionally limited to one product with `?product=`.
pub async fn api_list_orders(
    params: web::Query<OrderQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_orders(repo.get_ref(), &user, params.into_inner()) {
        Ok(orders) => {
            HttpResponse::Ok().json(orders.into_iter().map(OrderRepr::from).collect::<Vec<_>>())
        }
        Err(err) => error_response(err, "list orders"),
    }
}

#[post("/v1/orders")]
pub async fn api_create_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<OrderPayload>,
) -> impl Responder {
    match create_order(repo.get_ref(), &user, payload.into_inner()) {
        Ok(order) => HttpResponse::Created().json(OrderRepr::from(order)),
        Err(err) => error_response(err, "create order"),
    }
}

#[get("/v1/orders/{order_id}")]
pub async fn api_get_order(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(OrderRepr::from(order)),
        Err(err) => error_response(err, "load order"),
    }
}

#[put("/v1/orders/{order_id}")]
/// Replace the product and quantity of an order. `order_date` in the body is ignored.
pub async fn api_update_order(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<OrderPayload>,
) -> impl Responder {
    match update_order(
        repo.get_ref(),
        &user,
        path.into_inner(),
        payload.into_inner(),
    ) {
        Ok(order) => HttpResponse::Ok().json(OrderRepr::from(order)),
        Err(err) => error_response(err, "update order"),
    }
}

#[delete("/v1/orders/{order_id}")]
pub async fn api_delete_order(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete order"),
    }
}
