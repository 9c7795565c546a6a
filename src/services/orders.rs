use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::check_role;
use serde::Deserialize;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::order::{Order, OrderListQuery};
use crate::repository::{OrderReader, OrderWriter, ProductReader};
use crate::serializers::order::OrderPayload;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the order list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    /// Restrict the listing to orders of this product.
    pub product: Option<i32>,
}

/// Lists orders, newest first.
pub fn list_orders<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: OrderQuery,
) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut list_query = OrderListQuery::new();
    if let Some(product_id) = query.product {
        list_query = list_query.product_id(product_id);
    }

    let (_total, orders) = repo.list_orders(list_query)?;
    Ok(orders)
}

pub fn get_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_order_by_id(order_id)?
        .ok_or(ServiceError::NotFound)
}

/// Resolves the referenced product and stores a new order.
///
/// The order date is assigned by the store.
pub fn create_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payload: OrderPayload,
) -> ServiceResult<Order>
where
    R: ProductReader + OrderWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let missing = repo.find_missing_products(&payload.referenced_products())?;
    let new_order = payload.into_new_order(&missing)?;

    repo.create_order(&new_order).map_err(ServiceError::from)
}

/// Replaces the product and quantity of an order, keeping its order date.
pub fn update_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    payload: OrderPayload,
) -> ServiceResult<Order>
where
    R: ProductReader + OrderReader + OrderWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if repo.get_order_by_id(order_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let missing = repo.find_missing_products(&payload.referenced_products())?;
    let updates = payload.into_update_order(&missing)?;

    repo.update_order(order_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_order(order_id).map_err(ServiceError::from)
}
