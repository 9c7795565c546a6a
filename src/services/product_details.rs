use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::repository::errors::RepositoryError;
use pushkind_common::routes::check_role;
use validator::ValidationErrors;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::product_detail::ProductDetail;
use crate::repository::{ProductDetailReader, ProductDetailWriter, ProductReader};
use crate::serializers::product_detail::{ProductDetailPayload, product_detail_unique_error};
use crate::services::{ServiceError, ServiceResult};

pub fn list_product_details<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<Vec<ProductDetail>>
where
    R: ProductDetailReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let (_total, details) = repo.list_product_details()?;
    Ok(details)
}

pub fn get_product_detail<R>(
    repo: &R,
    user: &AuthenticatedUser,
    detail_id: i32,
) -> ServiceResult<ProductDetail>
where
    R: ProductDetailReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_product_detail_by_id(detail_id)?
        .ok_or(ServiceError::NotFound)
}

/// Whether `product_id` already has details other than `exclude_id`.
fn product_taken<R>(
    repo: &R,
    product_id: Option<i32>,
    exclude_id: Option<i32>,
) -> ServiceResult<bool>
where
    R: ProductDetailReader + ?Sized,
{
    let Some(product_id) = product_id else {
        return Ok(false);
    };

    let existing = repo.get_product_detail_by_product(product_id)?;
    Ok(existing.is_some_and(|detail| Some(detail.id) != exclude_id))
}

/// Map a failed write to a `unique` field error when another request stored
/// details for the same product in the meantime.
fn write_conflict<R>(
    repo: &R,
    err: RepositoryError,
    product_id: i32,
    exclude_id: Option<i32>,
) -> ServiceError
where
    R: ProductDetailReader + ?Sized,
{
    match product_taken(repo, Some(product_id), exclude_id) {
        Ok(true) => {
            let mut errors = ValidationErrors::new();
            errors.add("product", product_detail_unique_error());
            ServiceError::Validation(errors)
        }
        _ => ServiceError::from(err),
    }
}

/// Stores details for a product that has none yet.
pub fn create_product_detail<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payload: ProductDetailPayload,
) -> ServiceResult<ProductDetail>
where
    R: ProductReader + ProductDetailReader + ProductDetailWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let missing = repo.find_missing_products(&payload.referenced_products())?;
    let taken = product_taken(repo, payload.product, None)?;
    let new_detail = payload.into_new_product_detail(&missing, taken)?;

    repo.create_product_detail(&new_detail)
        .map_err(|err| write_conflict(repo, err, new_detail.product_id, None))
}

/// Replaces the product reference and text of existing details.
pub fn update_product_detail<R>(
    repo: &R,
    user: &AuthenticatedUser,
    detail_id: i32,
    payload: ProductDetailPayload,
) -> ServiceResult<ProductDetail>
where
    R: ProductReader + ProductDetailReader + ProductDetailWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if repo.get_product_detail_by_id(detail_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let missing = repo.find_missing_products(&payload.referenced_products())?;
    let taken = product_taken(repo, payload.product, Some(detail_id))?;
    let updates = payload.into_update_product_detail(&missing, taken)?;

    repo.update_product_detail(detail_id, &updates)
        .map_err(|err| write_conflict(repo, err, updates.product_id, Some(detail_id)))
}

pub fn delete_product_detail<R>(
    repo: &R,
    user: &AuthenticatedUser,
    detail_id: i32,
) -> ServiceResult<()>
where
    R: ProductDetailWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_product_detail(detail_id)
        .map_err(ServiceError::from)
}
