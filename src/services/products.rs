use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::check_role;
use serde::Deserialize;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::product::{Product, ProductListQuery};
use crate::repository::{ProductReader, ProductWriter};
use crate::serializers::product::ProductPayload;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    /// Optional substring matched against names and descriptions.
    pub search: Option<String>,
}

/// Lists products ordered by id.
pub fn list_products<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ProductQuery,
) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut list_query = ProductListQuery::new();
    if let Some(term) = query.search.as_deref().map(str::trim) {
        if !term.is_empty() {
            list_query = list_query.search(term);
        }
    }

    let (_total, products) = repo.list_products(list_query)?;
    Ok(products)
}

/// Fetches a single product.
pub fn get_product<R>(repo: &R, user: &AuthenticatedUser, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the payload and stores a new product.
pub fn create_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payload: ProductPayload,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_product = payload.into_new_product()?;

    repo.create_product(&new_product)
        .map_err(ServiceError::from)
}

/// Replaces every writable field of an existing product.
pub fn update_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
    payload: ProductPayload,
) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let updates = payload.into_update_product()?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product along with its orders, details and category links.
pub fn delete_product<R>(repo: &R, user: &AuthenticatedUser, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_product(product_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushkind_common::repository::errors::RepositoryError;
    use rust_decimal::Decimal;
    use serde_json::json;

    use crate::repository::mock::{MockProductReader, MockProductRepository, MockProductWriter};
    use crate::services::test_support::user_with_roles;

    fn sample_product(id: i32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: Decimal::new(999, 2),
            description: "A widget".to_string(),
            stock: 10,
        }
    }

    fn widget_payload() -> ProductPayload {
        serde_json::from_value(json!({
            "name": "Widget",
            "description": "A widget",
            "price": "9.99",
            "stock": 10
        }))
        .expect("payload should deserialize")
    }

    #[test]
    fn list_products_requires_role() {
        let repo = MockProductReader::new();
        let user = user_with_roles(&[]);

        let result = list_products(&repo, &user, ProductQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn list_products_returns_every_product() {
        let mut repo = MockProductReader::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_list_products()
            .times(1)
            .withf(|query| query.search.is_none())
            .returning(|_| {
                Ok((
                    2,
                    vec![sample_product(1, "Bolt"), sample_product(2, "Widget")],
                ))
            });

        let products =
            list_products(&repo, &user, ProductQuery::default()).expect("expected success");

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Widget");
    }

    #[test]
    fn list_products_forwards_trimmed_search() {
        let mut repo = MockProductReader::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_list_products()
            .times(1)
            .withf(|query| query.search.as_deref() == Some("wid"))
            .returning(|_| Ok((1, vec![sample_product(2, "Widget")])));

        let query = ProductQuery {
            search: Some("  wid ".to_string()),
        };
        let products = list_products(&repo, &user, query).expect("expected success");

        assert_eq!(products.len(), 1);
    }

    #[test]
    fn get_product_maps_missing_record_to_not_found() {
        let mut repo = MockProductReader::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_get_product_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_product(&repo, &user, 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_product_persists_sanitized_payload() {
        let mut repo = MockProductWriter::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_create_product()
            .times(1)
            .withf(|new_product| {
                assert_eq!(new_product.name, "Widget");
                assert_eq!(new_product.price, Decimal::new(999, 2));
                true
            })
            .returning(|_| Ok(sample_product(1, "Widget")));

        let created = create_product(&repo, &user, widget_payload()).expect("expected success");

        assert_eq!(created.id, 1);
    }

    #[test]
    fn create_product_returns_field_errors_without_writing() {
        let mut repo = MockProductWriter::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);
        repo.expect_create_product().never();

        let result = create_product(&repo, &user, ProductPayload::default());

        match result {
            Err(ServiceError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("name"));
                assert!(errors.field_errors().contains_key("price"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn update_product_checks_existence_before_validating() {
        let mut repo = MockProductRepository::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_get_product_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update_product().never();

        let result = update_product(&repo, &user, 5, ProductPayload::default());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_product_replaces_fields() {
        let mut repo = MockProductRepository::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_get_product_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_product(id, "Old"))));
        repo.expect_update_product()
            .times(1)
            .withf(|product_id, updates| *product_id == 5 && updates.name == "Widget")
            .returning(|id, _| Ok(sample_product(id, "Widget")));

        let updated = update_product(&repo, &user, 5, widget_payload()).expect("expected success");

        assert_eq!(updated.name, "Widget");
    }

    #[test]
    fn delete_product_propagates_not_found() {
        let mut repo = MockProductWriter::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_delete_product()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_product(&repo, &user, 5);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
