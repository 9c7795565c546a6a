use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::check_role;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::category::Category;
use crate::repository::{CategoryReader, CategoryWriter, ProductReader};
use crate::serializers::category::CategoryPayload;
use crate::services::{ServiceError, ServiceResult};

/// Lists every category with its product ids.
pub fn list_categories<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let (_total, categories) = repo.list_categories()?;
    Ok(categories)
}

pub fn get_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    category_id: i32,
) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_category_by_id(category_id)?
        .ok_or(ServiceError::NotFound)
}

/// Categories a product belongs to. Unknown products yield `NotFound`.
pub fn list_product_categories<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
) -> ServiceResult<Vec<Category>>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.list_categories_for_product(product_id)
        .map_err(ServiceError::from)
}

/// Resolves every referenced product and stores the category with its links.
pub fn create_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payload: CategoryPayload,
) -> ServiceResult<Category>
where
    R: ProductReader + CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let missing = repo.find_missing_products(&payload.referenced_products())?;
    let new_category = payload.into_new_category(&missing)?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Replaces the name and the product links of a category.
pub fn update_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    category_id: i32,
    payload: CategoryPayload,
) -> ServiceResult<Category>
where
    R: ProductReader + CategoryReader + CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if repo.get_category_by_id(category_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let missing = repo.find_missing_products(&payload.referenced_products())?;
    let updates = payload.into_update_category(&missing)?;

    repo.update_category(category_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_category<R>(repo: &R, user: &AuthenticatedUser, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_category(category_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    use crate::domain::product::Product;
    use crate::repository::mock::MockCategoryRepository;
    use crate::services::test_support::user_with_roles;

    fn sample_category(id: i32, name: &str, product_ids: Vec<i32>) -> Category {
        Category {
            id,
            name: name.to_string(),
            product_ids,
        }
    }

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            name: "Widget".to_string(),
            price: Decimal::new(999, 2),
            description: "A widget".to_string(),
            stock: 1,
        }
    }

    #[test]
    fn list_categories_requires_role() {
        let repo = MockCategoryRepository::new();
        let user = user_with_roles(&[]);

        let result = list_categories(&repo, &user);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn create_category_resolves_deduplicated_products() {
        let mut repo = MockCategoryRepository::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_find_missing_products()
            .times(1)
            .withf(|ids| ids == [1, 2])
            .returning(|_| Ok(vec![]));
        repo.expect_create_category()
            .times(1)
            .withf(|new_category| {
                assert_eq!(new_category.name, "Tools");
                assert_eq!(new_category.product_ids, vec![1, 2]);
                true
            })
            .returning(|new_category| {
                Ok(sample_category(
                    4,
                    &new_category.name,
                    new_category.product_ids.clone(),
                ))
            });

        let payload: CategoryPayload =
            serde_json::from_value(json!({"name": "Tools", "products": [2, 1, 2]}))
                .expect("payload should deserialize");

        let created = create_category(&repo, &user, payload).expect("expected success");

        assert_eq!(created.product_ids, vec![1, 2]);
    }

    #[test]
    fn create_category_reports_unresolved_products() {
        let mut repo = MockCategoryRepository::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_find_missing_products()
            .times(1)
            .returning(|_| Ok(vec![9]));
        repo.expect_create_category().never();

        let payload: CategoryPayload =
            serde_json::from_value(json!({"name": "Tools", "products": [1, 9]}))
                .expect("payload should deserialize");

        let result = create_category(&repo, &user, payload);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn update_category_returns_not_found_for_unknown_category() {
        let mut repo = MockCategoryRepository::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update_category().never();

        let payload: CategoryPayload =
            serde_json::from_value(json!({"name": "Tools", "products": [1]}))
                .expect("payload should deserialize");

        let result = update_category(&repo, &user, 4, payload);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn list_product_categories_returns_reverse_relation() {
        let mut repo = MockCategoryRepository::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_get_product_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_product(id))));
        repo.expect_list_categories_for_product()
            .times(1)
            .withf(|product_id| *product_id == 1)
            .returning(|_| Ok(vec![sample_category(4, "Tools", vec![1, 2])]));

        let categories = list_product_categories(&repo, &user, 1).expect("expected success");

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Tools");
    }

    #[test]
    fn list_product_categories_rejects_unknown_product() {
        let mut repo = MockCategoryRepository::new();
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        repo.expect_get_product_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_list_categories_for_product().never();

        let result = list_product_categories(&repo, &user, 1);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
