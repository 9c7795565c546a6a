use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::models::category_product::NewCategoryProduct;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id)
            .first::<DbCategory>(&mut conn)
            .optional()?;

        match category {
            Some(category) => {
                let mut product_ids = load_product_ids_for_categories(&mut conn, &[category.id])?;
                let ids = product_ids.remove(&category.id).unwrap_or_default();
                Ok(Some(category.into_domain(ids)))
            }
            None => Ok(None),
        }
    }

    fn list_categories(&self) -> RepositoryResult<(usize, Vec<DomainCategory>)> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let db_categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        let categories = attach_product_ids(&mut conn, db_categories)?;
        Ok((categories.len(), categories))
    }

    fn list_categories_for_product(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::{categories, category_products};

        let mut conn = self.conn()?;

        let db_categories = categories::table
            .inner_join(category_products::table)
            .filter(category_products::product_id.eq(product_id))
            .order(categories::id.asc())
            .select(DbCategory::as_select())
            .load::<DbCategory>(&mut conn)?;

        attach_product_ids(&mut conn, db_categories)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.transaction::<DomainCategory, RepositoryError, _>(|conn| {
            let insertable = DbNewCategory {
                name: new_category.name.as_str(),
            };

            let created = diesel::insert_into(categories::table)
                .values(&insertable)
                .get_result::<DbCategory>(conn)?;

            let product_ids = replace_products(conn, created.id, &new_category.product_ids)?;

            Ok(created.into_domain(product_ids))
        })
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.transaction::<DomainCategory, RepositoryError, _>(|conn| {
            let changes = DbNewCategory {
                name: updates.name.as_str(),
            };

            let updated = diesel::update(categories::table.find(category_id))
                .set(&changes)
                .get_result::<DbCategory>(conn)?;

            let product_ids = replace_products(conn, updated.id, &updates.product_ids)?;

            Ok(updated.into_domain(product_ids))
        })
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::{categories, category_products};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                category_products::table.filter(category_products::category_id.eq(category_id)),
            )
            .execute(conn)?;

            let deleted = diesel::delete(categories::table.find(category_id)).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

/// Replace every association of `category_id` with `product_ids` and return the stored ids.
fn replace_products(
    conn: &mut SqliteConnection,
    category_id: i32,
    product_ids: &[i32],
) -> RepositoryResult<Vec<i32>> {
    use crate::schema::category_products;

    let mut unique_ids = product_ids.to_vec();
    unique_ids.sort_unstable();
    unique_ids.dedup();

    diesel::delete(category_products::table.filter(category_products::category_id.eq(category_id)))
        .execute(conn)?;

    if !unique_ids.is_empty() {
        let rows = NewCategoryProduct::for_category(category_id, &unique_ids);
        diesel::insert_into(category_products::table)
            .values(&rows)
            .execute(conn)?;
    }

    Ok(unique_ids)
}

fn attach_product_ids(
    conn: &mut SqliteConnection,
    db_categories: Vec<DbCategory>,
) -> RepositoryResult<Vec<DomainCategory>> {
    if db_categories.is_empty() {
        return Ok(Vec::new());
    }

    let category_ids: Vec<i32> = db_categories.iter().map(|category| category.id).collect();
    let mut product_map = load_product_ids_for_categories(conn, &category_ids)?;

    Ok(db_categories
        .into_iter()
        .map(|category| {
            let ids = product_map.remove(&category.id).unwrap_or_default();
            category.into_domain(ids)
        })
        .collect())
}

fn load_product_ids_for_categories(
    conn: &mut SqliteConnection,
    category_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<i32>>> {
    use crate::schema::category_products;

    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = category_products::table
        .filter(category_products::category_id.eq_any(category_ids))
        .order(category_products::product_id.asc())
        .select((category_products::category_id, category_products::product_id))
        .load::<(i32, i32)>(conn)?;

    let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
    for (category_id, product_id) in rows {
        map.entry(category_id).or_default().push(product_id);
    }

    Ok(map)
}
