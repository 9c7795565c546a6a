use diesel::prelude::*;

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::category_products,
    belongs_to(super::category::Category, foreign_key = category_id),
    belongs_to(super::product::Product, foreign_key = product_id)
)]
pub struct CategoryProduct {
    pub id: i32,
    pub category_id: i32,
    pub product_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::category_products)]
pub struct NewCategoryProduct {
    pub category_id: i32,
    pub product_id: i32,
}

impl NewCategoryProduct {
    /// Association rows linking `category_id` with each of `product_ids`.
    pub fn for_category(category_id: i32, product_ids: &[i32]) -> Vec<Self> {
        product_ids
            .iter()
            .map(|&product_id| Self {
                category_id,
                product_id,
            })
            .collect()
    }
}
