use diesel::prelude::*;

use crate::domain::product_detail::{
    NewProductDetail as DomainNewProductDetail, ProductDetail as DomainProductDetail,
    UpdateProductDetail as DomainUpdateProductDetail,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::product_details)]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
pub struct ProductDetail {
    pub id: i32,
    pub product_id: i32,
    pub details: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_details)]
pub struct NewProductDetail<'a> {
    pub product_id: i32,
    pub details: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::product_details)]
pub struct UpdateProductDetail<'a> {
    pub product_id: i32,
    pub details: &'a str,
}

impl From<ProductDetail> for DomainProductDetail {
    fn from(value: ProductDetail) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            details: value.details,
        }
    }
}

impl<'a> From<&'a DomainNewProductDetail> for NewProductDetail<'a> {
    fn from(value: &'a DomainNewProductDetail) -> Self {
        Self {
            product_id: value.product_id,
            details: value.details.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProductDetail> for UpdateProductDetail<'a> {
    fn from(value: &'a DomainUpdateProductDetail) -> Self {
        Self {
            product_id: value.product_id,
            details: value.details.as_str(),
        }
    }
}
