use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, UpdateOrder as DomainUpdateOrder,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
pub struct Order {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDateTime,
}

/// Insert row for an order. `order_date` is left to the column default.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub product_id: i32,
    pub quantity: i32,
}

/// Changeset for an order. `order_date` is intentionally absent.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder {
    pub product_id: i32,
    pub quantity: i32,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            quantity: value.quantity,
            order_date: value.order_date,
        }
    }
}

impl From<&DomainNewOrder> for NewOrder {
    fn from(value: &DomainNewOrder) -> Self {
        Self {
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}

impl From<&DomainUpdateOrder> for UpdateOrder {
    fn from(value: &DomainUpdateOrder) -> Self {
        Self {
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}
