use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, OrderListQuery,
    UpdateOrder as DomainUpdateOrder,
};
use crate::models::order::{NewOrder as DbNewOrder, Order as DbOrder, UpdateOrder as DbUpdateOrder};
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .find(id)
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(DomainOrder::from))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(product_id) = query.product_id {
            items = items.filter(orders::product_id.eq(product_id));
        }

        let db_orders = items
            .order((orders::order_date.desc(), orders::id.desc()))
            .load::<DbOrder>(&mut conn)?;

        let total = db_orders.len();
        let orders = db_orders.into_iter().map(DomainOrder::from).collect();

        Ok((total, orders))
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let insertable = DbNewOrder::from(new_order);

        let created = diesel::insert_into(orders::table)
            .values(&insertable)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(created.into())
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrder,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateOrder::from(updates);

        let updated = diesel::update(orders::table.find(order_id))
            .set(&db_updates)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_order(&self, order_id: i32) -> RepositoryResult<()> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(orders::table.find(order_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
