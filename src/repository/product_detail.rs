use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::product_detail::{
    NewProductDetail as DomainNewProductDetail, ProductDetail as DomainProductDetail,
    UpdateProductDetail as DomainUpdateProductDetail,
};
use crate::models::product_detail::{
    NewProductDetail as DbNewProductDetail, ProductDetail as DbProductDetail,
    UpdateProductDetail as DbUpdateProductDetail,
};
use crate::repository::{DieselRepository, ProductDetailReader, ProductDetailWriter};

impl ProductDetailReader for DieselRepository {
    fn get_product_detail_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProductDetail>> {
        use crate::schema::product_details;

        let mut conn = self.conn()?;
        let detail = product_details::table
            .find(id)
            .first::<DbProductDetail>(&mut conn)
            .optional()?;

        Ok(detail.map(DomainProductDetail::from))
    }

    fn get_product_detail_by_product(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Option<DomainProductDetail>> {
        use crate::schema::product_details;

        let mut conn = self.conn()?;
        let detail = product_details::table
            .filter(product_details::product_id.eq(product_id))
            .first::<DbProductDetail>(&mut conn)
            .optional()?;

        Ok(detail.map(DomainProductDetail::from))
    }

    fn list_product_details(&self) -> RepositoryResult<(usize, Vec<DomainProductDetail>)> {
        use crate::schema::product_details;

        let mut conn = self.conn()?;
        let details = product_details::table
            .order(product_details::id.asc())
            .load::<DbProductDetail>(&mut conn)?;

        let total = details.len();
        Ok((
            total,
            details.into_iter().map(DomainProductDetail::from).collect(),
        ))
    }
}

impl ProductDetailWriter for DieselRepository {
    fn create_product_detail(
        &self,
        new_detail: &DomainNewProductDetail,
    ) -> RepositoryResult<DomainProductDetail> {
        use crate::schema::product_details;

        let mut conn = self.conn()?;
        let insertable = DbNewProductDetail::from(new_detail);

        let created = diesel::insert_into(product_details::table)
            .values(&insertable)
            .get_result::<DbProductDetail>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product_detail(
        &self,
        detail_id: i32,
        updates: &DomainUpdateProductDetail,
    ) -> RepositoryResult<DomainProductDetail> {
        use crate::schema::product_details;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProductDetail::from(updates);

        let updated = diesel::update(product_details::table.find(detail_id))
            .set(&db_updates)
            .get_result::<DbProductDetail>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product_detail(&self, detail_id: i32) -> RepositoryResult<()> {
        use crate::schema::product_details;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(product_details::table.find(detail_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
