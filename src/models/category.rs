use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

impl Category {
    pub fn into_domain(self, product_ids: Vec<i32>) -> DomainCategory {
        DomainCategory {
            id: self.id,
            name: self.name,
            product_ids,
        }
    }
}

impl From<(Category, Vec<i32>)> for DomainCategory {
    fn from(value: (Category, Vec<i32>)) -> Self {
        value.0.into_domain(value.1)
    }
}
