use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::content::{
    Content as DomainContent, ContentField, ContentListQuery, NewContent as DomainNewContent,
};
use crate::domain::{SortDirection, SortKey};
use crate::models::content::{Content as DbContent, NewContent as DbNewContent};
use crate::repository::{
    ContentReader, ContentWriter, DieselRepository, LIKE_ESCAPE, page_window, search_patterns,
};
use crate::schema::contents;

type ContentPredicate = Box<dyn BoxableExpression<contents::table, Sqlite, SqlType = Bool>>;

impl ContentReader for DieselRepository {
    fn get_content_by_id(&self, id: i32) -> RepositoryResult<Option<DomainContent>> {
        let mut conn = self.conn()?;

        let content = contents::table
            .find(id)
            .first::<DbContent>(&mut conn)
            .optional()?;

        Ok(content.map(DomainContent::from))
    }

    fn list_contents(
        &self,
        query: ContentListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainContent>)> {
        let mut conn = self.conn()?;

        let total = filtered_contents(&query)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered_contents(&query);

        for key in &query.ordering {
            items = order_contents(items, key);
        }
        items = items.then_order_by(contents::id.desc());

        if let Some(pagination) = &query.pagination {
            let (offset, limit) = page_window(pagination);
            items = items.offset(offset).limit(limit);
        }

        let db_contents = items.load::<DbContent>(&mut conn)?;

        Ok((
            total,
            db_contents.into_iter().map(DomainContent::from).collect(),
        ))
    }

    fn list_content_types(&self) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;

        let types = contents::table
            .select(contents::content_type)
            .distinct()
            .order(contents::content_type.asc())
            .load::<String>(&mut conn)?;

        Ok(types)
    }
}

impl ContentWriter for DieselRepository {
    fn create_content(&self, new_content: &DomainNewContent) -> RepositoryResult<DomainContent> {
        let mut conn = self.conn()?;
        let insertable = DbNewContent::from(new_content);

        let created = diesel::insert_into(contents::table)
            .values(&insertable)
            .get_result::<DbContent>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_content(&self, content_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(contents::table.find(content_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Base query with the search terms and the exact-match filters of `query` applied.
///
/// Every whitespace-separated term must match at least one search field.
fn filtered_contents(query: &ContentListQuery) -> contents::BoxedQuery<'static, Sqlite> {
    let mut items = contents::table.into_boxed::<Sqlite>();

    for pattern in search_patterns(query.search.as_deref()) {
        if let Some(predicate) = search_predicate(&query.search_fields, &pattern) {
            items = items.filter(predicate);
        }
    }

    if let Some(content_type) = query.content_type.as_ref() {
        items = items.filter(contents::content_type.eq(content_type.clone()));
    }

    if let Some(is_public) = query.is_public {
        items = items.filter(contents::is_public.eq(is_public));
    }

    items
}

/// OR of a `LIKE` match of `pattern` against every text field in `fields`.
fn search_predicate(fields: &[ContentField], pattern: &str) -> Option<ContentPredicate> {
    fields
        .iter()
        .filter_map(|field| like_predicate(*field, pattern))
        .reduce(|acc, next| Box::new(acc.or(next)))
}

fn like_predicate(field: ContentField, pattern: &str) -> Option<ContentPredicate> {
    let pattern = pattern.to_owned();
    let predicate: ContentPredicate = match field {
        ContentField::Title => Box::new(contents::title.like(pattern).escape(LIKE_ESCAPE)),
        ContentField::FileUrl => Box::new(contents::file_url.like(pattern).escape(LIKE_ESCAPE)),
        ContentField::ContentType => {
            Box::new(contents::content_type.like(pattern).escape(LIKE_ESCAPE))
        }
        ContentField::Description => {
            Box::new(contents::description.like(pattern).escape(LIKE_ESCAPE))
        }
        ContentField::Id | ContentField::IsPublic | ContentField::UploadDate => return None,
    };
    Some(predicate)
}

fn order_contents(
    items: contents::BoxedQuery<'static, Sqlite>,
    key: &SortKey<ContentField>,
) -> contents::BoxedQuery<'static, Sqlite> {
    macro_rules! by {
        ($column:expr) => {
            match key.direction {
                SortDirection::Ascending => items.then_order_by($column.asc()),
                SortDirection::Descending => items.then_order_by($column.desc()),
            }
        };
    }

    match key.field {
        ContentField::Id => by!(contents::id),
        ContentField::Title => by!(contents::title),
        ContentField::FileUrl => by!(contents::file_url),
        ContentField::ContentType => by!(contents::content_type),
        ContentField::IsPublic => by!(contents::is_public),
        ContentField::UploadDate => by!(contents::upload_date),
        ContentField::Description => by!(contents::description),
    }
}
