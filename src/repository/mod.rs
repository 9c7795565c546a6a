use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::pagination::Pagination;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::{
    category::{Category, NewCategory, UpdateCategory},
    content::{Content, ContentListQuery, NewContent},
    order::{NewOrder, Order, OrderListQuery, UpdateOrder},
    playlist::{NewPlaylist, Playlist, PlaylistListQuery},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    product_detail::{NewProductDetail, ProductDetail, UpdateProductDetail},
};

pub mod category;
pub mod content;
pub mod order;
pub mod playlist;
pub mod product;
pub mod product_detail;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Return the subset of `ids` that do not match a stored product, in input order.
    fn find_missing_products(&self, ids: &[i32]) -> RepositoryResult<Vec<i32>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    /// Delete a product together with its orders, its details and its category links.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over order records.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}

/// Write operations over order records.
pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over categories and their product associations.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<(usize, Vec<Category>)>;
    /// Categories associated with `product_id`, the reverse side of the association.
    fn list_categories_for_product(&self, product_id: i32) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over categories and their product associations.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product detail records.
pub trait ProductDetailReader {
    fn get_product_detail_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetail>>;
    fn get_product_detail_by_product(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Option<ProductDetail>>;
    fn list_product_details(&self) -> RepositoryResult<(usize, Vec<ProductDetail>)>;
}

/// Write operations over product detail records.
pub trait ProductDetailWriter {
    fn create_product_detail(
        &self,
        new_detail: &NewProductDetail,
    ) -> RepositoryResult<ProductDetail>;
    fn update_product_detail(
        &self,
        detail_id: i32,
        updates: &UpdateProductDetail,
    ) -> RepositoryResult<ProductDetail>;
    fn delete_product_detail(&self, detail_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over content records.
pub trait ContentReader {
    fn get_content_by_id(&self, id: i32) -> RepositoryResult<Option<Content>>;
    fn list_contents(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Content>)>;
    /// Distinct content types currently stored, sorted alphabetically.
    fn list_content_types(&self) -> RepositoryResult<Vec<String>>;
}

/// Write operations over content records.
pub trait ContentWriter {
    fn create_content(&self, new_content: &NewContent) -> RepositoryResult<Content>;
    fn delete_content(&self, content_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over playlist records.
pub trait PlaylistReader {
    fn get_playlist_by_id(&self, id: i32) -> RepositoryResult<Option<Playlist>>;
    fn list_playlists(&self, query: PlaylistListQuery)
    -> RepositoryResult<(usize, Vec<Playlist>)>;
}

/// Write operations over playlist records.
pub trait PlaylistWriter {
    fn create_playlist(&self, new_playlist: &NewPlaylist) -> RepositoryResult<Playlist>;
    fn delete_playlist(&self, playlist_id: i32) -> RepositoryResult<()>;
}

/// Escape character used by the `LIKE` patterns built in this module.
pub(crate) const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching `term` as a literal substring.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Whitespace-separated terms of a search query, each one as a `LIKE` pattern.
pub(crate) fn search_patterns(search: Option<&str>) -> Vec<String> {
    search
        .map(|search| search.split_whitespace().map(contains_pattern).collect())
        .unwrap_or_default()
}

/// `OFFSET` and `LIMIT` of a page, saturating instead of overflowing.
pub(crate) fn page_window(pagination: &Pagination) -> (i64, i64) {
    let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
    let offset = pagination
        .page
        .saturating_sub(1)
        .checked_mul(pagination.per_page)
        .and_then(|offset| i64::try_from(offset).ok())
        .unwrap_or(i64::MAX);
    (offset, limit)
}
