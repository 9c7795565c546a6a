use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, ContentReader, ContentWriter, OrderReader, OrderWriter,
    PlaylistReader, PlaylistWriter, ProductDetailReader, ProductDetailWriter, ProductReader,
    ProductWriter,
};
use crate::domain::{
    category::{Category, NewCategory, UpdateCategory},
    content::{Content, ContentListQuery, NewContent},
    order::{NewOrder, Order, OrderListQuery, UpdateOrder},
    playlist::{NewPlaylist, Playlist, PlaylistListQuery},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    product_detail::{NewProductDetail, ProductDetail, UpdateProductDetail},
};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn find_missing_products(&self, ids: &[i32]) -> RepositoryResult<Vec<i32>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderRepository {}

    impl ProductReader for OrderRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn find_missing_products(&self, ids: &[i32]) -> RepositoryResult<Vec<i32>>;
    }

    impl OrderReader for OrderRepository {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }

    impl OrderWriter for OrderRepository {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
        fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CategoryRepository {}

    impl ProductReader for CategoryRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn find_missing_products(&self, ids: &[i32]) -> RepositoryResult<Vec<i32>>;
    }

    impl CategoryReader for CategoryRepository {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self) -> RepositoryResult<(usize, Vec<Category>)>;
        fn list_categories_for_product(&self, product_id: i32) -> RepositoryResult<Vec<Category>>;
    }

    impl CategoryWriter for CategoryRepository {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductDetailRepository {}

    impl ProductReader for ProductDetailRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn find_missing_products(&self, ids: &[i32]) -> RepositoryResult<Vec<i32>>;
    }

    impl ProductDetailReader for ProductDetailRepository {
        fn get_product_detail_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetail>>;
        fn get_product_detail_by_product(&self, product_id: i32) -> RepositoryResult<Option<ProductDetail>>;
        fn list_product_details(&self) -> RepositoryResult<(usize, Vec<ProductDetail>)>;
    }

    impl ProductDetailWriter for ProductDetailRepository {
        fn create_product_detail(&self, new_detail: &NewProductDetail) -> RepositoryResult<ProductDetail>;
        fn update_product_detail(&self, detail_id: i32, updates: &UpdateProductDetail) -> RepositoryResult<ProductDetail>;
        fn delete_product_detail(&self, detail_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ContentReader {}

    impl ContentReader for ContentReader {
        fn get_content_by_id(&self, id: i32) -> RepositoryResult<Option<Content>>;
        fn list_contents(&self, query: ContentListQuery) -> RepositoryResult<(usize, Vec<Content>)>;
        fn list_content_types(&self) -> RepositoryResult<Vec<String>>;
    }
}

mock! {
    pub ContentWriter {}

    impl ContentWriter for ContentWriter {
        fn create_content(&self, new_content: &NewContent) -> RepositoryResult<Content>;
        fn delete_content(&self, content_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub PlaylistReader {}

    impl PlaylistReader for PlaylistReader {
        fn get_playlist_by_id(&self, id: i32) -> RepositoryResult<Option<Playlist>>;
        fn list_playlists(&self, query: PlaylistListQuery) -> RepositoryResult<(usize, Vec<Playlist>)>;
    }
}

mock! {
    pub PlaylistWriter {}

    impl PlaylistWriter for PlaylistWriter {
        fn create_playlist(&self, new_playlist: &NewPlaylist) -> RepositoryResult<Playlist>;
        fn delete_playlist(&self, playlist_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductRepository {}

    impl ProductReader for ProductRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn find_missing_products(&self, ids: &[i32]) -> RepositoryResult<Vec<i32>>;
    }

    impl ProductWriter for ProductRepository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}
