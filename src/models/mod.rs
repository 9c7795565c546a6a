pub mod category;
pub mod category_product;
pub mod content;
pub mod order;
pub mod playlist;
pub mod product;
pub mod product_detail;
