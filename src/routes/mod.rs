pub mod admin;
pub mod api;
pub mod categories;
pub mod main;
pub mod orders;
pub mod product_details;
pub mod products;
