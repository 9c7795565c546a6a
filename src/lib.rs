pub mod admin;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod serializers;
pub mod services;

/// Role required by every API endpoint and admin page.
pub const SERVICE_ACCESS_ROLE: &str = "admin";
