use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;
use pushkind_common::middleware::RedirectUnauthorized;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{logout, not_assigned};
use tera::Tera;

use pushkind_catalog::repository::DieselRepository;
use pushkind_catalog::routes::admin::{
    add_content, add_playlist, delete_content, delete_playlist, show_admin_index,
    show_content_changelist, show_playlist_changelist,
};
use pushkind_catalog::routes::api::json_config;
use pushkind_catalog::routes::categories::{
    api_create_category, api_delete_category, api_get_category, api_list_categories,
    api_update_category,
};
use pushkind_catalog::routes::main::show_index;
use pushkind_catalog::routes::orders::{
    api_create_order, api_delete_order, api_get_order, api_list_orders, api_update_order,
};
use pushkind_catalog::routes::product_details::{
    api_create_product_detail, api_delete_product_detail, api_get_product_detail,
    api_list_product_details, api_update_product_detail,
};
use pushkind_catalog::routes::products::{
    api_create_product, api_delete_product, api_get_product, api_list_product_categories,
    api_list_products, api_update_product,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = env::var("SECRET_KEY");
    let secret_key = match &secret {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => {
            log::warn!("SECRET_KEY not set, generating an ephemeral session key");
            Key::generate()
        }
    };

    let auth_service_url = match env::var("AUTH_SERVICE_URL") {
        Ok(auth_service_url) => auth_service_url,
        Err(_) => {
            log::error!("AUTH_SERVICE_URL environment variable not set");
            std::process::exit(1);
        }
    };

    let common_config = CommonServerConfig {
        secret: secret.unwrap_or_default(),
        auth_service_url,
    };

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    log::info!("Starting catalog server on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(json_config())
            .service(Files::new("/assets", "./assets"))
            .service(not_assigned)
            .service(
                web::scope("/api")
                    .service(api_list_products)
                    .service(api_create_product)
                    .service(api_get_product)
                    .service(api_update_product)
                    .service(api_delete_product)
                    .service(api_list_product_categories)
                    .service(api_list_orders)
                    .service(api_create_order)
                    .service(api_get_order)
                    .service(api_update_order)
                    .service(api_delete_order)
                    .service(api_list_categories)
                    .service(api_create_category)
                    .service(api_get_category)
                    .service(api_update_category)
                    .service(api_delete_category)
                    .service(api_list_product_details)
                    .service(api_create_product_detail)
                    .service(api_get_product_detail)
                    .service(api_update_product_detail)
                    .service(api_delete_product_detail),
            )
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_admin_index)
                    .service(show_content_changelist)
                    .service(add_content)
                    .service(delete_content)
                    .service(show_playlist_changelist)
                    .service(add_playlist)
                    .service(delete_playlist)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(common_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
