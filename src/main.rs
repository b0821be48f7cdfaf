use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use speedy_transfers_api::db::catalog::{CatalogStore, MongoCatalog};
use speedy_transfers_api::db::mongo::create_mongo_client;
use speedy_transfers_api::db::sales::{MongoSales, SalesStore};
use speedy_transfers_api::routes;
use speedy_transfers_api::services::asset_resolver::AssetResolver;
use speedy_transfers_api::services::notifier::{LogNotifier, Notifier};
use speedy_transfers_api::services::payment::gateway_from_env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let mongo_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = create_mongo_client(&mongo_uri).await;

    let catalog: Arc<dyn CatalogStore> = Arc::new(MongoCatalog::new(client.clone()));
    let sales: Arc<dyn SalesStore> = Arc::new(MongoSales::new(client.clone()));
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let gateway = gateway_from_env();
    let assets = AssetResolver::from_env();

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(sales.clone()))
            .app_data(web::Data::new(notifier.clone()))
            .app_data(web::Data::new(gateway.clone()))
            .app_data(web::Data::new(assets.clone()))
            .configure(routes::configure_api)
    })
    .bind((host, port))?
    .run()
    .await
}
