use crate::configuration::DatabaseSettings;
use crate::helpers::ApiError;
use crate::routes;
use crate::services::{PgProductRepository, ProductRepository, ProductService};
use actix_web::{dev::Server, error, web, App, HttpServer};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn get_connection_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(settings.connect_options()?)
        .await
}

pub async fn migrate(pg_pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pg_pool).await
}

pub fn run(listener: TcpListener, pg_pool: PgPool) -> Result<Server, std::io::Error> {
    // the single persistence client, shared by every worker
    let repository: Arc<dyn ProductRepository> = Arc::new(PgProductRepository::new(pg_pool));
    let product_service = web::Data::new(ProductService::new(repository));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(product_service.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Routes and extractor settings. Expects `web::Data<ProductService>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid body at line {} column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => format!("Invalid body: {}", err),
        };
        tracing::debug!("Rejected request body: {}", msg);
        ApiError::Validation(msg).into()
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        ApiError::Validation(format!("Validation failed (numeric id is expected): {}", err)).into()
    });

    cfg.app_data(json_config)
        .app_data(path_config)
        .service(web::scope("/health_check").service(routes::health_check))
        .service(
            web::scope("/products")
                .service(routes::product::get::list)
                .service(routes::product::get::item)
                .service(routes::product::add::add)
                .service(routes::product::update::item)
                .service(routes::product::delete::item),
        );
}
