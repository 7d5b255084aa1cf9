use catalog::configuration::get_configuration;
use catalog::startup::{get_connection_pool, migrate, run};
use catalog::telemetry::{get_subscriber, init_subscriber, DEFAULT_FILTER};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("catalog".into(), DEFAULT_FILTER.into(), std::io::stdout);
    init_subscriber(subscriber).expect("Failed to set up logging.");

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        from_database_url = settings.database.url.is_some(),
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.database_name,
        "Connecting to PostgreSQL"
    );

    let pg_pool = get_connection_pool(&settings.database)
        .await
        .expect("Failed to connect to database.");

    migrate(&pg_pool).await.expect("Failed to run migrations.");

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|err| panic!("failed to bind to {}: {}", address, err));

    run(listener, pg_pool)?.await
}
