#![allow(dead_code)]

use catalog::configuration::{get_configuration, DatabaseSettings};
use catalog::models;
use chrono::{DateTime, Utc};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use std::sync::Once;

static TRACING: Once = Once::new();

// Logs are swallowed unless TEST_LOG is set.
fn init_tracing() {
    TRACING.call_once(|| {
        let name = "test".to_string();
        let filter = catalog::telemetry::DEFAULT_FILTER.to_string();
        let installed = if std::env::var("TEST_LOG").is_ok() {
            catalog::telemetry::init_subscriber(catalog::telemetry::get_subscriber(
                name,
                filter,
                std::io::stdout,
            ))
        } else {
            catalog::telemetry::init_subscriber(catalog::telemetry::get_subscriber(
                name,
                filter,
                std::io::sink,
            ))
        };
        installed.expect("Failed to set up logging");
    });
}

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Inserts straight into the table, bypassing the HTTP layer.
    pub async fn insert_product(
        &self,
        name: &str,
        description: Option<&str>,
        price: i32,
    ) -> models::Product {
        catalog::db::product::insert(
            &self.db_pool,
            models::NewProduct {
                name: name.to_string(),
                description: description.map(str::to_string),
                price,
            },
        )
        .await
        .expect("Failed to insert product")
    }
}

// Starts the server on a random port against a fresh database.
// Returns None when postgres is unreachable so the calling test can skip.
pub async fn spawn_app() -> Option<TestApp> {
    init_tracing();

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_configuration().expect("Failed to get configuration");
    let database_name = uuid::Uuid::new_v4().to_string();

    let db_pool = match configure_database(&configuration.database, &database_name).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server =
        catalog::startup::run(listener, db_pool.clone()).expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool,
        client: reqwest::Client::new(),
    })
}

pub async fn configure_database(
    config: &DatabaseSettings,
    database_name: &str,
) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect_with(&config.without_db()?).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, database_name).as_str())
        .await?;

    let connection_pool =
        PgPool::connect_with(config.connect_options()?.database(database_name)).await?;

    catalog::startup::migrate(&connection_pool).await?;

    Ok(connection_pool)
}

/// True when `value` is an RFC 3339 timestamp within `max_seconds` of now.
pub fn is_recent(value: &serde_json::Value, max_seconds: i64) -> bool {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|at| (Utc::now() - at.with_timezone(&Utc)).num_seconds().abs() <= max_seconds)
        .unwrap_or(false)
}
