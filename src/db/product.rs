use crate::db::DbError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

const COLUMNS: &str = "id, name, description, price, created_at, updated_at";

fn query_failed(err: sqlx::Error) -> DbError {
    match err {
        sqlx::Error::RowNotFound => DbError::RowNotFound,
        err => {
            tracing::error!("Failed to execute query: {:?}", err);
            err.into()
        }
    }
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Product>, DbError> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>(&format!(
        "SELECT {} FROM product ORDER BY id",
        COLUMNS
    ))
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(query_failed)
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<models::Product, DbError> {
    tracing::info!("Fetch product {}", id);
    let query_span = tracing::info_span!("Fetch product by id.");
    sqlx::query_as::<_, models::Product>(&format!(
        "SELECT {} FROM product WHERE id = $1 LIMIT 1",
        COLUMNS
    ))
    .bind(id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(query_failed)
}

pub async fn insert(
    pool: &PgPool,
    product: models::NewProduct,
) -> Result<models::Product, DbError> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(&format!(
        r#"
        INSERT INTO product (name, description, price, created_at, updated_at)
        VALUES ($1, $2, $3, NOW(), NOW())
        RETURNING {}
        "#,
        COLUMNS
    ))
    .bind(product.name)
    .bind(product.description)
    .bind(product.price)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|product| {
        tracing::info!("New {} has been saved to database", product);
        product
    })
    .map_err(query_failed)
}

/// Applies the fields set in `changes`. `updated_at` always moves.
pub async fn update(
    pool: &PgPool,
    id: i32,
    changes: models::ProductChanges,
) -> Result<models::Product, DbError> {
    let query_span = tracing::info_span!("Updating product");
    let description_sent = changes.description.is_some();
    sqlx::query_as::<_, models::Product>(&format!(
        r#"
        UPDATE product
        SET
            name = COALESCE($2, name),
            description = CASE WHEN $5 THEN $3 ELSE description END,
            price = COALESCE($4, price),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        COLUMNS
    ))
    .bind(id)
    .bind(changes.name)
    .bind(changes.description.flatten())
    .bind(changes.price)
    .bind(description_sent)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|product| {
        tracing::info!("Product {} has been updated", product.id);
        product
    })
    .map_err(query_failed)
}

#[tracing::instrument(name = "Deleting product from the database.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<(), DbError> {
    sqlx::query_scalar::<_, i32>("DELETE FROM product WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_one(pool)
        .await
        .map(|_| ())
        .map_err(query_failed)
}
