//! Persistence client for products.
//!
//! Handlers and the service never see the pool: they go through
//! [`ProductRepository`], so tests can swap in the mock from `services::mock`.

use crate::db::{self, DbError};
use crate::models::{NewProduct, Product, ProductChanges};
use async_trait::async_trait;
use sqlx::PgPool;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, DbError>;

    /// `DbError::RowNotFound` when no product has this id.
    async fn find_one(&self, id: i32) -> Result<Product, DbError>;

    async fn create(&self, product: NewProduct) -> Result<Product, DbError>;

    /// `DbError::RowNotFound` when no product has this id.
    async fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, DbError>;

    /// `DbError::RowNotFound` when no product has this id.
    async fn delete(&self, id: i32) -> Result<(), DbError>;
}

/// Postgres-backed repository. One per process, shared by every worker.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DbError> {
        db::product::fetch_all(&self.pool).await
    }

    async fn find_one(&self, id: i32) -> Result<Product, DbError> {
        db::product::fetch(&self.pool, id).await
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbError> {
        db::product::insert(&self.pool, product).await
    }

    async fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, DbError> {
        db::product::update(&self.pool, id, changes).await
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        db::product::delete(&self.pool, id).await
    }
}
