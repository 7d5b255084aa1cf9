use crate::db::DbError;
use crate::forms::{ProductForm, ProductUpdateForm};
use crate::helpers::ApiError;
use crate::models::Product;
use crate::services::ProductRepository;
use std::sync::Arc;

const RESOURCE: &str = "Product";

/// One repository call per method; persistence errors are translated here and nowhere else.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> Result<Vec<Product>, ApiError> {
        self.repository
            .find_all()
            .await
            .map_err(ApiError::Persistence)
    }

    /// Only a missing row is translated; every other failure is returned as is.
    pub async fn find_one(&self, id: i32) -> Result<Product, ApiError> {
        self.repository.find_one(id).await.map_err(|err| match err {
            DbError::RowNotFound => ApiError::NotFound("Not found".to_string()),
            err => ApiError::Persistence(err),
        })
    }

    pub async fn create(&self, form: ProductForm) -> Result<Product, ApiError> {
        self.repository
            .create(form.into())
            .await
            .map_err(|err| ApiError::from_persistence(err, RESOURCE))
    }

    pub async fn update(&self, id: i32, form: ProductUpdateForm) -> Result<Product, ApiError> {
        self.repository
            .update(id, form.into())
            .await
            .map_err(|err| ApiError::from_persistence(err, RESOURCE))
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| ApiError::from_persistence(err, RESOURCE))
    }
}
