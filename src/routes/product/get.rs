use crate::helpers::ApiError;
use crate::services::ProductService;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get product.", skip(service))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    service: web::Data<ProductService>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();
    service.find_one(id).await.map(web::Json)
}

#[tracing::instrument(name = "Get all products.", skip(service))]
#[get("")]
pub async fn list(service: web::Data<ProductService>) -> Result<impl Responder, ApiError> {
    service.find_all().await.map(web::Json)
}
