use crate::helpers::ApiError;
use crate::services::ProductService;
use actix_web::{delete, web, HttpResponse, Responder, Result};

#[tracing::instrument(name = "Delete product.", skip(service))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    service: web::Data<ProductService>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();
    service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
