use crate::forms;
use crate::helpers::ApiError;
use crate::services::ProductService;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Update product.", skip(service))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::ProductUpdateForm>,
    service: web::Data<ProductService>,
) -> Result<impl Responder, ApiError> {
    if let Err(errors) = form.validate() {
        return Err(ApiError::Validation(errors.to_string()));
    }

    let (id,) = path.into_inner();
    tracing::debug!("Updating product {} with {:?}", id, form);

    service.update(id, form.into_inner()).await.map(web::Json)
}
