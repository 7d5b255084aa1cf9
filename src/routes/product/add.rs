use crate::forms;
use crate::helpers::ApiError;
use crate::services::ProductService;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add product.", skip(service))]
#[post("")]
pub async fn add(
    form: web::Json<forms::ProductForm>,
    service: web::Data<ProductService>,
) -> Result<impl Responder, ApiError> {
    if let Err(errors) = form.validate() {
        let errors = errors.to_string();
        tracing::debug!("Invalid data received {:?}", &errors);
        return Err(ApiError::Validation(errors));
    }

    let product = service.create(form.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}
