use crate::db::{sqlstate, DbError};
use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rejected request body or path, before any persistence call.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid reference")]
    InvalidReference,
    #[error("Invalid input")]
    InvalidInput,
    /// Anything the translator does not recognise, carried unchanged.
    #[error(transparent)]
    Persistence(DbError),
}

impl ApiError {
    /// Maps the known persistence failures of a write on `resource` to HTTP semantics.
    pub fn from_persistence(err: DbError, resource: &str) -> Self {
        if let DbError::RowNotFound = err {
            return ApiError::NotFound(format!("{} not found", resource));
        }

        let translated = match err.code() {
            Some(sqlstate::UNIQUE_VIOLATION) => {
                Some(ApiError::Conflict(format!("{} already exists", resource)))
            }
            Some(sqlstate::FOREIGN_KEY_VIOLATION) => Some(ApiError::InvalidReference),
            // class 22 data exception, class 23 integrity constraint violation
            Some(code) if code.starts_with("22") || code.starts_with("23") => {
                Some(ApiError::InvalidInput)
            }
            _ => None,
        };

        translated.unwrap_or(ApiError::Persistence(err))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidReference | ApiError::InvalidInput => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::NotFound(msg) => JsonResponse::not_found(msg),
            ApiError::Conflict(msg) => JsonResponse::conflict(msg),
            ApiError::Validation(msg) => JsonResponse::not_valid(msg),
            ApiError::InvalidReference | ApiError::InvalidInput => {
                JsonResponse::not_valid(&self.to_string())
            }
            ApiError::Persistence(err) => {
                tracing::error!("Unhandled persistence error: {:?}", err);
                JsonResponse::internal_error("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
