use actix_web::http::StatusCode;
use serde_derive::Serialize;

/// Envelope for every error body: `{"status": "Error", "message": ..., "code": ...}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: String,
    pub message: String,
    pub code: u16,
}

impl JsonResponse {
    fn error(code: StatusCode, message: &str, fallback: &str) -> Self {
        let msg = if !message.trim().is_empty() {
            message.to_string()
        } else {
            String::from(fallback)
        };

        JsonResponse {
            status: "Error".to_string(),
            message: msg,
            code: code.as_u16(),
        }
    }

    pub fn not_valid(message: &str) -> Self {
        Self::error(StatusCode::BAD_REQUEST, message, "Validation error")
    }

    pub fn not_found(message: &str) -> Self {
        Self::error(StatusCode::NOT_FOUND, message, "Object not found")
    }

    pub fn conflict(message: &str) -> Self {
        Self::error(StatusCode::CONFLICT, message, "Conflict")
    }

    pub fn internal_error(message: &str) -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message, "Internal error")
    }
}
