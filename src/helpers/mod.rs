mod api_error;
pub(crate) mod json;

pub use api_error::ApiError;
pub use json::JsonResponse;
