use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotFound | CartError::CartNotFound | CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::StoreUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        // Display strings are i18n codes; store errors show only the generic one.
        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
