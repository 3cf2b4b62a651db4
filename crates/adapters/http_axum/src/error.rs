//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use panstock_domain::error::StockError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`StockError`] to an HTTP response with appropriate status code.
pub struct ApiError(StockError);

impl From<StockError> for ApiError {
    fn from(err: StockError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StockError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StockError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            StockError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
