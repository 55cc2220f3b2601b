//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use shutterbook_domain::error::{GatewayError, ShutterError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ShutterError`] to an HTTP response with appropriate status code.
pub struct ApiError(ShutterError);

impl From<ShutterError> for ApiError {
    fn from(err: ShutterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ShutterError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ShutterError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ShutterError::Gateway(err @ GatewayError::AlreadySettled { .. }) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            ShutterError::Gateway(err @ GatewayError::Unavailable(_)) => {
                tracing::warn!(error = %err, "payment gateway failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "payment provider unavailable".to_string(),
                )
            }
            ShutterError::Storage(err) => {
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
