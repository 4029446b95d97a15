//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use nzwalks_domain::error::NzWalksError;

/// JSON error body returned for rejected requests.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`NzWalksError`] to an HTTP response with appropriate status code.
///
/// Not-found answers carry an empty body.
#[derive(Debug)]
pub struct ApiError(NzWalksError);

impl From<NzWalksError> for ApiError {
    fn from(err: NzWalksError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            NzWalksError::NotFound(err) => {
                tracing::debug!(error = %err, "not found");
                StatusCode::NOT_FOUND.into_response()
            }
            NzWalksError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            NzWalksError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
