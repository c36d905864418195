//! Maps service errors onto JSON error responses.
//!
//! Bodies look like `{"code": "not_found", "error": "Account … not found"}`.
//! `code` is stable for clients to branch on; `error` is for humans. Storage
//! failures are logged and never echoed back.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use minibank_domain::error::MiniBankError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    error: String,
}

/// Handler error wrapping a [`MiniBankError`].
#[derive(Debug)]
pub struct ApiError(MiniBankError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            MiniBankError::Validation(_) => StatusCode::BAD_REQUEST,
            MiniBankError::NotFound(_) => StatusCode::NOT_FOUND,
            MiniBankError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match &self.0 {
            MiniBankError::Validation(err) => ErrorBody {
                code: "validation",
                error: err.to_string(),
            },
            MiniBankError::NotFound(err) => ErrorBody {
                code: "not_found",
                error: err.to_string(),
            },
            MiniBankError::Storage(_) => ErrorBody {
                code: "internal",
                error: "internal server error".to_string(),
            },
        }
    }
}

impl<E: Into<MiniBankError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            MiniBankError::Storage(err) => tracing::error!(error = %err, "storage error"),
            other => tracing::debug!(error = %other, "request rejected"),
        }
        (self.status(), Json(self.body())).into_response()
    }
}
