use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// The scorer itself is total and cannot fail, so the only error path is
/// the request-deserialization boundary. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed JSON deserialization (malformed JSON,
    /// missing fields, or non-numeric values).
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Keep axum's status distinction: 400 for malformed JSON,
            // 422 for type/shape errors, 415 for a missing content type.
            ApiError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
