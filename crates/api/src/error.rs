use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use serde_json::json;

/// Error type returned by every handler in this crate.
///
/// Domain failures arrive as [`CoreError`] through `#[from]`; the remaining
/// variants cover rejections that only exist at the HTTP boundary. The
/// [`IntoResponse`] impl renders all of them as the same JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Rejected input, with the reason echoed back to the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A server-side failure. The message is logged, never sent.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result alias used by all handlers.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Malformed request bodies (missing or mistyped fields, unknown fields,
/// bad syntax, wrong content type) all surface as 400 Bad Request, carrying
/// the deserializer's message.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
