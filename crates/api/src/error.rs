use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tasknote_core::error::CoreError;

use crate::response::{ErrorInfo, ResponseEnvelope};

/// Application-level error type for the todo service and HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds infrastructure variants.
/// Handlers attach the request URL via [`AppError::at`] to produce a
/// response-ready [`ApiError`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tasknote-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Bind this error to the URL it occurred on.
    pub fn at(self, uri: &Uri) -> ApiError {
        ApiError {
            url: uri.to_string(),
            source: self,
        }
    }

    /// Map the error kind to an HTTP status and a client-facing message.
    ///
    /// Infrastructure failures are logged here and surface with a sanitized
    /// message; domain errors pass their message through.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Integrity(_) => {
                    tracing::error!(error = %core, "Record integrity violation");
                    (StatusCode::BAD_REQUEST, core.to_string())
                }
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

/// An [`AppError`] bound to the URL it occurred on.
///
/// Renders the `{data: null, errors: {url, error}}` envelope with the
/// status mapped from the error kind.
#[derive(Debug)]
pub struct ApiError {
    pub url: String,
    pub source: AppError,
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.source.status_and_message();
        let body = ResponseEnvelope::error(ErrorInfo {
            url: self.url,
            error: message,
        });
        (status, axum::Json(body)).into_response()
    }
}
