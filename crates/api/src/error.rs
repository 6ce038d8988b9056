use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trackflow_core::CoreError;

use crate::runner::DispatchError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the service's
/// `{ "error": ..., "success": false }` JSON error shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trackflow-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be parsed at all.
    #[error("Malformed request body: {0}")]
    MalformedPayload(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::MissingToken => {
                AppError::Core(CoreError::Configuration(err.to_string()))
            }
            DispatchError::Request(_) | DispatchError::Rejected { .. } => {
                AppError::Core(CoreError::Upstream(err.to_string()))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Configuration(msg) => {
                    tracing::error!(error = %msg, "Dispatch configuration error");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
                CoreError::Upstream(msg) => {
                    tracing::error!(error = %msg, "Upstream job-runner error");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
            AppError::MalformedPayload(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "success": false,
        });

        (status, axum::Json(body)).into_response()
    }
}
