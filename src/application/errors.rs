use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::domain::errors::BackendError;

/// Failures that end a request with a 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("failed to render placeholder: {0}")]
    Placeholder(#[from] image::ImageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");

        let body = match self {
            ApiError::Backend(BackendError::Transport(_)) => StatusCode::INTERNAL_SERVER_ERROR
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            // Decode failures and encoder failures report their own message.
            other => other.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
