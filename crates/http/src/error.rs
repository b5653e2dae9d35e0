//! Error handling for the bookshelf HTTP layer

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Body shared by every failure response and by plain confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },

    /// The request body could not be extracted.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error from any failure, keeping its message as-is
    pub fn internal<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(anyhow::Error::new(error))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Rejected { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(
                error_id = %error_id,
                status_code = %status.as_u16(),
                error = %message,
                "request failed"
            );
        } else {
            tracing::warn!(
                error_id = %error_id,
                status_code = %status.as_u16(),
                error = %message,
                "request rejected"
            );
        }

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> MessageResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_mapping() {
        let response = AppError::not_found("Book with 42 not found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            MessageResponse::new("Book with 42 not found")
        );
    }

    #[tokio::test]
    async fn test_internal_error_keeps_message() {
        let error = AppError::from(anyhow::anyhow!("Database connection failed"));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.message, "Database connection failed");
    }

    #[tokio::test]
    async fn test_internal_from_std_error() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "store timed out");
        let response = AppError::internal(io).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.message, "store timed out");
    }

    #[test]
    fn test_rejected_keeps_status() {
        let error = AppError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        };
        assert_eq!(error.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
