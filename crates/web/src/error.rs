//! Unified error handling for the service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use loyalty_pro_core::EmailError;
use thiserror::Error;

use crate::session::SessionError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing the persisted session failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// A built-in account carries a malformed email address.
    #[error("Account error: {0}")]
    Account(#[from] EmailError),

    /// The credentials matched no account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Session(_) | Self::Account(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "request failed");
        }

        let status = match &self {
            Self::Session(_) | Self::Account(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(_) | Self::Account(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use super::*;
    use crate::session::StorageError;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AppError::BadRequest("passwords do not match".to_string()).to_string(),
            "Bad request: passwords do not match"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_storage_details_are_hidden() {
        let err = AppError::from(SessionError::from(StorageError::Io {
            key: "user".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "/secret/path"),
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Internal server error");
    }
}
