//! Unified error handling.
//!
//! Provides a unified `AppError` type that maps every failure onto the
//! response taxonomy: validation and conflicts are 400, auth failures are
//! 401/403, missing entities are 404, empty-cart checkouts are 400, and
//! anything else is a 500 whose details are logged but never surfaced to the
//! client. All route handlers return `Result<T, AppError>` and every error
//! body is `{"message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request fields.
    #[error("Bad request: {0}")]
    Validation(String),

    /// Duplicate unique key.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Session store failure.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but not an admin.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                _ => StatusCode::BAD_REQUEST,
            },
            Self::Checkout(err) => match err {
                CheckoutError::EmptyCart => StatusCode::BAD_REQUEST,
                CheckoutError::TotalOverflow | CheckoutError::Database(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Database(err) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::BAD_REQUEST,
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request error");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Validation(msg) | Self::Conflict(msg) => msg.clone(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                AuthError::EmailTaken => "An account with this email already exists".to_string(),
                AuthError::MissingField(field) => format!("{field} is required"),
                AuthError::InvalidEmail(_) => "Invalid email address".to_string(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::Repository(RepositoryError::NotFound) => "Not found".to_string(),
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Internal server error".to_string()
                }
            },
            Self::Checkout(CheckoutError::EmptyCart) => "Cart is empty".to_string(),
            Self::Database(RepositoryError::NotFound) => "Not found".to_string(),
            Self::Database(RepositoryError::Conflict(msg)) => msg.clone(),
            Self::NotFound(msg) => msg.clone(),
            Self::Unauthorized(msg) | Self::Forbidden(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::Validation("missing fields".to_string());
        assert_eq!(err.to_string(), "Bad request: missing fields");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(AppError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Conflict("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Unauthorized("x".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Forbidden("x".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::Internal("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_statuses() {
        assert_eq!(
            status_of(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Auth(AuthError::EmailTaken)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_empty_cart_is_bad_request() {
        assert_eq!(
            status_of(AppError::Checkout(CheckoutError::EmptyCart)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        assert_eq!(
            status_of(AppError::Database(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }
}
