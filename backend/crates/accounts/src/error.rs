//! Accounts Error Types
//!
//! This module provides accounts-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Accounts-specific error variants
///
/// Taxonomy: validation (malformed/duplicate input), challenge (OTP),
/// credential (login), auth (token gate), infrastructure (store/mail).
/// Infrastructure errors are the only ones a caller may reasonably retry.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Email already has an account
    #[error("already registered")]
    AlreadyRegistered,

    /// OTP challenge missing, expired, or mismatched.
    /// Deliberately collapsed into one caller-visible rejection.
    #[error("invalid or expired code")]
    InvalidOtp,

    /// Login failed. Covers both an unknown email and a wrong password,
    /// with an identical response shape (no account enumeration).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("no token")]
    MissingToken,

    /// Bearer token tampered or expired
    #[error("invalid token")]
    InvalidToken,

    /// Malformed input (email format, missing fields)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Password policy violation
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// OTP email could not be delivered
    #[error("delivery failed")]
    DeliveryFailed,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::AlreadyRegistered
            | AccountError::InvalidOtp
            | AccountError::Validation(_)
            | AccountError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::MissingToken | AccountError::InvalidToken => StatusCode::FORBIDDEN,
            AccountError::DeliveryFailed
            | AccountError::Database(_)
            | AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::AlreadyRegistered
            | AccountError::InvalidOtp
            | AccountError::Validation(_)
            | AccountError::PasswordValidation(_) => ErrorKind::BadRequest,
            AccountError::InvalidCredentials => ErrorKind::Unauthorized,
            AccountError::MissingToken | AccountError::InvalidToken => ErrorKind::Forbidden,
            AccountError::DeliveryFailed
            | AccountError::Database(_)
            | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountError::DeliveryFailed => {
                tracing::error!("OTP email delivery failed");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AccountError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::Rejected => AccountError::InvalidToken,
            platform::token::TokenError::IssueFailed(msg) => AccountError::Internal(msg),
        }
    }
}
