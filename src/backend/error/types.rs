/**
 * API Error Types
 *
 * This module defines the single error type returned by every handler and
 * by the authentication middleware. Each variant maps to exactly one HTTP
 * status and response body (see `conversion.rs`).
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - one or more request fields failed validation (400)
 * - `InvalidCredentials` - unknown email or wrong password (400)
 * - `UserExists` - the email is already registered (400)
 * - `Unauthenticated` / `InvalidToken` - missing or bad `x-auth-token` (401)
 * - `UserNotFound` - the token's user no longer exists (404)
 *
 * ## Server Errors
 *
 * `Store`, `Password` and `Token` wrap library failures. They all render as
 * a generic 500 "Server error"; the cause is only logged.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::users::StoreError;
use crate::backend::auth::validation::FieldError;

/// Errors surfaced at the handler boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failures, reported all at once
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// No token was presented
    #[error("authorization denied: no token")]
    Unauthenticated,

    /// A token was presented but did not verify
    #[error("invalid token")]
    InvalidToken,

    /// Login failed; deliberately does not say whether email or password was wrong
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already taken
    #[error("user already exists")]
    UserExists,

    /// Authenticated user id has no record
    #[error("user not found")]
    UserNotFound,

    /// Credential store failure
    #[error("store error: {0}")]
    Store(StoreError),

    /// Password hashing or verification failure
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Token signing failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `InvalidCredentials`, `UserExists` - 400 Bad Request
    /// - `Unauthenticated`, `InvalidToken` - 401 Unauthorized
    /// - `UserNotFound` - 404 Not Found
    /// - `Store`, `Password`, `Token` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidCredentials | Self::UserExists => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Password(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for errors whose cause must stay server-side
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // The store caught a concurrent registration of the same email.
            StoreError::Duplicate => Self::UserExists,
            other => Self::Store(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![FieldError::general(rejection.body_text())])
    }
}
