/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth.
 *
 * # Authentication Process
 *
 * 1. Validate email format and password presence
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Sign a JWT carrying the user id and return it
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 400 body, so the
 *   response does not reveal which accounts exist
 * - Passwords are never logged or returned
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::auth::validation::validate_login;
use crate::backend::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - validation errors, or `Invalid credentials`
/// * `500 Internal Server Error` - store, hashing or signing failure
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(store): State<Arc<dyn UserStore>>,
    State(tokens): State<Arc<TokenKeys>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(request) = payload?;
    let credentials = validate_login(request)?;
    tracing::info!("Login request for: {}", credentials.email);

    let user = store
        .find_by_email(&credentials.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", credentials.email);
            ApiError::InvalidCredentials
        })?;

    let email = user.email;
    if !verify_password(credentials.password, user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = tokens.create_token(user.id)?;
    tracing::info!("User logged in: {} ({})", user.id, email);

    Ok(Json(TokenResponse { token }))
}
