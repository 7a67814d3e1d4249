/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password (all errors reported together)
 * 2. Reject if a user with the email already exists
 * 3. Derive the Gravatar URL from the email
 * 4. Hash the password with bcrypt (cost 10, random salt)
 * 5. Persist the user
 *
 * No token is issued here; clients log in separately.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::avatar::avatar_url;
use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{NewUser, UserStore};
use crate::backend::auth::validation::validate_registration;
use crate::backend::error::ApiError;

/// Body returned on successful registration
pub const REGISTERED: &str = "User registered";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - validation errors, or `User already exists`
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Ada", "email": "ada@example.com", "password": "Abc123!" }
/// ```
pub async fn register(
    State(store): State<Arc<dyn UserStore>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(request) = payload?;
    let registration = validate_registration(request)?;
    tracing::info!("Registration request for: {}", registration.email);

    if store.find_by_email(&registration.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", registration.email);
        return Err(ApiError::UserExists);
    }

    let avatar = avatar_url(&registration.email);
    let password_hash = hash_password(registration.password).await?;

    let user = store
        .insert(NewUser {
            name: registration.name,
            email: registration.email,
            password_hash,
            avatar,
        })
        .await?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok(REGISTERED)
}
