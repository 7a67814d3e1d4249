/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth, which returns the
 * currently authenticated user.
 *
 * The route sits behind `auth_middleware`; the user id comes from the
 * request extensions via the `AuthUser` extractor. The response never
 * includes the password hash.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::users::{PublicUser, UserStore};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - rejected by the middleware before reaching here
/// * `404 Not Found` - the token's user no longer exists
/// * `500 Internal Server Error` - store read failure
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Ada",
///   "email": "ada@example.com",
///   "avatar": "https://www.gravatar.com/avatar/...?s=200&r=pg&d=mm",
///   "date": "2024-06-01T12:00:00Z"
/// }
/// ```
pub async fn get_me(
    State(store): State<Arc<dyn UserStore>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = store.find_by_id(auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", auth.user_id);
        ApiError::UserNotFound
    })?;

    Ok(Json(PublicUser::from(user)))
}
