/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It reads the JWT from the `x-auth-token` header,
 * verifies it, and provides the user ID to handlers.
 *
 * - No header, or an empty one: 401 `Authorization denied`
 * - Header present but the token does not verify: 401 `Invalid token`
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::ApiError;

/// Header carrying the bearer token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the token from the `x-auth-token` header
/// 2. Verifies the token
/// 3. Attaches the user id to request extensions for use in handlers
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(&tokens, &request)?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Resolve the caller's identity from request headers
fn authenticate(tokens: &TokenKeys, request: &Request) -> Result<AuthenticatedUser, ApiError> {
    let header = match request.headers().get(AUTH_TOKEN_HEADER) {
        Some(value) if !value.is_empty() => value,
        _ => {
            tracing::warn!("Missing {} header", AUTH_TOKEN_HEADER);
            return Err(ApiError::Unauthenticated);
        }
    };

    let token = header.to_str().map_err(|_| {
        tracing::warn!("Non-ASCII {} header", AUTH_TOKEN_HEADER);
        ApiError::InvalidToken
    })?;

    let claims = tokens.verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::InvalidToken
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.user.id,
    })
}

/// Axum extractor for authenticated user
///
/// Use behind `auth_middleware`. If the middleware did not run, extraction
/// fails with 401 `Authorization denied`.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
