//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - the `x-auth-token` gate for protected routes, plus the
//!   `AuthUser` extractor handlers use to read the caller's id
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use authgate::backend::auth::sessions::{TokenKeys, DEFAULT_TOKEN_TTL};
//! use authgate::backend::middleware::{auth_middleware, AuthUser};
//!
//! async fn whoami(AuthUser(user): AuthUser) -> String {
//!     user.user_id.to_string()
//! }
//!
//! let tokens = Arc::new(TokenKeys::new(b"secret", DEFAULT_TOKEN_TTL));
//! let app: Router = Router::new()
//!     .route("/whoami", get(whoami))
//!     .route_layer(from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser, AUTH_TOKEN_HEADER};
