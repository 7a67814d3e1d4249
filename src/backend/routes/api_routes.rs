/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `POST /api/users` - User registration (public)
 * - `POST /api/auth` - User login (public)
 * - `GET /api/auth` - Current user info (requires `x-auth-token`)
 *
 * The auth middleware is attached to the `GET /api/auth` handler only, so
 * the login route on the same path stays public.
 */

use axum::{
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Source of the token keys for the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let auth_gate = from_fn_with_state(app_state.tokens.clone(), auth_middleware);

    router
        .route("/api/users", post(register))
        .route("/api/auth", get(get_me.layer(auth_gate)).post(login))
}
