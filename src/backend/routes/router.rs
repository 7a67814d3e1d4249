/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Liveness route (`GET /`)
 * 2. API routes (users, auth)
 * 3. Fallback handler (404)
 *
 * Every request runs inside a `tower-http` trace span.
 */

use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Body of the liveness route
pub const LIVENESS_BODY: &str = "API running";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the user store and token keys
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new().route("/", get(|| async { LIVENESS_BODY }));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
