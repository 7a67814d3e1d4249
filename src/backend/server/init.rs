/**
 * Server Initialization
 *
 * This module builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Open the user store (PostgreSQL with migrations, or in-memory)
 * 2. Build token keys from the configured secret and lifetime
 * 3. Create the router with all routes and middleware
 */

use axum::Router;

use crate::backend::auth::users::StoreError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{open_store, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the store error if `DATABASE_URL` is set but the database cannot
/// be reached or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing authgate backend");

    let store = open_store(config).await?;
    let state = AppState::new(store, config.token_keys());

    tracing::info!(
        "Router configured (token lifetime {}s)",
        config.token_ttl.as_secs()
    );

    Ok(create_router(state))
}
