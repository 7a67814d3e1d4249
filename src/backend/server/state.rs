/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are `Arc`s to read-only (or internally synchronized) values,
 * so cloning the state per request is cheap and lock-free.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::UserStore;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Credential store (PostgreSQL or in-memory)
    pub store: Arc<dyn UserStore>,

    /// Token signing and verification keys
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenKeys) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
        }
    }
}

/// Implement FromRef for the user store
///
/// Handlers extract it with `State(store): State<Arc<dyn UserStore>>`.
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for the token keys
impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
