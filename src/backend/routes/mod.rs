//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint routes
//! ```
//!
//! # Routes
//!
//! - `GET /` - Liveness check
//! - `POST /api/users` - User registration
//! - `POST /api/auth` - User login
//! - `GET /api/auth` - Get current user (auth gate)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use authgate::backend::auth::{MemoryUserStore, TokenKeys};
//! use authgate::backend::auth::sessions::DEFAULT_TOKEN_TTL;
//! use authgate::backend::routes::create_router;
//! use authgate::backend::server::AppState;
//!
//! let state = AppState::new(
//!     Arc::new(MemoryUserStore::new()),
//!     TokenKeys::new(b"secret", DEFAULT_TOKEN_TTL),
//! );
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
