//! Backend Module
//!
//! This module contains all server-side code for Authgate: the Axum router,
//! authentication handlers, the token middleware, and user persistence.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User store, JWT sessions, password hashing, avatars,
//!   request validation and the HTTP handlers
//! - **`middleware`** - Request processing middleware (auth gate)
//! - **`error`** - Backend error type and response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - authgate-server binary
//! ├── server/         - Config, state, startup
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user store (`Arc<dyn UserStore>`) and the token keys.
//! Both are read-only after startup and cloned cheaply into each request.
//!
//! # Endpoints
//!
//! - `POST /api/users` - Register a user
//! - `POST /api/auth` - Log in, returns `{ token }`
//! - `GET /api/auth` - Current user (requires `x-auth-token`)

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
