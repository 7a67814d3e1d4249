//! Authgate - Main Library
//!
//! Authgate is a small user-registration and bearer-token authentication
//! backend built on Axum. Users register with a name, email and password,
//! log in to receive a signed JWT, and present that token in the
//! `x-auth-token` header to reach protected routes.
//!
//! # Overview
//!
//! This library provides:
//! - Registration with field-level validation and bcrypt password hashing
//! - Login returning an HS256 JWT carrying only the user id
//! - An authentication middleware that gates protected routes
//! - A protected identity lookup returning the user without the password hash
//! - PostgreSQL persistence (sqlx) with an in-memory fallback for development
//!
//! # Module Structure
//!
//! - **`backend`** - Everything server-side
//!   - `server` - configuration, application state, startup
//!   - `routes` - router assembly
//!   - `auth` - users, tokens, passwords, avatars, validation, handlers
//!   - `middleware` - the `x-auth-token` gate
//!   - `error` - the API error type and its HTTP mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `?` for fallible operations
//! - `backend::error::ApiError` is the single error type handlers return
//! - Internal causes are logged and never sent to clients

/// Backend server-side code
pub mod backend;
