//! Authentication Module
//!
//! This module handles user registration, login and identity lookup.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model, UserStore port, PostgreSQL adapter
//! ├── memory.rs       - In-memory UserStore
//! ├── sessions.rs     - JWT token management
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── avatar.rs       - Gravatar URL derivation
//! ├── validation.rs   - Request validation rules
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → validated, hashed, stored → `User registered`
//! 2. **Login**: email, password → verified → `{ token }`
//! 3. **Get Me**: `x-auth-token` → verified by middleware → user info
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - JWT tokens carry only the user id
//! - Bad email and bad password give the same response

/// User data model and database operations
pub mod users;

/// In-memory user store
pub mod memory;

/// JWT token generation and validation
pub mod sessions;

/// Password hashing
pub mod password;

/// Avatar URL derivation
pub mod avatar;

/// Request validation
pub mod validation;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, register};
pub use memory::MemoryUserStore;
pub use sessions::TokenKeys;
pub use users::{PgUserStore, PublicUser, User, UserStore};
