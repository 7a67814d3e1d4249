/**
 * Authentication Handler Types
 *
 * Request and response bodies for the registration, login and identity
 * handlers. Request fields are optional so that a missing field becomes a
 * validation error instead of a deserialization failure.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Display name
    pub name: Option<String>,
    /// User's email address
    pub email: Option<String>,
    /// User's password (will be hashed before storage)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (will be verified against stored hash)
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// JWT to send back in `x-auth-token`
    pub token: String,
}
