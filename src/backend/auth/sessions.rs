/**
 * Session Tokens
 *
 * This module handles JWT generation and validation. Tokens are HS256,
 * signed with the process-wide secret from configuration, and carry only
 * the user id:
 *
 * ```json
 * { "user": { "id": "<uuid>" }, "iat": 1700000000, "exp": 1700360000 }
 * ```
 *
 * There is no revocation or refresh; a token is valid until `exp`.
 */

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default token lifetime: 100 hours
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(360_000);

/// Identity embedded in a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: Uuid,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user
    pub user: TokenUser,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signing and verification keys plus token lifetime
///
/// Built once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenKeys {
    /// Create keys from a shared secret
    ///
    /// # Arguments
    /// * `secret` - HS256 secret
    /// * `ttl` - lifetime of issued tokens
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Lifetime of tokens issued by these keys
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user, valid from now for the configured lifetime
    pub fn create_token(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            user: TokenUser { id: user_id },
            iat: now,
            exp: now.saturating_add(self.ttl.as_secs()),
        };
        self.sign(&claims)
    }

    /// Sign arbitrary claims
    pub fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// Fails on a bad signature, a malformed token, a missing or past `exp`,
    /// or a user id that is not a UUID.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
