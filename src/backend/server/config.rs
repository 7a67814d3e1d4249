/**
 * Server Configuration
 *
 * This module loads and validates server configuration and opens the user
 * store it points at.
 *
 * # Configuration Sources
 *
 * Environment variables (a `.env` file is loaded by the binary first):
 *
 * - `JWT_SECRET` (required) - token signing secret
 * - `JWT_EXPIRES_IN_SECS` - token lifetime, default 360000 (100 hours)
 * - `DATABASE_URL` - PostgreSQL URL; unset means the in-memory store
 * - `SERVER_HOST` - bind address, default 0.0.0.0
 * - `SERVER_PORT` - bind port, default 5000
 *
 * Empty values are treated as unset.
 */

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::backend::auth::memory::MemoryUserStore;
use crate::backend::auth::sessions::{TokenKeys, DEFAULT_TOKEN_TTL};
use crate::backend::auth::users::{PgUserStore, StoreError, UserStore};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Bind address
    pub host: IpAddr,
    /// Bind port
    pub port: u16,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    ///
    /// # Arguments
    /// * `lookup` - returns the value for a variable name, `None` if unset
    ///
    /// # Errors
    /// `MissingValue` if `JWT_SECRET` is absent, `InvalidValue` if a number
    /// or address does not parse or the lifetime is zero
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(raw) = get("JWT_EXPIRES_IN_SECS") {
            let secs = parse_var::<u64>("JWT_EXPIRES_IN_SECS", &raw)?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(raw) = get("SERVER_HOST") {
            builder = builder.host(parse_var("SERVER_HOST", &raw)?);
        }
        if let Some(raw) = get("SERVER_PORT") {
            builder = builder.port(parse_var("SERVER_PORT", &raw)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_EXPIRES_IN_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Token keys built from the secret and lifetime
    pub fn token_keys(&self) -> TokenKeys {
        TokenKeys::new(self.jwt_secret.as_bytes(), self.token_ttl)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Builder for AppConfig
#[derive(Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    database_url: Option<String>,
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the PostgreSQL URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the bind address
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            database_url: self.database_url,
            host: self.host.unwrap_or(DEFAULT_HOST),
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Open the user store selected by the configuration
///
/// - `DATABASE_URL` set: connect to PostgreSQL and run migrations; failure
///   is returned so the server does not start against a broken database
/// - unset: in-memory store, records are lost on restart
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PgUserStore::connect(url).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory user store; users are lost on restart.");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
