//! Authentication test helpers
//!
//! Provides utilities for registering test users, logging in,
//! and attaching tokens to requests.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::json;

use authgate::backend::middleware::AUTH_TOKEN_HEADER;

/// A password satisfying every strength rule
pub const STRONG_PASSWORD: &str = "Passw0rd!";

/// Test user credentials
pub struct TestUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// POST a registration body
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/users")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await
}

/// POST a login body
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Register a user and log in, returning the issued token
pub async fn create_test_user(server: &TestServer, name: &str, email: &str) -> TestUser {
    let response = register(server, name, email, STRONG_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::OK, "registration failed: {}", response.text());

    let response = login(server, email, STRONG_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed: {}", response.text());
    let body: serde_json::Value = response.json();
    let token = body["token"]
        .as_str()
        .expect("login response has no token")
        .to_string();

    TestUser {
        name: name.to_string(),
        email: email.to_string(),
        password: STRONG_PASSWORD.to_string(),
        token,
    }
}

/// Header name carrying the token
pub fn token_header_name() -> HeaderName {
    HeaderName::from_static(AUTH_TOKEN_HEADER)
}

/// Header value for a token
pub fn token_header_value(token: &str) -> HeaderValue {
    HeaderValue::from_str(token).expect("token is not a valid header value")
}

/// GET /api/auth with the given token
pub async fn get_me(server: &TestServer, token: &str) -> TestResponse {
    server
        .get("/api/auth")
        .add_header(token_header_name(), token_header_value(token))
        .await
}
