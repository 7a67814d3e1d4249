//! Authentication API integration tests
//!
//! Tests for login (`POST /api/auth`) and the current-user route
//! (`GET /api/auth`) behind the token middleware.

use std::time::Duration;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use authgate::backend::auth::avatar::avatar_url;
use authgate::backend::auth::TokenKeys;

use crate::common::{
    create_test_user, get_me, login, register, test_keys, test_server, STRONG_PASSWORD,
    TEST_SECRET,
};

#[tokio::test]
async fn test_login_success() {
    let server = test_server();
    register(&server, "Ada", "ada@example.com", STRONG_PASSWORD).await;

    let response = login(&server, "ada@example.com", STRONG_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(!object["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = test_server();
    register(&server, "Ada", "ada@example.com", STRONG_PASSWORD).await;

    let unknown = login(&server, "nobody@example.com", STRONG_PASSWORD).await;
    let wrong = login(&server, "ada@example.com", "Wr0ngPass!").await;

    assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown.text(), wrong.text());

    let body: serde_json::Value = wrong.json();
    assert_eq!(body, json!({ "errors": [{ "msg": "Invalid credentials" }] }));
}

#[tokio::test]
async fn test_login_validation_errors() {
    let server = test_server();

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "bad" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({
            "errors": [
                { "msg": "Please enter a valid email address", "param": "email", "location": "body" },
                { "msg": "Password is required", "param": "password", "location": "body" }
            ]
        })
    );
}

#[tokio::test]
async fn test_login_empty_password_is_invalid_credentials() {
    let server = test_server();
    register(&server, "Ada", "ada@example.com", STRONG_PASSWORD).await;

    let response = login(&server, "ada@example.com", "").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "errors": [{ "msg": "Invalid credentials" }] }));
}

#[tokio::test]
async fn test_token_round_trip() {
    let server = test_server();
    let user = create_test_user(&server, "Ada Lovelace", "ada@example.com").await;

    let response = get_me(&server, &user.token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], user.name);
    assert_eq!(body["email"], user.email);
    assert_eq!(body["avatar"], avatar_url(&user.email));
    assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());
    assert!(body["date"].is_string());

    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 5);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_token_subject_matches_user() {
    let server = test_server();
    let user = create_test_user(&server, "Ada", "ada@example.com").await;

    let claims = test_keys().verify_token(&user.token).unwrap();
    let body: serde_json::Value = get_me(&server, &user.token).await.json();

    assert_eq!(body["id"], claims.user.id.to_string());
    assert_eq!(claims.exp - claims.iat, test_keys().ttl().as_secs());
}

#[tokio::test]
async fn test_get_me_without_token() {
    let server = test_server();

    let response = server.get("/api/auth").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "msg": "Authorization denied" }));
}

#[tokio::test]
async fn test_get_me_with_tampered_token() {
    let server = test_server();
    let user = create_test_user(&server, "Ada", "ada@example.com").await;

    // Flip one character inside the signature segment
    let at = user.token.rfind('.').unwrap() + 5;
    let original = user.token.as_bytes()[at];
    let replacement = if original == b'A' { "B" } else { "A" };
    let mut tampered = user.token.clone();
    tampered.replace_range(at..at + 1, replacement);

    let response = get_me(&server, &tampered).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "msg": "Invalid token" }));
}

#[tokio::test]
async fn test_get_me_with_foreign_secret() {
    let server = test_server();
    let user = create_test_user(&server, "Ada", "ada@example.com").await;
    let claims = test_keys().verify_token(&user.token).unwrap();

    let foreign = TokenKeys::new(b"some-other-secret", Duration::from_secs(3600))
        .create_token(claims.user.id)
        .unwrap();

    let response = get_me(&server, &foreign).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "msg": "Invalid token" }));
}

#[tokio::test]
async fn test_get_me_with_expired_token() {
    let server = test_server();
    let user = create_test_user(&server, "Ada", "ada@example.com").await;

    let keys = test_keys();
    let mut claims = keys.verify_token(&user.token).unwrap();
    claims.iat -= 7200;
    claims.exp = claims.iat + 60;
    let expired = keys.sign(&claims).unwrap();

    let response = get_me(&server, &expired).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "msg": "Invalid token" }));
}

#[tokio::test]
async fn test_get_me_for_unknown_user() {
    let server = test_server();
    let token = TokenKeys::new(TEST_SECRET, Duration::from_secs(3600))
        .create_token(Uuid::new_v4())
        .unwrap();

    let response = get_me(&server, &token).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "msg": "User not found" }));
}
