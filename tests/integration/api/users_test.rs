//! Registration API integration tests
//!
//! Tests for `POST /api/users`.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{register, test_server, STRONG_PASSWORD};

#[tokio::test]
async fn test_register_success() {
    let server = test_server();

    let response = register(&server, "Ada", "ada@example.com", STRONG_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "User registered");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = test_server();

    let first = register(&server, "Ada", "ada@example.com", STRONG_PASSWORD).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = register(&server, "Someone Else", "ada@example.com", "0therPass!").await;

    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json();
    assert_eq!(body, json!({ "errors": [{ "msg": "User already exists" }] }));
}

#[tokio::test]
async fn test_register_reports_every_failed_rule() {
    let server = test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "", "email": "not-an-email", "password": "abc" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({
            "errors": [
                { "msg": "Name is required", "param": "name", "location": "body" },
                { "msg": "Please enter a valid email address", "param": "email", "location": "body" },
                { "msg": "Password must be at least 6 characters in length", "param": "password", "location": "body" },
                { "msg": "Password must contain at least 1 special character", "param": "password", "location": "body" },
                { "msg": "Password must contain both upper and lower case characters", "param": "password", "location": "body" },
                { "msg": "Password must contain at least one number", "param": "password", "location": "body" }
            ]
        })
    );
}

#[tokio::test]
async fn test_register_missing_fields() {
    let server = test_server();

    let response = server.post("/api/users").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["msg"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Name is required",
            "Please enter a valid email address",
            "Password is required",
            "Password must be at least 6 characters in length",
            "Password must contain at least 1 special character",
            "Password must contain both upper and lower case characters",
            "Password must contain at least one number",
        ]
    );
}

#[tokio::test]
async fn test_register_without_password_reports_every_password_rule() {
    let server = test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({
            "errors": [
                { "msg": "Password is required", "param": "password", "location": "body" },
                { "msg": "Password must be at least 6 characters in length", "param": "password", "location": "body" },
                { "msg": "Password must contain at least 1 special character", "param": "password", "location": "body" },
                { "msg": "Password must contain both upper and lower case characters", "param": "password", "location": "body" },
                { "msg": "Password must contain at least one number", "param": "password", "location": "body" }
            ]
        })
    );
}

#[tokio::test]
async fn test_register_with_unicode_local_part() {
    let server = test_server();

    let response = register(&server, "José", "josé@example.com", STRONG_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let server = test_server();

    let response = server
        .post("/api/users")
        .text("{\"name\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_registration_stores_nothing() {
    let server = test_server();

    let weak = register(&server, "Ada", "ada@example.com", "weak").await;
    assert_eq!(weak.status_code(), StatusCode::BAD_REQUEST);

    // The email is still free
    let response = register(&server, "Ada", "ada@example.com", STRONG_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
