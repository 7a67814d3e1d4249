/**
 * Error Conversion
 *
 * This module converts `ApiError` into HTTP responses.
 *
 * # Response Format
 *
 * Request problems use the `errors` list shape:
 * ```json
 * { "errors": [ { "msg": "Invalid credentials" } ] }
 * ```
 *
 * Gate rejections and missing users use a single message:
 * ```json
 * { "msg": "Authorization denied" }
 * ```
 *
 * Server errors are plain text `Server error`. The underlying cause is
 * logged here and never included in the body.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::auth::validation::FieldError;
use crate::backend::error::types::ApiError;

/// Body text for every 500 response
pub const SERVER_ERROR_BODY: &str = "Server error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::Validation(errors) => errors_body(status, errors),
            Self::InvalidCredentials => {
                errors_body(status, vec![FieldError::general("Invalid credentials")])
            }
            Self::UserExists => errors_body(status, vec![FieldError::general("User already exists")]),
            Self::Unauthenticated => msg_body(status, "Authorization denied"),
            Self::InvalidToken => msg_body(status, "Invalid token"),
            Self::UserNotFound => msg_body(status, "User not found"),
            Self::Store(_) | Self::Password(_) | Self::Token(_) => {
                tracing::error!(error = %self, "Request failed with server error");
                (status, SERVER_ERROR_BODY).into_response()
            }
        }
    }
}

fn errors_body(status: StatusCode, errors: Vec<FieldError>) -> Response {
    (status, Json(json!({ "errors": errors }))).into_response()
}

fn msg_body(status: StatusCode, msg: &'static str) -> Response {
    (status, Json(json!({ "msg": msg }))).into_response()
}
