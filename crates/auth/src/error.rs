//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    /// Token is well-formed but was never issued by this process
    UnknownIdentity,
}

impl AuthError {
    fn code_and_message(&self) -> (&'static str, &'static str) {
        match self {
            AuthError::MissingAuthorization => (
                "MISSING_AUTHORIZATION",
                "Authorization header required",
            ),
            AuthError::InvalidAuthorizationFormat => (
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::UnknownIdentity => ("UNAUTHORIZED", "Unknown identity"),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (code, message) = self.code_and_message();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
