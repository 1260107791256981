//! Login API handler
//!
//! Implements:
//! - POST /session: Log in under a display name, returning the identity

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wasatext_common::{Result, ValidatedJson};

use crate::api::middleware::MessagingState;

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 16))]
    pub name: String,
}

/// Identity token to present as `Authorization: Bearer <identifier>`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub identifier: String,
}

/// POST /session: Log in under a display name
///
/// The same name always yields the same identifier.
pub async fn login(
    State(state): State<MessagingState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>)> {
    let identifier = state.service.login(&request.name)?;
    Ok((StatusCode::CREATED, Json(LoginResponse { identifier })))
}
