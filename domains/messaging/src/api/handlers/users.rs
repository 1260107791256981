//! User profile API handlers
//!
//! Implements:
//! - GET /user: Profile of the caller
//! - PUT /user/username: Rename the caller
//! - PUT /user/photo: Set the caller's photo

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;
use wasatext_common::{Result, ValidatedJson};

use crate::api::middleware::{AuthUser, MessagingState};
use crate::UserProfile;

/// Request for changing the caller's display name
#[derive(Debug, Deserialize, Validate)]
pub struct SetUsernameRequest {
    #[serde(alias = "username")]
    #[validate(length(min = 3, max = 16))]
    pub name: String,
}

/// Request for setting a photo, shared with group photos
#[derive(Debug, Deserialize, Validate)]
pub struct SetPhotoRequest {
    #[serde(alias = "mediaUrl")]
    #[validate(length(min = 1))]
    pub photo: String,
}

/// GET /user: Profile of the caller
pub async fn get_profile(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
) -> Result<Json<UserProfile>> {
    let profile = state.service.profile(&auth.identity)?;
    Ok(Json(profile))
}

/// PUT /user/username: Rename the caller
///
/// Fails with 409 when another identity holds the name.
pub async fn set_username(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    ValidatedJson(request): ValidatedJson<SetUsernameRequest>,
) -> Result<Json<UserProfile>> {
    let profile = state.service.rename(&auth.identity, &request.name)?;
    tracing::info!(
        identity = %auth.identity,
        from = %auth.name,
        to = %profile.name,
        "User renamed"
    );
    Ok(Json(profile))
}

/// PUT /user/photo: Set the caller's photo
pub async fn set_photo(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    ValidatedJson(request): ValidatedJson<SetPhotoRequest>,
) -> Result<Json<UserProfile>> {
    let profile = state.service.set_my_photo(&auth.identity, &request.photo)?;
    Ok(Json(profile))
}
