//! Group management API handlers
//!
//! Implements:
//! - POST /groups/{id}/members: Add a participant
//! - POST /groups/{id}/leave: Remove the caller
//! - PUT /groups/{id}/name: Rename the group
//! - PUT /groups/{id}/photo: Set the group photo
//!
//! Metadata calls on an unknown id create the group with the caller as
//! first member.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;
use wasatext_common::{Result, ValidatedJson};

use crate::api::handlers::users::SetPhotoRequest;
use crate::api::middleware::{AuthUser, MessagingState};
use crate::ConversationSummary;

/// Request for adding a group member
#[derive(Debug, Deserialize, Validate)]
pub struct AddMemberRequest {
    /// Identity of the user to add
    #[serde(alias = "id", alias = "member")]
    #[validate(length(min = 1))]
    pub participant: String,
}

/// Request for renaming a group
#[derive(Debug, Deserialize, Validate)]
pub struct SetGroupNameRequest {
    #[validate(length(min = 3))]
    pub name: String,
}

/// POST /groups/{id}/members: Add a participant
pub async fn add_member(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(conversation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddMemberRequest>,
) -> Result<Json<ConversationSummary>> {
    let summary =
        state
            .service
            .add_group_member(&auth.identity, &conversation_id, &request.participant)?;
    Ok(Json(summary))
}

/// POST /groups/{id}/leave: Remove the caller from the group
pub async fn leave_group(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<ConversationSummary>> {
    let summary = state.service.leave_group(&auth.identity, &conversation_id)?;
    Ok(Json(summary))
}

/// PUT /groups/{id}/name: Rename the group
pub async fn set_name(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(conversation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<SetGroupNameRequest>,
) -> Result<Json<ConversationSummary>> {
    let summary = state
        .service
        .set_group_name(&auth.identity, &conversation_id, &request.name)?;
    Ok(Json(summary))
}

/// PUT /groups/{id}/photo: Set the group photo
pub async fn set_photo(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(conversation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<SetPhotoRequest>,
) -> Result<Json<ConversationSummary>> {
    let summary = state
        .service
        .set_group_photo(&auth.identity, &conversation_id, &request.photo)?;
    Ok(Json(summary))
}
