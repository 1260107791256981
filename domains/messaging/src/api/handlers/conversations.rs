//! Conversation API handlers
//!
//! Implements:
//! - GET /conversations: Summaries of the caller's conversations
//! - POST /conversations: Start a conversation under a generated id
//! - GET /conversations/{id}: Summary plus ordered message log

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wasatext_common::{Result, ValidatedJson};

use crate::api::middleware::{AuthUser, MessagingState};
use crate::{ConversationDetail, ConversationSummary};

#[derive(Debug, Serialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationSummary>,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub conversation: ConversationDetail,
}

/// Request for starting a conversation
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartConversationRequest {
    /// Identities to add besides the caller
    #[serde(default)]
    pub participants: Vec<String>,

    /// Optional group name
    pub name: Option<String>,
}

/// GET /conversations: Summaries of the caller's conversations, most
/// recent first
pub async fn list_conversations(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
) -> Json<ConversationListResponse> {
    let conversations = state.service.list_my_conversations(&auth.identity);
    Json(ConversationListResponse { conversations })
}

/// POST /conversations: Start a conversation with the caller as first
/// participant
pub async fn start_conversation(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    ValidatedJson(request): ValidatedJson<StartConversationRequest>,
) -> Result<(StatusCode, Json<ConversationSummary>)> {
    let summary = state.service.start_conversation(
        &auth.identity,
        &request.participants,
        request.name.as_deref(),
    )?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /conversations/{id}: Conversation detail
///
/// Answers 404 to non-participants.
pub async fn get_conversation(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<ConversationResponse>> {
    let conversation = state
        .service
        .get_conversation(&auth.identity, &conversation_id)?;
    Ok(Json(ConversationResponse { conversation }))
}
