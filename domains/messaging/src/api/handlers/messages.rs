//! Message API handlers
//!
//! Implements:
//! - GET /conversations/{id}/messages: Ordered log with reactions
//! - POST /conversations/{id}/messages: Send a message
//! - POST /messages/{id}/forward: Forward a message to another conversation
//! - POST /messages/{id}/reactions: React to a message
//! - DELETE /messages/{id}/reactions/{reaction_id}: Remove a reaction
//! - DELETE /messages/{id}: Delete a message

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wasatext_common::{Result, ValidatedJson};

use crate::api::middleware::{AuthUser, MessagingState};
use crate::{Message, MessageView, SendMessage};

/// Request for sending a message
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub content: String,

    /// Free-form type tag, `text` when absent
    #[serde(rename = "type")]
    pub message_type: Option<String>,
}

impl From<SendMessageRequest> for SendMessage {
    fn from(request: SendMessageRequest) -> Self {
        SendMessage {
            content: request.content,
            message_type: request.message_type,
        }
    }
}

/// Request for forwarding a message
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForwardMessageRequest {
    #[validate(length(min = 1))]
    pub conversation_id: String,
}

/// Request for reacting to a message
#[derive(Debug, Deserialize, Validate)]
pub struct ReactionRequest {
    #[serde(alias = "reaction", alias = "emoji")]
    #[validate(length(min = 1))]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub message_id: String,
    pub reaction_id: String,
    pub value: String,
}

/// GET /conversations/{id}/messages: Ordered message log
pub async fn list_messages(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<MessageListResponse>> {
    let messages = state
        .service
        .list_messages(&auth.identity, &conversation_id)?;
    Ok(Json(MessageListResponse { messages }))
}

/// POST /conversations/{id}/messages: Send a message
///
/// An unknown conversation id is created on first send.
pub async fn send_message(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(conversation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>)> {
    let message = state
        .service
        .send_message(&auth.identity, &conversation_id, request.into())?;
    tracing::debug!(
        sender = %auth.name,
        conversation_id = %conversation_id,
        message_id = %message.message_id,
        "Message sent"
    );
    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /messages/{id}/forward: Copy a message into another conversation
pub async fn forward_message(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ForwardMessageRequest>,
) -> Result<(StatusCode, Json<Message>)> {
    let message =
        state
            .service
            .forward_message(&auth.identity, &message_id, &request.conversation_id)?;
    tracing::debug!(
        forwarder = %auth.name,
        source_message_id = %message_id,
        conversation_id = %message.conversation_id,
        "Message forwarded"
    );
    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /messages/{id}/reactions: React to a message
pub async fn add_reaction(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> Result<(StatusCode, Json<ReactionResponse>)> {
    let reaction = state
        .service
        .react(&auth.identity, &message_id, &request.value)?;
    Ok((
        StatusCode::CREATED,
        Json(ReactionResponse {
            message_id,
            reaction_id: reaction.reaction_id,
            value: reaction.value,
        }),
    ))
}

/// DELETE /messages/{id}/reactions/{reaction_id}: Remove a reaction
pub async fn remove_reaction(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path((message_id, reaction_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    state
        .service
        .unreact(&auth.identity, &message_id, &reaction_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /messages/{id}: Delete a message and its reactions
pub async fn delete_message(
    AuthUser(auth): AuthUser,
    State(state): State<MessagingState>,
    Path(message_id): Path<String>,
) -> Result<StatusCode> {
    state.service.delete_message(&auth.identity, &message_id)?;
    Ok(StatusCode::NO_CONTENT)
}
