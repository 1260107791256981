//! Route definitions for Messaging domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{conversations, groups, messages, session, users};
use super::middleware::MessagingState;

/// Create login and profile routes
fn user_routes() -> Router<MessagingState> {
    Router::new()
        .route("/session", post(session::login))
        .route("/user", get(users::get_profile))
        .route("/user/username", put(users::set_username))
        .route("/user/photo", put(users::set_photo))
}

/// Create conversation routes
fn conversation_routes() -> Router<MessagingState> {
    Router::new()
        .route(
            "/conversations",
            get(conversations::list_conversations).post(conversations::start_conversation),
        )
        .route("/conversations/{id}", get(conversations::get_conversation))
        .route(
            "/conversations/{id}/messages",
            get(messages::list_messages).post(messages::send_message),
        )
}

/// Create message routes
fn message_routes() -> Router<MessagingState> {
    Router::new()
        .route("/messages/{id}", delete(messages::delete_message))
        .route("/messages/{id}/forward", post(messages::forward_message))
        .route("/messages/{id}/reactions", post(messages::add_reaction))
        .route(
            "/messages/{id}/reactions/{reaction_id}",
            delete(messages::remove_reaction),
        )
}

/// Create group management routes
fn group_routes() -> Router<MessagingState> {
    Router::new()
        .route("/groups/{id}/members", post(groups::add_member))
        .route("/groups/{id}/leave", post(groups::leave_group))
        .route("/groups/{id}/name", put(groups::set_name))
        .route("/groups/{id}/photo", put(groups::set_photo))
}

/// Create all Messaging domain API routes
pub fn routes() -> Router<MessagingState> {
    Router::new()
        .merge(user_routes())
        .merge(conversation_routes())
        .merge(message_routes())
        .merge(group_routes())
}
