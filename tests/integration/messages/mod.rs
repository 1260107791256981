//! Message, reaction and forwarding integration tests

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::{authed_request, error_code, parse_body, TestApp};

/// Helper: fetch the ordered message log as `token`
async fn list_messages(app: &TestApp, token: &str, conversation_id: &str) -> Value {
    let resp = app
        .send(authed_request(
            Method::GET,
            &format!("/conversations/{conversation_id}/messages"),
            token,
            None,
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    parse_body(resp).await["messages"].clone()
}

mod test_send_message {
    use super::*;

    #[tokio::test]
    async fn test_send_returns_201_with_message() {
        let app = TestApp::new();
        let token = app.login("alice").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                "/conversations/c1/messages",
                &token,
                Some(json!({ "content": "hi" })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = parse_body(resp).await;
        assert!(body["messageId"].as_str().unwrap().starts_with("msg_"));
        assert_eq!(body["conversationId"], "c1");
        assert_eq!(body["sender"], token.as_str());
        assert_eq!(body["content"], "hi");
        assert_eq!(body["type"], "text");
        assert_eq!(body["status"], "delivered");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_send_keeps_message_type() {
        let app = TestApp::new();
        let token = app.login("alice").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                "/conversations/c1/messages",
                &token,
                Some(json!({ "content": "https://cdn/cat.gif", "type": "gif" })),
            ))
            .await;
        assert_eq!(parse_body(resp).await["type"], "gif");
    }

    #[tokio::test]
    async fn test_send_stores_type_tag_verbatim() {
        let app = TestApp::new();
        let token = app.login("alice").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                "/conversations/c1/messages",
                &token,
                Some(json!({ "content": "look", "type": " image " })),
            ))
            .await;
        assert_eq!(parse_body(resp).await["type"], " image ");

        let resp = app
            .send(authed_request(
                Method::POST,
                "/conversations/c1/messages",
                &token,
                Some(json!({ "content": "plain", "type": "  " })),
            ))
            .await;
        assert_eq!(parse_body(resp).await["type"], "text");
    }

    #[tokio::test]
    async fn test_send_blank_content_is_400() {
        let app = TestApp::new();
        let token = app.login("alice").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                "/conversations/c1/messages",
                &token,
                Some(json!({ "content": "   " })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
        assert!(app.service.list_my_conversations(&token).is_empty());
    }

    #[tokio::test]
    async fn test_send_to_existing_conversation_joins_it() {
        let app = TestApp::new();
        let alice = app.login("alice").await;
        let bob = app.login("bob").await;
        app.send_text(&alice, "c1", "hi").await;
        app.send_text(&bob, "c1", "hey").await;

        let messages = list_messages(&app, &alice, "c1").await;
        assert_eq!(messages[0]["content"], "hi");
        assert_eq!(messages[1]["content"], "hey");
        assert_eq!(messages[1]["sender"], bob.as_str());
    }
}

mod test_list_messages {
    use super::*;

    #[tokio::test]
    async fn test_list_hidden_from_non_participants() {
        let app = TestApp::new();
        let alice = app.login("alice").await;
        let bob = app.login("bob").await;
        app.send_text(&alice, "c1", "secret").await;

        let resp = app
            .send(authed_request(
                Method::GET,
                "/conversations/c1/messages",
                &bob,
                None,
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

mod test_reactions {
    use super::*;

    #[tokio::test]
    async fn test_react_returns_201_and_shows_on_reads() {
        let app = TestApp::new();
        let token = app.login("alice").await;
        let message_id = app.send_text(&token, "c1", "hi").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                &format!("/messages/{message_id}/reactions"),
                &token,
                Some(json!({ "value": "👍" })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = parse_body(resp).await;
        assert_eq!(body["messageId"], message_id.as_str());
        assert_eq!(body["value"], "👍");
        let reaction_id = body["reactionId"].as_str().unwrap().to_string();

        let resp = app
            .send(authed_request(
                Method::POST,
                &format!("/messages/{message_id}/reactions"),
                &token,
                Some(json!({ "emoji": "🔥" })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let messages = list_messages(&app, &token, "c1").await;
        let reactions = messages[0]["reactions"].as_array().unwrap();
        assert_eq!(reactions.len(), 2);
        assert_eq!(reactions[0]["reactionId"], reaction_id.as_str());
        assert_eq!(reactions[0]["value"], "👍");
        assert_eq!(reactions[1]["value"], "🔥");
    }

    #[tokio::test]
    async fn test_react_to_unknown_message_is_404() {
        let app = TestApp::new();
        let token = app.login("alice").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                "/messages/msg_missing/reactions",
                &token,
                Some(json!({ "value": "👍" })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_react_as_non_participant_is_404() {
        let app = TestApp::new();
        let alice = app.login("alice").await;
        let bob = app.login("bob").await;
        let message_id = app.send_text(&alice, "c1", "hi").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                &format!("/messages/{message_id}/reactions"),
                &bob,
                Some(json!({ "value": "👍" })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreact_returns_204_then_404() {
        let app = TestApp::new();
        let token = app.login("alice").await;
        let message_id = app.send_text(&token, "c1", "hi").await;
        let reaction = app
            .service
            .react(&token, &message_id, "👍")
            .unwrap();
        let uri = format!("/messages/{message_id}/reactions/{}", reaction.reaction_id);

        let resp = app
            .send(authed_request(Method::DELETE, &uri, &token, None))
            .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(list_messages(&app, &token, "c1").await[0]["reactions"], json!([]));

        let resp = app
            .send(authed_request(Method::DELETE, &uri, &token, None))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

mod test_delete_message {
    use super::*;

    #[tokio::test]
    async fn test_delete_tail_recomputes_summary() {
        let app = TestApp::new();
        let token = app.login("alice").await;
        app.send_text(&token, "c1", "first").await;
        let second = app.send_text(&token, "c1", "second").await;

        let resp = app
            .send(authed_request(
                Method::DELETE,
                &format!("/messages/{second}"),
                &token,
                None,
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let detail = app.service.get_conversation(&token, "c1").unwrap();
        assert_eq!(detail.summary.last_message, "first");
        assert_eq!(detail.messages.len(), 1);

        let resp = app
            .send(authed_request(
                Method::DELETE,
                &format!("/messages/{second}"),
                &token,
                None,
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_last_message_clears_summary() {
        let app = TestApp::new();
        let token = app.login("alice").await;
        let only = app.send_text(&token, "c1", "only").await;

        let resp = app
            .send(authed_request(
                Method::DELETE,
                &format!("/messages/{only}"),
                &token,
                None,
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = app
            .send(authed_request(Method::GET, "/conversations", &token, None))
            .await;
        let body = parse_body(resp).await;
        assert_eq!(body["conversations"][0]["id"], "c1");
        assert_eq!(body["conversations"][0]["lastMessage"], "");
    }

    #[tokio::test]
    async fn test_delete_as_non_participant_is_404() {
        let app = TestApp::new();
        let alice = app.login("alice").await;
        let bob = app.login("bob").await;
        let message_id = app.send_text(&alice, "c1", "hi").await;

        let resp = app
            .send(authed_request(
                Method::DELETE,
                &format!("/messages/{message_id}"),
                &bob,
                None,
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(list_messages(&app, &alice, "c1").await.as_array().unwrap().len(), 1);
    }
}

mod test_forward_message {
    use super::*;

    #[tokio::test]
    async fn test_forward_requires_conversation_id() {
        let app = TestApp::new();
        let token = app.login("alice").await;
        let message_id = app.send_text(&token, "c1", "hi").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                &format!("/messages/{message_id}/forward"),
                &token,
                Some(json!({})),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forward_unknown_message_is_404() {
        let app = TestApp::new();
        let token = app.login("alice").await;

        let resp = app
            .send(authed_request(
                Method::POST,
                "/messages/msg_missing/forward",
                &token,
                Some(json!({ "conversationId": "c2" })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(app.service.list_my_conversations(&token).is_empty());
    }

    #[tokio::test]
    async fn test_forward_copies_type_and_leaves_source_reactions() {
        let app = TestApp::new();
        let token = app.login("alice").await;
        let resp = app
            .send(authed_request(
                Method::POST,
                "/conversations/c1/messages",
                &token,
                Some(json!({ "content": "https://cdn/cat.gif", "type": "gif" })),
            ))
            .await;
        let message_id = parse_body(resp).await["messageId"]
            .as_str()
            .unwrap()
            .to_string();
        app.service.react(&token, &message_id, "😂").unwrap();

        let resp = app
            .send(authed_request(
                Method::POST,
                &format!("/messages/{message_id}/forward"),
                &token,
                Some(json!({ "conversationId": "c2" })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = parse_body(resp).await;
        assert_eq!(body["type"], "gif");
        assert_eq!(body["conversationId"], "c2");

        let forwarded = list_messages(&app, &token, "c2").await;
        assert_eq!(forwarded[0]["reactions"], json!([]));
        let source = list_messages(&app, &token, "c1").await;
        assert_eq!(source[0]["reactions"].as_array().unwrap().len(), 1);
    }
}
