//! Common test utilities for integration tests
//!
//! Every [`TestApp`] owns a fresh in-memory store, so tests never share
//! state and need no cleanup.

use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use wasatext_common::Config;
use wasatext_messaging::MessagingService;

/// In-process application under test
pub struct TestApp {
    pub service: MessagingService,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let service = MessagingService::new();
        let router = wasatext_app::create_app(&Config::default(), service.clone());
        Self { service, router }
    }

    /// Send one request through a clone of the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Log in over HTTP and return the identifier
    pub async fn login(&self, name: &str) -> String {
        let resp = self
            .send(json_request(
                Method::POST,
                "/session",
                None,
                Some(json!({ "name": name })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        parse_body(resp).await["identifier"]
            .as_str()
            .unwrap()
            .to_string()
    }

    /// Send a text message and return its id
    pub async fn send_text(&self, token: &str, conversation_id: &str, content: &str) -> String {
        let resp = self
            .send(authed_request(
                Method::POST,
                &format!("/conversations/{conversation_id}/messages"),
                token,
                Some(json!({ "content": content })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        parse_body(resp).await["messageId"]
            .as_str()
            .unwrap()
            .to_string()
    }

    /// Add `participant` to a group on behalf of `token`
    pub async fn add_member(&self, token: &str, conversation_id: &str, participant: &str) {
        let resp = self
            .send(authed_request(
                Method::POST,
                &format!("/groups/{conversation_id}/members"),
                token,
                Some(json!({ "participant": participant })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

/// Build a request with an optional bearer token and JSON body
pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    if let Some(b) = body {
        builder = builder.header("content-type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Build an authenticated request
pub fn authed_request(method: Method, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    json_request(method, uri, Some(token), body)
}

/// Parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Assert the shared error body shape and return its code
pub async fn error_code(response: Response<Body>) -> String {
    let body = parse_body(response).await;
    assert!(body["error"]["message"].is_string());
    body["error"]["code"].as_str().unwrap().to_string()
}
