//! WASAText application composition root
//!
//! Composes the domain routers and shared middleware into a single
//! application.

use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wasatext_common::Config;
use wasatext_messaging::{MessagingService, MessagingState};

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, service: MessagingService) -> Router {
    let messaging_state = MessagingState::new(service);

    let cors = CorsLayer::permissive().max_age(Duration::from_secs(config.cors_max_age_secs));

    Router::new()
        .route("/health", get(health_check))
        .merge(wasatext_messaging::routes().with_state(messaging_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .into_inner(),
        )
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
