//! Messaging domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use wasatext_auth::AuthBackend;

use crate::MessagingService;

pub use wasatext_auth::AuthUser;

/// Application state for the Messaging domain
#[derive(Debug, Clone)]
pub struct MessagingState {
    pub service: MessagingService,
    pub auth: AuthBackend,
}

impl MessagingState {
    /// Build state whose bearer tokens resolve against `service`'s sessions
    pub fn new(service: MessagingService) -> Self {
        let auth = AuthBackend::new(Arc::new(service.clone()));
        Self { service, auth }
    }
}

impl FromRef<MessagingState> for AuthBackend {
    fn from_ref(state: &MessagingState) -> Self {
        state.auth.clone()
    }
}
