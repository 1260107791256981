//! Authentication backend
//!
//! Wraps whatever owns the identity ↔ name mapping behind a trait object so
//! domain crates can plug their session store in without this crate
//! depending on them.

use std::sync::Arc;

use crate::context::AuthContext;
use crate::error::AuthError;

/// Resolves an opaque bearer token to the display name registered for it.
pub trait IdentityResolver: Send + Sync {
    /// Returns `None` when the token was never issued.
    fn resolve_identity(&self, token: &str) -> Option<String>;
}

/// Authentication backend shared by every domain state.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    resolver: Arc<dyn IdentityResolver>,
}

impl AuthBackend {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve a bearer token into an authenticated context.
    pub fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        match self.resolver.resolve_identity(token) {
            Some(name) => Ok(AuthContext::new(token.to_string(), name)),
            None => {
                tracing::debug!("Rejected unknown bearer token");
                Err(AuthError::UnknownIdentity)
            }
        }
    }
}

impl std::fmt::Debug for AuthBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthBackend").finish_non_exhaustive()
    }
}
