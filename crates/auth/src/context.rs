//! Authenticated caller context

/// The caller behind a request, as resolved from its bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Opaque identity token issued at login
    pub identity: String,
    /// Display name currently registered for the identity
    pub name: String,
}

impl AuthContext {
    pub fn new(identity: String, name: String) -> Self {
        Self { identity, name }
    }
}
