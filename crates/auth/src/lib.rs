//! Authentication middleware for the WASAText API
//!
//! Bearer tokens are opaque identities minted at login. This crate only
//! knows how to pull a token out of a request and ask an
//! [`IdentityResolver`] whether it belongs to anyone; the resolver itself
//! lives with the session store in the messaging domain.

mod backend;
mod context;
mod error;
mod extractors;
mod token;

pub use backend::{AuthBackend, IdentityResolver};
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use token::extract_bearer_token;
