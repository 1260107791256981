//! API layer for the Messaging domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::MessagingState;
pub use routes::routes;
