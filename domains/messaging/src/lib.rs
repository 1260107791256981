//! Messaging domain: sessions, conversations, messages, reactions, groups

pub mod api;
pub mod domain;
pub mod service;
pub mod store;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::error::{MessagingError, MessagingResult};

pub use service::MessagingService;
pub use store::{ConversationStore, MessageStore, SessionRegistry, Store};

// Re-export API types
pub use api::routes;
pub use api::MessagingState;
