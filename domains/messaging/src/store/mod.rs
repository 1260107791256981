//! In-memory store
//!
//! The three sub-stores are plain data structures with `&mut self`
//! methods. They are never shared directly: [`crate::MessagingService`]
//! owns one [`Store`] behind a single mutex and every operation runs
//! against it inside that one critical section.

pub mod conversations;
pub mod messages;
pub mod sessions;

pub use conversations::ConversationStore;
pub use messages::MessageStore;
pub use sessions::SessionRegistry;

use crate::domain::entities::ConversationDetail;

/// All messaging state
#[derive(Debug, Default)]
pub struct Store {
    pub sessions: SessionRegistry,
    pub conversations: ConversationStore,
    pub messages: MessageStore,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary plus ordered log of a conversation, without access checks
    pub fn conversation_detail(&self, id: &str) -> Option<ConversationDetail> {
        self.conversations.get(id).map(|conversation| ConversationDetail {
            summary: conversation.summary(),
            messages: self.messages.list(id),
        })
    }
}
