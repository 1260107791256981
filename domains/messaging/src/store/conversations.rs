//! Conversation records, membership and group metadata

use std::collections::HashMap;

use crate::domain::entities::{Conversation, ConversationSummary, Message};

#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: HashMap<String, Conversation>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the conversation with `id`, creating it with `initial_participants`
    /// if it does not exist yet. The participants argument is ignored for an
    /// existing conversation.
    pub fn ensure(&mut self, id: &str, initial_participants: &[String]) -> &mut Conversation {
        self.conversations.entry(id.to_string()).or_insert_with(|| {
            tracing::info!(
                conversation_id = %id,
                participants = initial_participants.len(),
                "Conversation created"
            );
            Conversation::new(id, initial_participants)
        })
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.conversations.contains_key(id)
    }

    /// Add a participant, creating the conversation first if absent
    pub fn add_participant(&mut self, id: &str, participant: &str) -> &Conversation {
        let conversation = self.ensure(id, &[]);
        if conversation.add_participant(participant) {
            tracing::debug!(conversation_id = %id, identity = %participant, "Participant added");
        }
        conversation
    }

    /// Remove a participant. No-op if absent or not a member; returns
    /// whether anything changed.
    pub fn remove_participant(&mut self, id: &str, participant: &str) -> bool {
        let removed = self
            .conversations
            .get_mut(id)
            .is_some_and(|c| c.remove_participant(participant));
        if removed {
            tracing::debug!(conversation_id = %id, identity = %participant, "Participant removed");
        }
        removed
    }

    pub fn set_name(&mut self, id: &str, name: &str) -> &Conversation {
        let conversation = self.ensure(id, &[]);
        conversation.name = Some(name.to_string());
        conversation
    }

    pub fn set_photo(&mut self, id: &str, photo: &str) -> &Conversation {
        let conversation = self.ensure(id, &[]);
        conversation.photo = Some(photo.to_string());
        conversation
    }

    pub fn is_participant(&self, id: &str, identity: &str) -> bool {
        self.conversations
            .get(id)
            .is_some_and(|c| c.is_participant(identity))
    }

    /// Summaries of every conversation `identity` participates in, unordered
    pub fn list_for(&self, identity: &str) -> Vec<ConversationSummary> {
        self.conversations
            .values()
            .filter(|c| c.is_participant(identity))
            .map(Conversation::summary)
            .collect()
    }

    /// Recompute the cached last-message fields of `id` from its log tail
    pub(crate) fn refresh_last_message(&mut self, id: &str, tail: Option<&Message>) {
        if let Some(conversation) = self.conversations.get_mut(id) {
            conversation.refresh_last_message(tail);
        }
    }
}
