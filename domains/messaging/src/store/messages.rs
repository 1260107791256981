//! Ordered per-conversation message logs and reactions
//!
//! Every operation that changes a log finishes by handing the new tail to
//! [`ConversationStore::refresh_last_message`], so the cached summary
//! fields are never written anywhere else.

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::entities::{Message, MessageStatus, MessageView, Reaction};
use crate::domain::error::{MessagingError, MessagingResult};
use crate::domain::ids::{new_message_id, new_reaction_id};
use crate::domain::validation::{normalize_message_type, validate_content, validate_required};
use crate::store::conversations::ConversationStore;

#[derive(Debug, Default)]
pub struct MessageStore {
    /// conversation id -> messages in creation order
    logs: HashMap<String, Vec<Message>>,
    /// message id -> owning conversation id
    index: HashMap<String, String>,
    /// message id -> reactions in insertion order
    reactions: HashMap<String, Vec<Reaction>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message from `sender`.
    ///
    /// An unknown conversation is created with the sender as its only
    /// participant; an existing one gains the sender as a participant.
    pub fn append(
        &mut self,
        conversations: &mut ConversationStore,
        conversation_id: &str,
        sender: &str,
        content: &str,
        message_type: Option<&str>,
    ) -> MessagingResult<Message> {
        validate_content(content)?;
        let message_type = normalize_message_type(message_type);

        conversations.ensure(conversation_id, &[sender.to_string()]);
        conversations.add_participant(conversation_id, sender);

        Ok(self.push(
            conversations,
            conversation_id,
            sender,
            content.to_string(),
            message_type,
        ))
    }

    /// Copy the content and type of `source_message_id` into
    /// `target_conversation_id` as a new message sent by `forwarder`.
    ///
    /// The source message and its reactions are left untouched.
    pub fn forward(
        &mut self,
        conversations: &mut ConversationStore,
        source_message_id: &str,
        target_conversation_id: &str,
        forwarder: &str,
    ) -> MessagingResult<Message> {
        let source = self.get(source_message_id)?;
        let content = source.content.clone();
        let message_type = source.message_type.clone();

        conversations.ensure(target_conversation_id, &[forwarder.to_string()]);
        conversations.add_participant(target_conversation_id, forwarder);

        let message = self.push(
            conversations,
            target_conversation_id,
            forwarder,
            content,
            message_type,
        );
        tracing::debug!(
            source_message_id = %source_message_id,
            message_id = %message.message_id,
            "Message forwarded"
        );
        Ok(message)
    }

    fn push(
        &mut self,
        conversations: &mut ConversationStore,
        conversation_id: &str,
        sender: &str,
        content: String,
        message_type: String,
    ) -> Message {
        let log = self.logs.entry(conversation_id.to_string()).or_default();

        // Never go backwards relative to the previous message in this log
        let now = Utc::now();
        let timestamp = log.last().map_or(now, |last| now.max(last.timestamp));

        let message = Message {
            message_id: new_message_id(),
            conversation_id: conversation_id.to_string(),
            sender: sender.to_string(),
            content,
            message_type,
            status: MessageStatus::Delivered,
            timestamp,
        };

        log.push(message.clone());
        self.index
            .insert(message.message_id.clone(), conversation_id.to_string());
        conversations.refresh_last_message(conversation_id, log.last());

        tracing::debug!(
            conversation_id = %conversation_id,
            message_id = %message.message_id,
            sender = %sender,
            "Message appended"
        );
        message
    }

    /// Delete a message and every reaction on it
    pub fn delete(
        &mut self,
        conversations: &mut ConversationStore,
        message_id: &str,
    ) -> MessagingResult<Message> {
        let conversation_id = self.conversation_of(message_id)?.to_string();

        let log = self
            .logs
            .get_mut(&conversation_id)
            .ok_or_else(MessagingError::message_not_found)?;
        let position = log
            .iter()
            .position(|m| m.message_id == message_id)
            .ok_or_else(MessagingError::message_not_found)?;
        let removed = log.remove(position);

        self.index.remove(message_id);
        self.reactions.remove(message_id);
        conversations.refresh_last_message(&conversation_id, log.last());

        tracing::debug!(
            conversation_id = %conversation_id,
            message_id = %message_id,
            "Message deleted"
        );
        Ok(removed)
    }

    pub fn get(&self, message_id: &str) -> MessagingResult<&Message> {
        self.index
            .get(message_id)
            .and_then(|conversation_id| self.logs.get(conversation_id))
            .and_then(|log| log.iter().find(|m| m.message_id == message_id))
            .ok_or_else(MessagingError::message_not_found)
    }

    /// Id of the conversation owning `message_id`
    pub fn conversation_of(&self, message_id: &str) -> MessagingResult<&str> {
        self.index
            .get(message_id)
            .map(String::as_str)
            .ok_or_else(MessagingError::message_not_found)
    }

    pub fn add_reaction(&mut self, message_id: &str, value: &str) -> MessagingResult<Reaction> {
        validate_required("Reaction", value)?;
        if !self.index.contains_key(message_id) {
            return Err(MessagingError::message_not_found());
        }

        let reactions = self.reactions.entry(message_id.to_string()).or_default();
        let mut reaction_id = new_reaction_id();
        while reactions.iter().any(|r| r.reaction_id == reaction_id) {
            reaction_id = new_reaction_id();
        }

        let reaction = Reaction {
            reaction_id,
            value: value.to_string(),
        };
        reactions.push(reaction.clone());

        tracing::debug!(
            message_id = %message_id,
            reaction_id = %reaction.reaction_id,
            "Reaction added"
        );
        Ok(reaction)
    }

    pub fn remove_reaction(
        &mut self,
        message_id: &str,
        reaction_id: &str,
    ) -> MessagingResult<Reaction> {
        if !self.index.contains_key(message_id) {
            return Err(MessagingError::message_not_found());
        }

        let reactions = self
            .reactions
            .get_mut(message_id)
            .ok_or_else(reaction_not_found)?;
        let position = reactions
            .iter()
            .position(|r| r.reaction_id == reaction_id)
            .ok_or_else(reaction_not_found)?;
        let removed = reactions.remove(position);

        tracing::debug!(message_id = %message_id, reaction_id = %reaction_id, "Reaction removed");
        Ok(removed)
    }

    pub fn reactions(&self, message_id: &str) -> &[Reaction] {
        self.reactions
            .get(message_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Snapshot of a conversation's log, oldest first, with reactions
    pub fn list(&self, conversation_id: &str) -> Vec<MessageView> {
        self.logs
            .get(conversation_id)
            .map(|log| {
                log.iter()
                    .map(|message| MessageView {
                        message: message.clone(),
                        reactions: self.reactions(&message.message_id).to_vec(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn reaction_not_found() -> MessagingError {
    MessagingError::NotFound("Reaction not found".to_string())
}
