//! Domain entities for the Messaging domain
//!
//! Records are owned by the store; everything handed to callers is a cloned
//! snapshot (`Message`, `MessageView`, `ConversationSummary`,
//! `ConversationDetail`, `UserProfile`) so nothing outside the critical
//! section can observe a half-applied mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message type used when the sender does not give one
pub const DEFAULT_MESSAGE_TYPE: &str = "text";

/// Delivery status. Messages are delivered the moment they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Delivered,
}

impl std::fmt::Display for MessageStatus {
    #[mutants::skip] // Single variant; wire form is asserted through serde
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageStatus::Delivered => write!(f, "delivered"),
        }
    }
}

/// Reaction attached to exactly one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub reaction_id: String,
    pub value: String,
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: String,
    pub conversation_id: String,
    pub sender: String,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub status: MessageStatus,
    pub timestamp: DateTime<Utc>,
}

/// Message snapshot together with the reactions currently attached to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: Message,
    pub reactions: Vec<Reaction>,
}

/// Input for sending a message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendMessage {
    pub content: String,
    /// Free-form type tag; blank or absent means [`DEFAULT_MESSAGE_TYPE`]
    pub message_type: Option<String>,
}

impl SendMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            message_type: None,
        }
    }
}

/// Conversation record
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: String,
    /// Participant identities, no duplicates, order irrelevant
    pub participants: Vec<String>,
    pub name: Option<String>,
    pub photo: Option<String>,
    /// Content of the most recent message, empty when the log is empty
    pub last_message: String,
    /// Timestamp of the most recent message, `None` when the log is empty
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a conversation with the given participants (duplicates dropped)
    pub fn new(id: impl Into<String>, participants: &[String]) -> Self {
        let mut conversation = Conversation {
            id: id.into(),
            participants: Vec::with_capacity(participants.len()),
            name: None,
            photo: None,
            last_message: String::new(),
            last_message_at: None,
            created_at: Utc::now(),
        };
        for participant in participants {
            conversation.add_participant(participant);
        }
        conversation
    }

    pub fn is_participant(&self, identity: &str) -> bool {
        self.participants.iter().any(|p| p == identity)
    }

    /// Returns `true` if the participant was newly added
    pub fn add_participant(&mut self, identity: &str) -> bool {
        if self.is_participant(identity) {
            return false;
        }
        self.participants.push(identity.to_string());
        true
    }

    /// Returns `true` if the participant was a member
    pub fn remove_participant(&mut self, identity: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != identity);
        self.participants.len() != before
    }

    /// Recompute the cached last-message fields from the tail of the log.
    ///
    /// This is the only place those fields are written.
    pub fn refresh_last_message(&mut self, tail: Option<&Message>) {
        match tail {
            Some(message) => {
                self.last_message = message.content.clone();
                self.last_message_at = Some(message.timestamp);
            }
            None => {
                self.last_message.clear();
                self.last_message_at = None;
            }
        }
    }

    /// Timestamp shown in summaries: the last message, or creation time for
    /// a conversation with no messages
    pub fn display_timestamp(&self) -> DateTime<Utc> {
        self.last_message_at.unwrap_or(self.created_at)
    }

    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id.clone(),
            participants: self.participants.clone(),
            last_message: self.last_message.clone(),
            timestamp: self.display_timestamp(),
            name: self.name.clone(),
            photo: self.photo.clone(),
        }
    }
}

/// Conversation summary as listed for a participant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: String,
    pub participants: Vec<String>,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Conversation with its ordered message log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationDetail {
    #[serde(flatten)]
    pub summary: ConversationSummary,
    pub messages: Vec<MessageView>,
}

/// Public profile of a logged-in identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub identity: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}
