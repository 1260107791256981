//! Messaging operations façade
//!
//! One method per use case. Each method takes the store lock once, runs to
//! completion, and hands back an owned snapshot. The guard is dropped on
//! every exit path, including `?` returns.
//!
//! Reads and writes scoped to a conversation answer `NotFound` to callers
//! who are not participants, exactly as if the conversation did not exist.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use wasatext_auth::IdentityResolver;

use crate::domain::entities::{
    ConversationDetail, ConversationSummary, Message, MessageView, Reaction, SendMessage,
    UserProfile,
};
use crate::domain::error::{MessagingError, MessagingResult};
use crate::domain::ids::new_conversation_id;
use crate::domain::validation::{validate_group_name, validate_required};
use crate::store::Store;

/// Thread-safe handle over the messaging store. Cloning shares the store.
#[derive(Debug, Clone, Default)]
pub struct MessagingService {
    store: Arc<Mutex<Store>>,
}

impl MessagingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the critical section.
    ///
    /// A panic while holding the lock cannot leave a half-applied mutation
    /// behind (validation precedes every write), so a poisoned lock is
    /// recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Log in under `name`, returning the identity token
    pub fn login(&self, name: &str) -> MessagingResult<String> {
        self.lock().sessions.login(name)
    }

    pub fn rename(&self, identity: &str, new_name: &str) -> MessagingResult<UserProfile> {
        let mut store = self.lock();
        store.sessions.rename(identity, new_name)?;
        store.sessions.profile(identity)
    }

    /// Display name for an identity
    pub fn resolve(&self, identity: &str) -> MessagingResult<String> {
        self.lock().sessions.resolve(identity).map(str::to_string)
    }

    pub fn profile(&self, identity: &str) -> MessagingResult<UserProfile> {
        self.lock().sessions.profile(identity)
    }

    pub fn set_my_photo(&self, identity: &str, photo: &str) -> MessagingResult<UserProfile> {
        let mut store = self.lock();
        store.sessions.set_photo(identity, photo)?;
        store.sessions.profile(identity)
    }

    // ------------------------------------------------------------------
    // Conversations
    // ------------------------------------------------------------------

    /// Conversations `identity` participates in, most recent first
    pub fn list_my_conversations(&self, identity: &str) -> Vec<ConversationSummary> {
        let mut summaries = self.lock().conversations.list_for(identity);
        summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        summaries
    }

    pub fn get_conversation(
        &self,
        identity: &str,
        conversation_id: &str,
    ) -> MessagingResult<ConversationDetail> {
        let store = self.lock();
        require_participant(&store, conversation_id, identity)?;
        store
            .conversation_detail(conversation_id)
            .ok_or_else(MessagingError::conversation_not_found)
    }

    pub fn list_messages(
        &self,
        identity: &str,
        conversation_id: &str,
    ) -> MessagingResult<Vec<MessageView>> {
        let store = self.lock();
        require_participant(&store, conversation_id, identity)?;
        Ok(store.messages.list(conversation_id))
    }

    /// Start a conversation under a generated id with the caller and the
    /// given identities as participants.
    pub fn start_conversation(
        &self,
        identity: &str,
        participants: &[String],
        name: Option<&str>,
    ) -> MessagingResult<ConversationSummary> {
        if let Some(name) = name {
            validate_group_name(name)?;
        }

        let mut store = self.lock();
        for participant in participants {
            require_registered(&store, participant)?;
        }

        let mut members = Vec::with_capacity(participants.len() + 1);
        members.push(identity.to_string());
        members.extend(participants.iter().cloned());

        let id = new_conversation_id();
        let conversation = store.conversations.ensure(&id, &members);
        if let Some(name) = name {
            conversation.name = Some(name.to_string());
        }
        Ok(conversation.summary())
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    pub fn send_message(
        &self,
        identity: &str,
        conversation_id: &str,
        input: SendMessage,
    ) -> MessagingResult<Message> {
        validate_required("Conversation id", conversation_id)?;

        let mut store = self.lock();
        let Store {
            conversations,
            messages,
            ..
        } = &mut *store;
        messages.append(
            conversations,
            conversation_id,
            identity,
            &input.content,
            input.message_type.as_deref(),
        )
    }

    pub fn forward_message(
        &self,
        identity: &str,
        message_id: &str,
        target_conversation_id: &str,
    ) -> MessagingResult<Message> {
        validate_required("Conversation id", target_conversation_id)?;

        let mut store = self.lock();
        require_message_access(&store, message_id, identity)?;
        let Store {
            conversations,
            messages,
            ..
        } = &mut *store;
        messages.forward(conversations, message_id, target_conversation_id, identity)
    }

    pub fn react(&self, identity: &str, message_id: &str, value: &str) -> MessagingResult<Reaction> {
        let mut store = self.lock();
        require_message_access(&store, message_id, identity)?;
        store.messages.add_reaction(message_id, value)
    }

    pub fn unreact(
        &self,
        identity: &str,
        message_id: &str,
        reaction_id: &str,
    ) -> MessagingResult<Reaction> {
        let mut store = self.lock();
        require_message_access(&store, message_id, identity)?;
        store.messages.remove_reaction(message_id, reaction_id)
    }

    /// Delete a message, returning it as it was before removal
    pub fn delete_message(&self, identity: &str, message_id: &str) -> MessagingResult<Message> {
        let mut store = self.lock();
        require_message_access(&store, message_id, identity)?;
        let Store {
            conversations,
            messages,
            ..
        } = &mut *store;
        messages.delete(conversations, message_id)
    }

    // ------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------

    pub fn add_group_member(
        &self,
        identity: &str,
        conversation_id: &str,
        participant: &str,
    ) -> MessagingResult<ConversationSummary> {
        validate_required("Conversation id", conversation_id)?;
        validate_required("Participant", participant)?;

        let mut store = self.lock();
        require_registered(&store, participant)?;
        claim_group(&mut store, conversation_id, identity)?;
        Ok(store
            .conversations
            .add_participant(conversation_id, participant)
            .summary())
    }

    /// Remove the caller from a conversation
    pub fn leave_group(
        &self,
        identity: &str,
        conversation_id: &str,
    ) -> MessagingResult<ConversationSummary> {
        let mut store = self.lock();
        require_participant(&store, conversation_id, identity)?;
        store
            .conversations
            .remove_participant(conversation_id, identity);
        store
            .conversations
            .get(conversation_id)
            .map(|c| c.summary())
            .ok_or_else(MessagingError::conversation_not_found)
    }

    pub fn set_group_name(
        &self,
        identity: &str,
        conversation_id: &str,
        name: &str,
    ) -> MessagingResult<ConversationSummary> {
        validate_required("Conversation id", conversation_id)?;
        validate_group_name(name)?;

        let mut store = self.lock();
        claim_group(&mut store, conversation_id, identity)?;
        Ok(store.conversations.set_name(conversation_id, name).summary())
    }

    pub fn set_group_photo(
        &self,
        identity: &str,
        conversation_id: &str,
        photo: &str,
    ) -> MessagingResult<ConversationSummary> {
        validate_required("Conversation id", conversation_id)?;
        validate_required("Photo", photo)?;

        let mut store = self.lock();
        claim_group(&mut store, conversation_id, identity)?;
        Ok(store
            .conversations
            .set_photo(conversation_id, photo)
            .summary())
    }
}

impl IdentityResolver for MessagingService {
    fn resolve_identity(&self, token: &str) -> Option<String> {
        self.resolve(token).ok()
    }
}

fn require_participant(store: &Store, conversation_id: &str, identity: &str) -> MessagingResult<()> {
    if store.conversations.is_participant(conversation_id, identity) {
        Ok(())
    } else {
        Err(MessagingError::conversation_not_found())
    }
}

/// The caller must participate in the conversation owning the message
fn require_message_access(store: &Store, message_id: &str, identity: &str) -> MessagingResult<()> {
    let conversation_id = store.messages.conversation_of(message_id)?;
    if store.conversations.is_participant(conversation_id, identity) {
        Ok(())
    } else {
        Err(MessagingError::message_not_found())
    }
}

fn require_registered(store: &Store, identity: &str) -> MessagingResult<()> {
    if store.sessions.is_registered(identity) {
        Ok(())
    } else {
        Err(MessagingError::NotFound("User not found".to_string()))
    }
}

/// Group metadata operations on an unknown id create the conversation with
/// the caller as its first member; on an existing one the caller must
/// already be a member.
fn claim_group(store: &mut Store, conversation_id: &str, identity: &str) -> MessagingResult<()> {
    if !store.conversations.contains(conversation_id) {
        store
            .conversations
            .ensure(conversation_id, &[identity.to_string()]);
        return Ok(());
    }
    require_participant(store, conversation_id, identity)
}
