//! Messaging domain errors

use wasatext_common::Error;

pub type MessagingResult<T> = std::result::Result<T, MessagingError>;

/// Every failure a store or service operation can report.
///
/// All of them are detected before any state is written, so a failed
/// operation leaves the store exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessagingError {
    #[error("{0}")]
    InvalidInput(String),

    /// Unknown id, or a caller who is not allowed to know the id exists
    #[error("{0}")]
    NotFound(String),

    #[error("Name {0:?} is already taken")]
    NameTaken(String),
}

impl MessagingError {
    pub(crate) fn conversation_not_found() -> Self {
        MessagingError::NotFound("Conversation not found".to_string())
    }

    pub(crate) fn message_not_found() -> Self {
        MessagingError::NotFound("Message not found".to_string())
    }
}

impl From<MessagingError> for Error {
    fn from(err: MessagingError) -> Self {
        match err {
            MessagingError::InvalidInput(msg) => Error::Validation(msg),
            MessagingError::NotFound(msg) => Error::NotFound(msg),
            e @ MessagingError::NameTaken(_) => Error::Conflict(e.to_string()),
        }
    }
}
