//! Input validation for store operations
//!
//! Every check runs before the store is touched.

use crate::domain::entities::DEFAULT_MESSAGE_TYPE;
use crate::domain::error::{MessagingError, MessagingResult};

/// Minimum display name length, in characters
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum display name length, in characters
pub const MAX_NAME_LENGTH: usize = 16;

/// Minimum group name length, in characters, after trimming
pub const MIN_GROUP_NAME_LENGTH: usize = 3;

/// Validate a display name used for login or rename
pub fn validate_display_name(name: &str) -> MessagingResult<()> {
    let len = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
        return Err(MessagingError::InvalidInput(format!(
            "Name must be between {} and {} characters",
            MIN_NAME_LENGTH, MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validate message content (must contain something other than whitespace)
pub fn validate_content(content: &str) -> MessagingResult<()> {
    if content.trim().is_empty() {
        return Err(MessagingError::InvalidInput(
            "Message content cannot be empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_group_name(name: &str) -> MessagingResult<()> {
    if name.trim().chars().count() < MIN_GROUP_NAME_LENGTH {
        return Err(MessagingError::InvalidInput(format!(
            "Group name must be at least {} characters",
            MIN_GROUP_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validate a required free-form field (ids, photo references, reactions)
pub fn validate_required(field: &str, value: &str) -> MessagingResult<()> {
    if value.trim().is_empty() {
        return Err(MessagingError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Resolve the stored type tag for a message. The tag is kept exactly as
/// sent; only an absent or blank tag falls back to the default.
pub fn normalize_message_type(message_type: Option<&str>) -> String {
    match message_type {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => DEFAULT_MESSAGE_TYPE.to_string(),
    }
}
