//! Opaque id generation
//!
//! Ids are unique for the lifetime of the process. Their format is not part
//! of any contract.

use uuid::Uuid;

pub fn new_identity() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn new_conversation_id() -> String {
    format!("conv_{}", Uuid::new_v4().simple())
}

pub fn new_message_id() -> String {
    format!("msg_{}", Uuid::new_v4().simple())
}

pub fn new_reaction_id() -> String {
    format!("react_{}", Uuid::new_v4().simple())
}
