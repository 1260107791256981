//! HTTP handlers for the Messaging domain API

pub mod conversations;
pub mod groups;
pub mod messages;
pub mod session;
pub mod users;
