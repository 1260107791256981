//! Domain layer: entities, errors, validation, id generation

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
