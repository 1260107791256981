//! Shared utilities, configuration, and error handling for WASAText
//!
//! - Configuration loaded from the environment
//! - The crate-boundary error type and its HTTP mapping
//! - A JSON extractor that validates request bodies

pub mod config;
pub mod error;
pub mod extractors;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
