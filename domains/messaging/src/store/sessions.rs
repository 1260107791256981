//! Session registry: display names ↔ identities
//!
//! The two maps always form a bijection. Every mutation below either
//! fails before writing or updates both sides together.

use std::collections::HashMap;

use crate::domain::entities::UserProfile;
use crate::domain::error::{MessagingError, MessagingResult};
use crate::domain::ids::new_identity;
use crate::domain::validation::{validate_display_name, validate_required};

#[derive(Debug, Default)]
pub struct SessionRegistry {
    identities_by_name: HashMap<String, String>,
    names_by_identity: HashMap<String, String>,
    photos: HashMap<String, String>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in under a display name.
    ///
    /// Re-login with a registered name returns the identity minted the
    /// first time.
    pub fn login(&mut self, name: &str) -> MessagingResult<String> {
        validate_display_name(name)?;

        if let Some(identity) = self.identities_by_name.get(name) {
            tracing::debug!(identity = %identity, "Existing identity logged in");
            return Ok(identity.clone());
        }

        let identity = new_identity();
        self.identities_by_name
            .insert(name.to_string(), identity.clone());
        self.names_by_identity
            .insert(identity.clone(), name.to_string());

        tracing::info!(identity = %identity, name = %name, "Registered new identity");
        Ok(identity)
    }

    /// Move an identity to a new display name.
    pub fn rename(&mut self, identity: &str, new_name: &str) -> MessagingResult<()> {
        validate_display_name(new_name)?;

        if !self.names_by_identity.contains_key(identity) {
            return Err(MessagingError::NotFound("Identity not found".to_string()));
        }

        match self.identities_by_name.get(new_name) {
            Some(owner) if owner != identity => {
                return Err(MessagingError::NameTaken(new_name.to_string()));
            }
            Some(_) => return Ok(()),
            None => {}
        }

        if let Some(old_name) = self.names_by_identity.get(identity) {
            if self.identities_by_name.get(old_name).map(String::as_str) == Some(identity) {
                self.identities_by_name.remove(old_name);
            }
        }

        self.identities_by_name
            .insert(new_name.to_string(), identity.to_string());
        self.names_by_identity
            .insert(identity.to_string(), new_name.to_string());

        tracing::debug!(identity = %identity, name = %new_name, "Identity renamed");
        Ok(())
    }

    /// Display name currently registered for an identity
    pub fn resolve(&self, identity: &str) -> MessagingResult<&str> {
        self.names_by_identity
            .get(identity)
            .map(String::as_str)
            .ok_or_else(|| MessagingError::NotFound("Identity not found".to_string()))
    }

    pub fn is_registered(&self, identity: &str) -> bool {
        self.names_by_identity.contains_key(identity)
    }

    pub fn set_photo(&mut self, identity: &str, photo: &str) -> MessagingResult<()> {
        validate_required("Photo", photo)?;
        if !self.is_registered(identity) {
            return Err(MessagingError::NotFound("Identity not found".to_string()));
        }
        self.photos.insert(identity.to_string(), photo.to_string());
        Ok(())
    }

    pub fn profile(&self, identity: &str) -> MessagingResult<UserProfile> {
        let name = self.resolve(identity)?;
        Ok(UserProfile {
            identity: identity.to_string(),
            name: name.to_string(),
            photo: self.photos.get(identity).cloned(),
        })
    }
}
