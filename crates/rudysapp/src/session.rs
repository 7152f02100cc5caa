//! # Owner Session
//!
//! At most one [`StoreOwner`] is "current" per data directory. The owner is
//! mirrored to the key-value slot under `storeOwner`, so a session survives
//! restarts until [`SessionState::logout`].
//!
//! This is a navigation guard, not access control: there is no token, no
//! expiry and no server. Owner-only operations call
//! [`SessionState::require_owner`] and turn away anonymous callers.
//!
//! ## Sign-in Flows
//!
//! - **Google**: simulated OAuth. [`SessionState::login_with_google`] logs in a
//!   fixed demo owner.
//! - **Email / Phone**: two steps.
//!   1. [`SessionState::begin_verification`] validates the name and contact and
//!      stores a [`PendingVerification`] under `pendingVerification`.
//!   2. [`SessionState::complete_verification`] checks the code. The demo code
//!      is always [`DEMO_VERIFICATION_CODE`]. A match logs the owner in and
//!      clears the pending entry; a mismatch changes nothing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, RudysError};
use crate::model::{OwnerId, Provider, StoreOwner};
use crate::store::backend::{StorageBackend, OWNER_KEY, PENDING_VERIFICATION_KEY};

pub const DEMO_VERIFICATION_CODE: &str = "123456";

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;

/// A sign-in waiting for its verification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    pub provider: Provider,
    pub name: String,
    /// Email address or phone number, depending on `provider`.
    pub contact: String,
}

impl PendingVerification {
    pub fn new(provider: Provider, name: &str, contact: &str) -> Result<Self> {
        let name = name.trim();
        let contact = contact.trim();

        if name.chars().count() < MIN_NAME_LEN {
            return Err(RudysError::Validation(
                "Name must be at least 2 characters.".to_string(),
            ));
        }

        match provider {
            Provider::Email if !is_email(contact) => {
                return Err(RudysError::Validation(
                    "Please enter a valid email address.".to_string(),
                ))
            }
            Provider::Phone if digit_count(contact) < MIN_PHONE_DIGITS => {
                return Err(RudysError::Validation(
                    "Phone number must be at least 10 digits.".to_string(),
                ))
            }
            Provider::Google => {
                return Err(RudysError::Validation(
                    "Google sign-in does not use a verification code".to_string(),
                ))
            }
            _ => {}
        }

        Ok(Self {
            provider,
            name: name.to_string(),
            contact: contact.to_string(),
        })
    }

    fn into_owner(self) -> StoreOwner {
        let id = OwnerId::new(format!("{}-{}", self.provider, Uuid::new_v4()));
        let (email, phone) = match self.provider {
            Provider::Phone => (String::new(), Some(self.contact)),
            _ => (self.contact, None),
        };
        StoreOwner {
            id,
            name: self.name,
            email,
            phone,
            provider: self.provider,
        }
    }
}

pub struct SessionState<B: StorageBackend> {
    backend: B,
    current: Option<StoreOwner>,
}

impl<B: StorageBackend> SessionState<B> {
    /// Restore the session. Unreadable or corrupt data means "logged out".
    pub fn open(backend: B) -> Self {
        let current = read_json(&backend, OWNER_KEY);
        Self { backend, current }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_owner(&self) -> Option<&StoreOwner> {
        self.current.as_ref()
    }

    pub fn require_owner(&self) -> Result<&StoreOwner> {
        self.current.as_ref().ok_or(RudysError::NotLoggedIn)
    }

    /// Replace the current owner.
    pub fn login(&mut self, owner: StoreOwner) -> Result<()> {
        let content = serde_json::to_string(&owner).map_err(RudysError::Serialization)?;
        self.backend.set(OWNER_KEY, &content)?;
        tracing::debug!(owner_id = %owner.id, provider = %owner.provider, "Owner logged in");
        self.current = Some(owner);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.backend.remove(OWNER_KEY)?;
        self.current = None;
        Ok(())
    }

    pub fn login_with_google(&mut self) -> Result<StoreOwner> {
        let owner = StoreOwner {
            id: OwnerId::from("google-auth-id"),
            name: "Store Owner".to_string(),
            email: "owner@example.com".to_string(),
            phone: None,
            provider: Provider::Google,
        };
        self.login(owner.clone())?;
        Ok(owner)
    }

    pub fn begin_verification(
        &mut self,
        provider: Provider,
        name: &str,
        contact: &str,
    ) -> Result<PendingVerification> {
        let pending = PendingVerification::new(provider, name, contact)?;
        let content = serde_json::to_string(&pending).map_err(RudysError::Serialization)?;
        self.backend.set(PENDING_VERIFICATION_KEY, &content)?;
        Ok(pending)
    }

    pub fn pending_verification(&self) -> Option<PendingVerification> {
        read_json(&self.backend, PENDING_VERIFICATION_KEY)
    }

    pub fn complete_verification(&mut self, code: &str) -> Result<StoreOwner> {
        let pending = self
            .pending_verification()
            .ok_or(RudysError::NoPendingVerification)?;

        if code.trim() != DEMO_VERIFICATION_CODE {
            return Err(RudysError::InvalidVerificationCode);
        }

        let owner = pending.into_owner();
        self.login(owner.clone())?;
        if let Err(e) = self.backend.remove(PENDING_VERIFICATION_KEY) {
            tracing::warn!(error = %e, "Failed to clear pending verification");
        }
        Ok(owner)
    }
}

fn read_json<B, T>(backend: &B, key: &str) -> Option<T>
where
    B: StorageBackend,
    T: serde::de::DeserializeOwned,
{
    let raw = match backend.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(error = %e, key, "Failed to read stored data");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, key, "Failed to parse stored data");
            None
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}
