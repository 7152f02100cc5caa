use crate::error::Result;
use std::rc::Rc;

/// Key under which the whole store collection (with nested items) is kept.
pub const STORES_KEY: &str = "rudys-stores";
/// Key under which the current store owner is kept, absent when logged out.
pub const OWNER_KEY: &str = "storeOwner";
/// Sign-in started but not yet confirmed with a verification code.
pub const PENDING_VERIFICATION_KEY: &str = "pendingVerification";
/// Plain-string pointer to the most recently created store.
pub const LAST_STORE_KEY: &str = "lastStoreId";

/// Abstract interface for the durable key-value slot.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`StoreRepository`](super::repository::StoreRepository) and
/// [`SessionState`](crate::session::SessionState) handle the "what".
/// Values are opaque text blobs; callers own their encoding.
pub trait StorageBackend {
    /// Read the value under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    /// MUST be atomic: a reader sees either the old or the new value, never a mix.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
