use super::backend::StorageBackend;
use crate::error::{Result, RudysError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem backend: one file per key inside `root`.
///
/// ```text
/// <data dir>/
/// ├── rudys-stores.json   # Store collection
/// ├── storeOwner.json     # Current owner (absent when logged out)
/// ├── lastStoreId.json    # Most recently created store id
/// └── pendingVerification.json  # Sign-in waiting for its code
/// ```
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RudysError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RudysError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RudysError::Io)?;
        fs::rename(&tmp_path, self.key_path(key)).map_err(RudysError::Io)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(RudysError::Io)?;
        }
        Ok(())
    }
}
