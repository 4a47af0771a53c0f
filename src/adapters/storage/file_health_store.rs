//! File-based Health Store Adapter
//!
//! Stores each key as a pretty-printed JSON file, one directory per user:
//!
//! ```text
//! <base>/<hex(user_id)>/userProfile.json
//! <base>/<hex(user_id)>/cycleHistory.json
//! ```
//!
//! User ids are hex-encoded so arbitrary header values never escape the base
//! directory. Writes go to a temp file first and are renamed into place.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::foundation::UserId;
use crate::ports::{HealthStore, StoreError, StoreKey};

const EXTENSION: &str = "json";

/// File-based storage for per-user health data
#[derive(Debug, Clone)]
pub struct FileHealthStore {
    base_path: PathBuf,
}

impl FileHealthStore {
    /// Create a new file store rooted at `base_path`.
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn user_dir(&self, user: &UserId) -> PathBuf {
        let encoded: String = user.as_str().bytes().map(|b| format!("{:02x}", b)).collect();
        self.base_path.join(encoded)
    }

    fn key_path(&self, user: &UserId, key: StoreKey) -> PathBuf {
        self.user_dir(user).join(format!("{}.{}", key.as_str(), EXTENSION))
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(path).await.map_err(StoreError::from)
    }
}

#[async_trait]
impl HealthStore for FileHealthStore {
    async fn get(&self, user: &UserId, key: StoreKey) -> Result<Option<Value>, StoreError> {
        let path = self.key_path(user, key);

        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::corrupted(key, e.to_string()))
    }

    async fn set(&self, user: &UserId, key: StoreKey, value: Value) -> Result<(), StoreError> {
        let dir = self.user_dir(user);
        self.ensure_dir(&dir).await?;

        let json = serde_json::to_string_pretty(&value)
            .map_err(|e| StoreError::serialization(key, e.to_string()))?;

        let final_path = self.key_path(user, key);
        let temp_path = dir.join(format!(".{}.{}.tmp", key.as_str(), Uuid::new_v4()));

        fs::write(&temp_path, json).await?;
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn remove(&self, user: &UserId, key: StoreKey) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(user, key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn snapshot(&self, user: &UserId) -> Result<BTreeMap<String, Value>, StoreError> {
        let mut snapshot = BTreeMap::new();

        for key in StoreKey::all() {
            if let Some(value) = self.get(user, key).await? {
                snapshot.insert(key.as_str(), value);
            }
        }

        Ok(snapshot)
    }

    async fn clear(&self, user: &UserId) -> Result<(), StoreError> {
        match fs::remove_dir_all(self.user_dir(user)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
