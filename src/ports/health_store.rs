//! Health Store Port - Per-user key/value persistence.
//!
//! Every value is a JSON document stored under a well-known key. Writes are
//! last-writer-wins; there is no conflict resolution between concurrent
//! writers.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::UserId;
use crate::domain::insight::TrackingDomain;

/// Well-known keys in a user's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The saved profile record (`userProfile`).
    Profile,
    /// Ordered list of cycle entries (`cycleHistory`).
    CycleHistory,
    /// Stats computed after the last entry was logged (`cycleStats`).
    CycleStats,
    /// Latest insights for a tracking domain (`<domain>Insights`).
    Insights(TrackingDomain),
}

impl StoreKey {
    /// Every key a user can have, in export order.
    pub fn all() -> Vec<StoreKey> {
        let mut keys = vec![StoreKey::Profile, StoreKey::CycleHistory, StoreKey::CycleStats];
        keys.extend(TrackingDomain::ALL.into_iter().map(StoreKey::Insights));
        keys
    }

    pub fn as_str(&self) -> String {
        match self {
            StoreKey::Profile => "userProfile".to_string(),
            StoreKey::CycleHistory => "cycleHistory".to_string(),
            StoreKey::CycleStats => "cycleStats".to_string(),
            StoreKey::Insights(domain) => domain.store_key(),
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize value for key {key}: {message}")]
    Serialization { key: String, message: String },

    #[error("Stored value for key {key} is corrupted: {message}")]
    Corrupted { key: String, message: String },
}

impl StoreError {
    pub fn corrupted(key: StoreKey, message: impl Into<String>) -> Self {
        Self::Corrupted {
            key: key.as_str(),
            message: message.into(),
        }
    }

    pub fn serialization(key: StoreKey, message: impl Into<String>) -> Self {
        Self::Serialization {
            key: key.as_str(),
            message: message.into(),
        }
    }

    /// True when retrying the same operation later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Port for per-user key/value persistence.
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Reads the value under `key`, or `None` when the key was never set.
    async fn get(&self, user: &UserId, key: StoreKey) -> Result<Option<Value>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, user: &UserId, key: StoreKey, value: Value) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, user: &UserId, key: StoreKey) -> Result<(), StoreError>;

    /// Returns every stored key for the user.
    async fn snapshot(&self, user: &UserId) -> Result<BTreeMap<String, Value>, StoreError>;

    /// Removes every stored key for the user.
    async fn clear(&self, user: &UserId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_match_store_layout() {
        assert_eq!(StoreKey::Profile.as_str(), "userProfile");
        assert_eq!(StoreKey::CycleHistory.as_str(), "cycleHistory");
        assert_eq!(StoreKey::CycleStats.as_str(), "cycleStats");
        assert_eq!(StoreKey::Insights(TrackingDomain::Cycle).as_str(), "cycleInsights");
    }

    #[test]
    fn io_errors_are_retryable() {
        let err: StoreError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(err.is_retryable());
        assert!(!StoreError::corrupted(StoreKey::Profile, "bad json").is_retryable());
    }
}
