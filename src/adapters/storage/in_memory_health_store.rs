//! In-Memory Health Store Adapter
//!
//! Keeps every user's keys in a shared map. Useful for tests and development.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::ports::{HealthStore, StoreError, StoreKey};

type UserMap = HashMap<UserId, BTreeMap<String, Value>>;

/// In-memory storage for per-user health data
#[derive(Debug, Clone, Default)]
pub struct InMemoryHealthStore {
    users: Arc<RwLock<UserMap>>,
}

impl InMemoryHealthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with at least one stored key
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl HealthStore for InMemoryHealthStore {
    async fn get(&self, user: &UserId, key: StoreKey) -> Result<Option<Value>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(user).and_then(|keys| keys.get(&key.as_str()).cloned()))
    }

    async fn set(&self, user: &UserId, key: StoreKey, value: Value) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        users.entry(user.clone()).or_default().insert(key.as_str(), value);
        Ok(())
    }

    async fn remove(&self, user: &UserId, key: StoreKey) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if let Some(keys) = users.get_mut(user) {
            keys.remove(&key.as_str());
            if keys.is_empty() {
                users.remove(user);
            }
        }
        Ok(())
    }

    async fn snapshot(&self, user: &UserId) -> Result<BTreeMap<String, Value>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(user).cloned().unwrap_or_default())
    }

    async fn clear(&self, user: &UserId) -> Result<(), StoreError> {
        self.users.write().await.remove(user);
        Ok(())
    }
}
