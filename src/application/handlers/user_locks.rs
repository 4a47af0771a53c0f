//! Per-user write serialization for read-modify-write handlers.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::UserId;

/// Registry of one async mutex per user.
///
/// Clones share the same registry. Handlers that load, change and save a
/// stored value hold the user's guard across all three steps, so concurrent
/// requests for the same user apply one after another while different users
/// proceed in parallel.
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to the user's data.
    pub async fn lock(&self, user: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Entries nobody holds or waits on are dropped.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(user.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of users currently holding or waiting on a lock.
    pub async fn active_users(&self) -> usize {
        let locks = self.locks.lock().await;
        locks.values().filter(|lock| Arc::strong_count(lock) > 1).count()
    }
}
