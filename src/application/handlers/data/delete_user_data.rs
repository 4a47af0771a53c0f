//! DeleteUserData - Command handler removing every stored key for a user.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::{HandlerError, UserLocks};
use crate::domain::foundation::UserId;
use crate::ports::HealthStore;

#[derive(Debug, Clone)]
pub struct DeleteUserDataCommand {
    pub user_id: UserId,
}

pub struct DeleteUserDataHandler {
    store: Arc<dyn HealthStore>,
    locks: UserLocks,
}

impl DeleteUserDataHandler {
    pub fn new(store: Arc<dyn HealthStore>, locks: UserLocks) -> Self {
        Self { store, locks }
    }

    /// Waits for in-flight appends so none of them lands after the wipe.
    pub async fn handle(&self, cmd: DeleteUserDataCommand) -> Result<(), HandlerError> {
        let _guard = self.locks.lock(&cmd.user_id).await;
        self.store.clear(&cmd.user_id).await?;
        info!(user_id = %cmd.user_id, "User data deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHealthStore;
    use crate::ports::StoreKey;
    use serde_json::json;

    #[tokio::test]
    async fn removes_everything_and_is_idempotent() {
        let store = Arc::new(InMemoryHealthStore::new());
        let alice = UserId::new("alice").unwrap();
        store.set(&alice, StoreKey::Profile, json!({})).await.unwrap();

        let handler = DeleteUserDataHandler::new(store.clone(), UserLocks::new());
        handler.handle(DeleteUserDataCommand { user_id: alice.clone() }).await.unwrap();
        handler.handle(DeleteUserDataCommand { user_id: alice.clone() }).await.unwrap();

        assert!(store.snapshot(&alice).await.unwrap().is_empty());
    }
}
