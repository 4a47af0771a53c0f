//! ListEntries - Query handler returning the cycle history in logged order.

use std::sync::Arc;

use super::load_history;
use crate::application::handlers::HandlerError;
use crate::domain::cycle::CycleEntry;
use crate::domain::foundation::UserId;
use crate::ports::HealthStore;

#[derive(Debug, Clone)]
pub struct ListEntriesQuery {
    pub user_id: UserId,
}

pub struct ListEntriesHandler {
    store: Arc<dyn HealthStore>,
}

impl ListEntriesHandler {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListEntriesQuery) -> Result<Vec<CycleEntry>, HandlerError> {
        Ok(load_history(self.store.as_ref(), &query.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHealthStore;

    #[tokio::test]
    async fn empty_history_for_new_user() {
        let handler = ListEntriesHandler::new(Arc::new(InMemoryHealthStore::new()));
        let entries = handler
            .handle(ListEntriesQuery {
                user_id: UserId::new("new").unwrap(),
            })
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
