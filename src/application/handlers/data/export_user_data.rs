//! ExportUserData - Query handler dumping every stored key for a user.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::HealthStore;

#[derive(Debug, Clone)]
pub struct ExportUserDataQuery {
    pub user_id: UserId,
}

/// JSON dump of the user's store, keyed by store key name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataExport {
    pub user_id: UserId,
    pub exported_at: Timestamp,
    pub data: BTreeMap<String, Value>,
}

pub struct ExportUserDataHandler {
    store: Arc<dyn HealthStore>,
}

impl ExportUserDataHandler {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ExportUserDataQuery) -> Result<UserDataExport, HandlerError> {
        let data = self.store.snapshot(&query.user_id).await?;
        Ok(UserDataExport {
            user_id: query.user_id,
            exported_at: Timestamp::now(),
            data,
        })
    }
}
