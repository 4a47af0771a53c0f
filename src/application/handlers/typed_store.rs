//! Typed reads and writes over the JSON-valued [`HealthStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::ports::{HealthStore, StoreError, StoreKey};

/// Reads and decodes the value under `key`.
pub(crate) async fn load<T: DeserializeOwned>(
    store: &dyn HealthStore,
    user: &UserId,
    key: StoreKey,
) -> Result<Option<T>, StoreError> {
    match store.get(user, key).await? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::corrupted(key, e.to_string())),
        None => Ok(None),
    }
}

/// Encodes and writes `value` under `key`.
pub(crate) async fn save<T: Serialize>(
    store: &dyn HealthStore,
    user: &UserId,
    key: StoreKey,
    value: &T,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_value(value).map_err(|e| StoreError::serialization(key, e.to_string()))?;
    store.set(user, key, encoded).await
}
