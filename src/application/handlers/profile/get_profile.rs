//! GetProfile - Query handler returning the stored profile with a fresh
//! classification.

use std::sync::Arc;

use crate::application::handlers::{typed_store, HandlerError};
use crate::domain::foundation::UserId;
use crate::domain::profile::{Classification, ProfileClassifier, ProfileRecord};
use crate::ports::{HealthStore, StoreKey};

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct GetProfileResult {
    pub profile: ProfileRecord,
    pub classification: Classification,
}

pub struct GetProfileHandler {
    store: Arc<dyn HealthStore>,
}

impl GetProfileHandler {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self { store }
    }

    /// Returns `None` when the user has not saved a profile yet.
    pub async fn handle(&self, query: GetProfileQuery) -> Result<Option<GetProfileResult>, HandlerError> {
        let profile: Option<ProfileRecord> =
            typed_store::load(self.store.as_ref(), &query.user_id, StoreKey::Profile).await?;

        Ok(profile.map(|profile| GetProfileResult {
            classification: ProfileClassifier::classify(&profile),
            profile,
        }))
    }
}
