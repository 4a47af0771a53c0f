//! SaveProfile - Command handler for storing a profile and classifying it.

use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::{typed_store, HandlerError};
use crate::domain::foundation::UserId;
use crate::domain::profile::{Classification, ProfileClassifier, ProfileRecord};
use crate::ports::{HealthStore, StoreKey};

/// Command to replace the user's profile.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub user_id: UserId,
    pub profile: ProfileRecord,
}

/// Result of saving a profile.
#[derive(Debug, Clone)]
pub struct SaveProfileResult {
    pub profile: ProfileRecord,
    pub classification: Classification,
}

/// Handler for saving profiles.
pub struct SaveProfileHandler {
    store: Arc<dyn HealthStore>,
}

impl SaveProfileHandler {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<SaveProfileResult, HandlerError> {
        typed_store::save(self.store.as_ref(), &cmd.user_id, StoreKey::Profile, &cmd.profile).await?;

        // Only the record is stored; the type is derived again on every read.
        let classification = ProfileClassifier::classify(&cmd.profile);
        debug!(
            user_id = %cmd.user_id,
            user_type = %classification.user_type,
            "Profile saved"
        );

        Ok(SaveProfileResult {
            profile: cmd.profile,
            classification,
        })
    }
}
