//! Cycle tracking handlers.

mod get_cycle_stats;
mod list_entries;
mod log_cycle_entry;

pub use get_cycle_stats::{GetCycleStatsHandler, GetCycleStatsQuery};
pub use list_entries::{ListEntriesHandler, ListEntriesQuery};
pub use log_cycle_entry::{LogCycleEntryCommand, LogCycleEntryHandler, LogCycleEntryResult};

use crate::application::handlers::typed_store;
use crate::domain::cycle::CycleEntry;
use crate::domain::foundation::UserId;
use crate::ports::{HealthStore, StoreError, StoreKey};

/// Loads the user's history, empty when nothing was logged yet.
pub(crate) async fn load_history(store: &dyn HealthStore, user: &UserId) -> Result<Vec<CycleEntry>, StoreError> {
    Ok(typed_store::load(store, user, StoreKey::CycleHistory)
        .await?
        .unwrap_or_default())
}
