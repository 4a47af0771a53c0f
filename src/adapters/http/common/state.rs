//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::{
    DeleteUserDataHandler, ExportUserDataHandler, GenerateInsightsHandler, GetCycleStatsHandler,
    GetProfileHandler, ListEntriesHandler, LogCycleEntryHandler, SaveProfileHandler, UserLocks,
};
use crate::domain::cycle::CycleStatsAggregator;
use crate::ports::{HealthStore, InsightService};

/// Shared application state containing the ports every route needs.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HealthStore>,
    pub insights: Arc<dyn InsightService>,
    pub aggregator: CycleStatsAggregator,
    pub insight_timeout: Duration,
    /// Serializes read-modify-write updates per user.
    pub locks: UserLocks,
}

impl AppState {
    pub fn new(
        store: Arc<dyn HealthStore>,
        insights: Arc<dyn InsightService>,
        aggregator: CycleStatsAggregator,
        insight_timeout: Duration,
    ) -> Self {
        Self {
            store,
            insights,
            aggregator,
            insight_timeout,
            locks: UserLocks::new(),
        }
    }

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.store.clone())
    }

    pub fn save_profile_handler(&self) -> SaveProfileHandler {
        SaveProfileHandler::new(self.store.clone())
    }

    pub fn log_cycle_entry_handler(&self) -> LogCycleEntryHandler {
        LogCycleEntryHandler::new(self.store.clone(), self.aggregator, self.locks.clone())
    }

    pub fn list_entries_handler(&self) -> ListEntriesHandler {
        ListEntriesHandler::new(self.store.clone())
    }

    pub fn get_cycle_stats_handler(&self) -> GetCycleStatsHandler {
        GetCycleStatsHandler::new(self.store.clone(), self.aggregator)
    }

    pub fn generate_insights_handler(&self) -> GenerateInsightsHandler {
        GenerateInsightsHandler::new(
            self.store.clone(),
            self.insights.clone(),
            self.aggregator,
            self.insight_timeout,
        )
    }

    pub fn export_user_data_handler(&self) -> ExportUserDataHandler {
        ExportUserDataHandler::new(self.store.clone())
    }

    pub fn delete_user_data_handler(&self) -> DeleteUserDataHandler {
        DeleteUserDataHandler::new(self.store.clone(), self.locks.clone())
    }
}
