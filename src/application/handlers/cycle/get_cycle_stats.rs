//! GetCycleStats - Query handler recomputing stats from the stored history.

use std::sync::Arc;

use super::load_history;
use crate::application::handlers::HandlerError;
use crate::domain::cycle::{CycleStats, CycleStatsAggregator};
use crate::domain::foundation::UserId;
use crate::ports::HealthStore;

#[derive(Debug, Clone)]
pub struct GetCycleStatsQuery {
    pub user_id: UserId,
}

pub struct GetCycleStatsHandler {
    store: Arc<dyn HealthStore>,
    aggregator: CycleStatsAggregator,
}

impl GetCycleStatsHandler {
    pub fn new(store: Arc<dyn HealthStore>, aggregator: CycleStatsAggregator) -> Self {
        Self { store, aggregator }
    }

    /// Never reads the persisted `cycleStats` key; the history is the source of truth.
    pub async fn handle(&self, query: GetCycleStatsQuery) -> Result<CycleStats, HandlerError> {
        let history = load_history(self.store.as_ref(), &query.user_id).await?;
        Ok(self.aggregator.aggregate(&history))
    }
}
