//! LogCycleEntry - Command handler appending an entry to the cycle history.
//!
//! Stats are recomputed over the whole history after every append and
//! persisted alongside it. The user's lock is held from load to save so
//! concurrent appends never drop entries.

use std::sync::Arc;
use tracing::debug;

use super::load_history;
use crate::application::handlers::{typed_store, HandlerError, UserLocks};
use crate::domain::cycle::{CycleEntry, CycleStats, CycleStatsAggregator, NewCycleEntry};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{HealthStore, StoreKey};

#[derive(Debug, Clone)]
pub struct LogCycleEntryCommand {
    pub user_id: UserId,
    pub entry: NewCycleEntry,
}

#[derive(Debug, Clone)]
pub struct LogCycleEntryResult {
    pub entry: CycleEntry,
    pub stats: CycleStats,
    pub entry_count: usize,
}

pub struct LogCycleEntryHandler {
    store: Arc<dyn HealthStore>,
    aggregator: CycleStatsAggregator,
    locks: UserLocks,
}

impl LogCycleEntryHandler {
    pub fn new(store: Arc<dyn HealthStore>, aggregator: CycleStatsAggregator, locks: UserLocks) -> Self {
        Self {
            store,
            aggregator,
            locks,
        }
    }

    pub async fn handle(&self, cmd: LogCycleEntryCommand) -> Result<LogCycleEntryResult, HandlerError> {
        let _guard = self.locks.lock(&cmd.user_id).await;
        let store = self.store.as_ref();
        let mut history = load_history(store, &cmd.user_id).await?;

        let entry = CycleEntry::record(cmd.entry, Timestamp::now());
        history.push(entry.clone());

        let stats = self.aggregator.aggregate(&history);

        typed_store::save(store, &cmd.user_id, StoreKey::CycleHistory, &history).await?;
        typed_store::save(store, &cmd.user_id, StoreKey::CycleStats, &stats).await?;

        debug!(
            user_id = %cmd.user_id,
            entry_id = %entry.id(),
            entry_count = history.len(),
            "Cycle entry logged"
        );

        Ok(LogCycleEntryResult {
            entry,
            stats,
            entry_count: history.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHealthStore;
    use crate::domain::cycle::{AverageLength, CycleLengthMethod, FlowIntensity, Regularity};
    use chrono::NaiveDate;

    fn user() -> UserId {
        UserId::new("alice").unwrap()
    }

    fn handler(store: Arc<InMemoryHealthStore>) -> LogCycleEntryHandler {
        LogCycleEntryHandler::new(store, CycleStatsAggregator::default(), UserLocks::new())
    }

    fn draft(day: u32, symptoms: &[&str]) -> NewCycleEntry {
        NewCycleEntry::new()
            .on(NaiveDate::from_ymd_opt(2024, 3, day).unwrap())
            .with_flow(FlowIntensity::Medium)
            .with_symptoms(symptoms.iter().copied())
    }

    #[tokio::test]
    async fn first_entry_has_not_enough_data() {
        let store = Arc::new(InMemoryHealthStore::new());
        let result = handler(store)
            .handle(LogCycleEntryCommand {
                user_id: user(),
                entry: draft(1, &["cramps"]),
            })
            .await
            .unwrap();

        assert_eq!(result.entry_count, 1);
        assert_eq!(result.stats, CycleStats::not_enough_data());
    }

    #[tokio::test]
    async fn appends_and_persists_recomputed_stats() {
        let store = Arc::new(InMemoryHealthStore::new());
        let handler = handler(store.clone());

        for (day, symptoms) in [(1, vec!["cramps", "bloating"]), (2, vec!["cramps"])] {
            handler
                .handle(LogCycleEntryCommand {
                    user_id: user(),
                    entry: draft(day, &symptoms),
                })
                .await
                .unwrap();
        }

        let history: Vec<CycleEntry> = typed_store::load(store.as_ref(), &user(), StoreKey::CycleHistory)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let stats: CycleStats = typed_store::load(store.as_ref(), &user(), StoreKey::CycleStats)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.average_length, AverageLength::Days(28));
        assert_eq!(stats.regularity, Regularity::Regular);
        assert_eq!(stats.common_symptoms, vec!["cramps".to_string(), "bloating".to_string()]);
    }

    #[tokio::test]
    async fn date_delta_method_uses_entry_dates() {
        let store = Arc::new(InMemoryHealthStore::new());
        let handler = LogCycleEntryHandler::new(
            store,
            CycleStatsAggregator::new(CycleLengthMethod::DateDelta),
            UserLocks::new(),
        );

        let mut last = None;
        for day in [1, 31] {
            last = Some(
                handler
                    .handle(LogCycleEntryCommand {
                        user_id: user(),
                        entry: draft(day, &[]),
                    })
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(last.unwrap().stats.average_length, AverageLength::Days(30));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_for_one_user_are_all_kept() {
        let store = Arc::new(InMemoryHealthStore::new());
        let handler = Arc::new(handler(store.clone()));

        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let handler = handler.clone();
                tokio::spawn(async move {
                    handler
                        .handle(LogCycleEntryCommand {
                            user_id: user(),
                            entry: NewCycleEntry::new().with_notes(format!("entry {}", i)),
                        })
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let history: Vec<CycleEntry> = typed_store::load(store.as_ref(), &user(), StoreKey::CycleHistory)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(history.len(), 50);
    }
}
