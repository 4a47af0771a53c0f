//! CycleSnapshot - the `currentData` sent with cycle-based insight requests.

use serde::Serialize;

use crate::domain::cycle::{CycleEntry, CycleStats};

/// How many of the latest entries are included.
pub const RECENT_ENTRY_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSnapshot {
    pub latest_entry: Option<CycleEntry>,
    pub stats: CycleStats,
    pub entry_count: usize,
    pub recent_entries: Vec<CycleEntry>,
}

impl CycleSnapshot {
    pub fn new(history: &[CycleEntry], stats: CycleStats) -> Self {
        let recent_start = history.len().saturating_sub(RECENT_ENTRY_COUNT);
        Self {
            latest_entry: history.last().cloned(),
            stats,
            entry_count: history.len(),
            recent_entries: history[recent_start..].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::{CycleStatsAggregator, NewCycleEntry};
    use crate::domain::foundation::Timestamp;

    #[test]
    fn keeps_latest_entries_only() {
        let history: Vec<CycleEntry> = (0..8)
            .map(|i| CycleEntry::record(NewCycleEntry::new().with_notes(format!("day {}", i)), Timestamp::now()))
            .collect();
        let stats = CycleStatsAggregator::default().aggregate(&history);

        let snapshot = CycleSnapshot::new(&history, stats);

        assert_eq!(snapshot.entry_count, 8);
        assert_eq!(snapshot.recent_entries.len(), RECENT_ENTRY_COUNT);
        assert_eq!(snapshot.recent_entries[0].notes(), "day 3");
        assert_eq!(snapshot.latest_entry.unwrap().notes(), "day 7");
    }

    #[test]
    fn empty_history() {
        let snapshot = CycleSnapshot::new(&[], CycleStats::not_enough_data());
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value["latestEntry"].is_null());
        assert_eq!(value["entryCount"], 0);
        assert_eq!(value["stats"]["averageLength"], "Not enough data");
    }
}
