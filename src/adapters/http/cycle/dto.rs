//! HTTP DTOs for cycle endpoints.

use serde::Serialize;

use crate::application::handlers::LogCycleEntryResult;
use crate::domain::cycle::{CycleEntry, CycleStats};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesResponse {
    pub count: usize,
    pub entries: Vec<CycleEntry>,
}

impl From<Vec<CycleEntry>> for EntriesResponse {
    fn from(entries: Vec<CycleEntry>) -> Self {
        Self {
            count: entries.len(),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedEntryResponse {
    pub entry: CycleEntry,
    pub stats: CycleStats,
    pub entry_count: usize,
}

impl From<LogCycleEntryResult> for LoggedEntryResponse {
    fn from(result: LogCycleEntryResult) -> Self {
        Self {
            entry: result.entry,
            stats: result.stats,
            entry_count: result.entry_count,
        }
    }
}
