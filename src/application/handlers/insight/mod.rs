//! Insight handlers.

mod cycle_snapshot;
mod generate_insights;

pub use cycle_snapshot::{CycleSnapshot, RECENT_ENTRY_COUNT};
pub use generate_insights::{
    GenerateInsightsCommand, GenerateInsightsHandler, GenerateInsightsResult, InsightSource,
};
