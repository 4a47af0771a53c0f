//! Cycle module - logged cycle entries and their summary statistics.
//!
//! # Components
//!
//! - `CycleEntry` / `NewCycleEntry` - immutable logged day and its draft
//! - `CycleStats` - average length, regularity, top symptoms, pattern
//! - `CycleStatsAggregator` - pure reduction from history to stats
//!
//! Statistics are never maintained incrementally; every query recomputes them
//! from the whole history.

mod aggregator;
mod entry;
mod stats;

pub use aggregator::{
    CycleLengthMethod, CycleStatsAggregator, PLACEHOLDER_CYCLE_LENGTH,
    REGULARITY_TOLERANCE_DAYS, TOP_SYMPTOM_COUNT,
};
pub use entry::{CycleEntry, EnergyLevel, FlowIntensity, Mood, NewCycleEntry, SleepQuality};
pub use stats::{AverageLength, CyclePattern, CycleStats, Regularity, NOT_ENOUGH_DATA};
