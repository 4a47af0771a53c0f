//! Cycle tracking configuration

use serde::Deserialize;

use crate::domain::cycle::{CycleLengthMethod, CycleStatsAggregator};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TrackingConfig {
    /// `placeholder` (constant 28 days) or `date_delta`
    #[serde(default)]
    pub cycle_length_method: CycleLengthMethod,
}

impl TrackingConfig {
    pub fn aggregator(&self) -> CycleStatsAggregator {
        CycleStatsAggregator::new(self.cycle_length_method)
    }
}
