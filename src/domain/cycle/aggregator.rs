//! Cycle Statistics Aggregator - reduces a history into [`CycleStats`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::entry::CycleEntry;
use super::stats::{AverageLength, CyclePattern, CycleStats, Regularity};

/// Length reported for every entry by [`CycleLengthMethod::Placeholder`].
pub const PLACEHOLDER_CYCLE_LENGTH: u32 = 28;

/// Maximum distance (days, inclusive) from the mean for a regular history.
pub const REGULARITY_TOLERANCE_DAYS: f64 = 7.0;

/// Number of symptoms reported in `common_symptoms`.
pub const TOP_SYMPTOM_COUNT: usize = 3;

/// How per-entry cycle lengths are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleLengthMethod {
    /// Every entry counts as a 28-day cycle.
    #[default]
    Placeholder,
    /// Day difference between each pair of consecutive entries.
    DateDelta,
}

/// Stateless aggregator; the method is the only knob.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleStatsAggregator {
    method: CycleLengthMethod,
}

impl CycleStatsAggregator {
    pub fn new(method: CycleLengthMethod) -> Self {
        Self { method }
    }

    /// Computes statistics over the full history.
    ///
    /// # Edge Cases
    /// - Fewer than two entries: returns [`CycleStats::not_enough_data`]
    pub fn aggregate(&self, history: &[CycleEntry]) -> CycleStats {
        if history.len() < 2 {
            return CycleStats::not_enough_data();
        }

        let lengths = self.cycle_lengths(history);
        let mean = lengths.iter().map(|&l| f64::from(l)).sum::<f64>() / lengths.len() as f64;
        let is_regular = lengths
            .iter()
            .all(|&l| (f64::from(l) - mean).abs() <= REGULARITY_TOLERANCE_DAYS);

        let (regularity, pattern) = if is_regular {
            (Regularity::Regular, CyclePattern::Consistent)
        } else {
            (Regularity::Irregular, CyclePattern::Variable)
        };

        CycleStats {
            average_length: AverageLength::Days(mean.round() as u32),
            regularity,
            common_symptoms: Self::common_symptoms(history, TOP_SYMPTOM_COUNT),
            pattern,
        }
    }

    /// Per-entry cycle lengths for a history of at least two entries.
    pub fn cycle_lengths(&self, history: &[CycleEntry]) -> Vec<u32> {
        match self.method {
            CycleLengthMethod::Placeholder => vec![PLACEHOLDER_CYCLE_LENGTH; history.len()],
            CycleLengthMethod::DateDelta => history
                .windows(2)
                .map(|pair| {
                    let days = pair[1].date().signed_duration_since(pair[0].date()).num_days();
                    u32::try_from(days.unsigned_abs()).unwrap_or(u32::MAX)
                })
                .collect(),
        }
    }

    /// Most frequent symptom tags, at most `limit` of them.
    ///
    /// Each entry contributes at most once per tag. Ties keep the order in
    /// which tags were first seen while scanning the history.
    pub fn common_symptoms(history: &[CycleEntry], limit: usize) -> Vec<String> {
        let mut tally: Vec<(&str, usize)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for entry in history {
            for symptom in entry.symptoms() {
                match positions.get(symptom.as_str()) {
                    Some(&index) => tally[index].1 += 1,
                    None => {
                        positions.insert(symptom.as_str(), tally.len());
                        tally.push((symptom.as_str(), 1));
                    }
                }
            }
        }

        // sort_by is stable, so equal counts stay in first-seen order
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        tally
            .into_iter()
            .take(limit)
            .map(|(symptom, _)| symptom.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::NewCycleEntry;
    use crate::domain::foundation::Timestamp;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn entry(symptoms: &[&str]) -> CycleEntry {
        CycleEntry::record(
            NewCycleEntry::new().with_symptoms(symptoms.iter().copied()),
            Timestamp::now(),
        )
    }

    fn entry_on(y: i32, m: u32, d: u32) -> CycleEntry {
        CycleEntry::record(
            NewCycleEntry::new().on(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            Timestamp::now(),
        )
    }

    #[test]
    fn empty_history_is_not_enough_data() {
        let stats = CycleStatsAggregator::default().aggregate(&[]);
        assert_eq!(stats, CycleStats::not_enough_data());
    }

    #[test]
    fn single_entry_is_not_enough_data() {
        let stats = CycleStatsAggregator::default().aggregate(&[entry(&["cramps"])]);
        assert_eq!(stats, CycleStats::not_enough_data());
        assert!(stats.common_symptoms.is_empty());
    }

    #[test]
    fn placeholder_history_is_regular_28() {
        let history: Vec<_> = (0..5).map(|_| entry(&[])).collect();
        let stats = CycleStatsAggregator::default().aggregate(&history);
        assert_eq!(stats.average_length, AverageLength::Days(28));
        assert_eq!(stats.regularity, Regularity::Regular);
        assert_eq!(stats.pattern, CyclePattern::Consistent);
    }

    #[test]
    fn common_symptoms_ties_break_by_first_seen() {
        let history = vec![
            entry(&["a", "b"]),
            entry(&["a"]),
            entry(&["b", "c"]),
            entry(&["a", "c"]),
        ];
        let stats = CycleStatsAggregator::default().aggregate(&history);
        assert_eq!(stats.common_symptoms, vec!["a", "b", "c"]);
    }

    #[test]
    fn common_symptoms_limited_to_three() {
        let history = vec![entry(&["d", "c", "b", "a"]), entry(&["a", "e"])];
        let stats = CycleStatsAggregator::default().aggregate(&history);
        assert_eq!(stats.common_symptoms, vec!["a", "d", "c"]);
    }

    #[test]
    fn common_symptoms_returns_fewer_when_fewer_exist() {
        let history = vec![entry(&["fatigue"]), entry(&[])];
        let stats = CycleStatsAggregator::default().aggregate(&history);
        assert_eq!(stats.common_symptoms, vec!["fatigue"]);
    }

    #[test]
    fn date_delta_uses_consecutive_gaps() {
        let aggregator = CycleStatsAggregator::new(CycleLengthMethod::DateDelta);
        let history = vec![entry_on(2024, 1, 1), entry_on(2024, 1, 29), entry_on(2024, 2, 27)];
        assert_eq!(aggregator.cycle_lengths(&history), vec![28, 29]);

        let stats = aggregator.aggregate(&history);
        // mean 28.5 rounds half away from zero
        assert_eq!(stats.average_length, AverageLength::Days(29));
        assert_eq!(stats.regularity, Regularity::Regular);
    }

    #[test]
    fn date_delta_flags_irregular_history() {
        let aggregator = CycleStatsAggregator::new(CycleLengthMethod::DateDelta);
        let history = vec![
            entry_on(2024, 1, 1),
            entry_on(2024, 1, 22),
            entry_on(2024, 3, 2),
        ];
        // gaps 21 and 40, mean 30.5: both more than 7 days away
        let stats = aggregator.aggregate(&history);
        assert_eq!(stats.regularity, Regularity::Irregular);
        assert_eq!(stats.pattern, CyclePattern::Variable);
        assert_eq!(stats.average_length, AverageLength::Days(31));
    }

    #[test]
    fn date_delta_tolerance_is_inclusive() {
        let aggregator = CycleStatsAggregator::new(CycleLengthMethod::DateDelta);
        // gaps 21 and 35, mean 28: both exactly 7 away
        let history = vec![
            entry_on(2024, 1, 1),
            entry_on(2024, 1, 22),
            entry_on(2024, 2, 26),
        ];
        assert_eq!(aggregator.aggregate(&history).regularity, Regularity::Regular);
    }

    #[test]
    fn date_delta_ignores_ordering_direction() {
        let aggregator = CycleStatsAggregator::new(CycleLengthMethod::DateDelta);
        let history = vec![entry_on(2024, 2, 1), entry_on(2024, 1, 4)];
        assert_eq!(aggregator.cycle_lengths(&history), vec![28]);
    }

    fn symptom_sets() -> impl Strategy<Value = Vec<Vec<String>>> {
        proptest::collection::vec(
            proptest::collection::vec("[a-e]", 0..4),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn short_histories_always_return_sentinel(n in 0usize..2) {
            let history: Vec<_> = (0..n).map(|_| entry(&["x"])).collect();
            prop_assert_eq!(
                CycleStatsAggregator::default().aggregate(&history),
                CycleStats::not_enough_data()
            );
        }

        #[test]
        fn placeholder_histories_are_always_regular(n in 2usize..20) {
            let history: Vec<_> = (0..n).map(|_| entry(&[])).collect();
            let stats = CycleStatsAggregator::default().aggregate(&history);
            prop_assert_eq!(stats.average_length, AverageLength::Days(PLACEHOLDER_CYCLE_LENGTH));
            prop_assert_eq!(stats.regularity, Regularity::Regular);
        }

        #[test]
        fn common_symptoms_are_distinct_and_sorted_by_count(sets in symptom_sets()) {
            let history: Vec<_> = sets
                .iter()
                .map(|s| CycleEntry::record(
                    NewCycleEntry::new().with_symptoms(s.iter().cloned()),
                    Timestamp::now(),
                ))
                .collect();
            let top = CycleStatsAggregator::common_symptoms(&history, TOP_SYMPTOM_COUNT);

            prop_assert!(top.len() <= TOP_SYMPTOM_COUNT);
            let count = |tag: &str| history.iter().filter(|e| e.symptoms().iter().any(|s| s == tag)).count();
            for pair in top.windows(2) {
                prop_assert!(pair[0] != pair[1]);
                prop_assert!(count(pair[0].as_str()) >= count(pair[1].as_str()));
            }
        }
    }
}
