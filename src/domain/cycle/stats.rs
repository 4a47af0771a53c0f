//! CycleStats - summary statistics derived from a cycle history.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker shown instead of an average when the history is too short.
pub const NOT_ENOUGH_DATA: &str = "Not enough data";

/// Average cycle length, or a marker when it cannot be computed.
///
/// Serializes as a bare integer or as the string `"Not enough data"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageLength {
    NotEnoughData,
    Days(u32),
}

impl AverageLength {
    /// Returns the number of days, if known.
    pub fn days(&self) -> Option<u32> {
        match self {
            AverageLength::Days(days) => Some(*days),
            AverageLength::NotEnoughData => None,
        }
    }
}

impl Serialize for AverageLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AverageLength::Days(days) => serializer.serialize_u32(*days),
            AverageLength::NotEnoughData => serializer.serialize_str(NOT_ENOUGH_DATA),
        }
    }
}

impl<'de> Deserialize<'de> for AverageLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Days(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Days(days) => Ok(AverageLength::Days(days)),
            Raw::Text(text) if text == NOT_ENOUGH_DATA => Ok(AverageLength::NotEnoughData),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a day count or \"{}\", got \"{}\"",
                NOT_ENOUGH_DATA, text
            ))),
        }
    }
}

/// Whether cycle lengths stay close to their average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regularity {
    Regular,
    Irregular,
    Unknown,
}

/// Human-readable pattern label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePattern {
    #[serde(rename = "Consistent pattern")]
    Consistent,
    #[serde(rename = "Variable pattern")]
    Variable,
    #[serde(rename = "Continue tracking")]
    ContinueTracking,
}

/// Statistics recomputed in full from the history on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleStats {
    pub average_length: AverageLength,
    pub regularity: Regularity,
    pub common_symptoms: Vec<String>,
    pub pattern: CyclePattern,
}

impl CycleStats {
    /// Sentinel statistics for histories shorter than two entries.
    pub fn not_enough_data() -> Self {
        Self {
            average_length: AverageLength::NotEnoughData,
            regularity: Regularity::Unknown,
            common_symptoms: Vec::new(),
            pattern: CyclePattern::ContinueTracking,
        }
    }
}
