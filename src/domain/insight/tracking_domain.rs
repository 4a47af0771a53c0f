//! TrackingDomain - which tracker an insight request belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingDomain {
    Cycle,
    Fertility,
    Menopause,
    Pcos,
    Endometriosis,
}

impl TrackingDomain {
    pub const ALL: [TrackingDomain; 5] = [
        TrackingDomain::Cycle,
        TrackingDomain::Fertility,
        TrackingDomain::Menopause,
        TrackingDomain::Pcos,
        TrackingDomain::Endometriosis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingDomain::Cycle => "cycle",
            TrackingDomain::Fertility => "fertility",
            TrackingDomain::Menopause => "menopause",
            TrackingDomain::Pcos => "pcos",
            TrackingDomain::Endometriosis => "endometriosis",
        }
    }

    /// Response key holding the domain analysis, e.g. `cycleAnalysis`.
    pub fn analysis_key(&self) -> String {
        format!("{}Analysis", self.as_str())
    }

    /// Response key holding the tips list.
    ///
    /// Condition trackers give management tips; the others personalised tips.
    pub fn tips_key(&self) -> &'static str {
        match self {
            TrackingDomain::Cycle | TrackingDomain::Fertility => "personalizedTips",
            TrackingDomain::Menopause | TrackingDomain::Pcos | TrackingDomain::Endometriosis => {
                "managementTips"
            }
        }
    }

    /// Store key under which the latest insights for this domain are kept.
    pub fn store_key(&self) -> String {
        format!("{}Insights", self.as_str())
    }
}

impl fmt::Display for TrackingDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingDomain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackingDomain::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::invalid_format("domain", format!("unknown tracking domain '{}'", s)))
    }
}
