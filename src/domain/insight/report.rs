//! Insight request and report shapes.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};

use super::TrackingDomain;
use crate::domain::profile::ProfileRecord;

/// Snapshot forwarded to the insight service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    #[serde(skip)]
    pub domain: TrackingDomain,
    pub current_data: Value,
    pub user_profile: ProfileRecord,
}

impl InsightRequest {
    pub fn new(domain: TrackingDomain, current_data: Value, user_profile: ProfileRecord) -> Self {
        Self {
            domain,
            current_data,
            user_profile,
        }
    }
}

/// Urgency of a medical alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum AlertPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl From<Option<String>> for AlertPriority {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("high") | Some("urgent") => AlertPriority::High,
            Some("low") => AlertPriority::Low,
            _ => AlertPriority::Medium,
        }
    }
}

/// Alert suggesting the user consult a clinician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    #[serde(default)]
    pub priority: AlertPriority,
}

/// Insight returned by the service (or the static fallback).
///
/// Serializes with domain-specific keys: `{ <domain>Analysis, aiInsights,
/// medicalAlerts, personalizedTips | managementTips }`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightReport {
    pub domain: TrackingDomain,
    pub analysis: Value,
    pub ai_insights: String,
    pub medical_alerts: Vec<MedicalAlert>,
    pub tips: Vec<String>,
}

impl InsightReport {
    /// Fixed report substituted when the insight service is unavailable.
    pub fn fallback(domain: TrackingDomain) -> Self {
        let (summary, tips): (&str, &[&str]) = match domain {
            TrackingDomain::Cycle => (
                "Keep logging your cycle to build a clearer picture of your patterns.",
                &[
                    "Log your flow and symptoms daily, even on days without a period.",
                    "Note sleep and energy alongside symptoms to spot links.",
                    "Stay hydrated and keep regular meals around your period.",
                ],
            ),
            TrackingDomain::Fertility => (
                "Consistent tracking helps estimate your fertile window more reliably.",
                &[
                    "Track cycle start dates consistently.",
                    "Record cervical mucus and basal temperature if you can.",
                    "Talk to a clinician before making decisions based on predictions.",
                ],
            ),
            TrackingDomain::Menopause => (
                "Tracking symptoms over time helps you and your clinician spot trends.",
                &[
                    "Record hot flashes, sleep disruption and mood changes.",
                    "Regular exercise and good sleep routines can ease symptoms.",
                    "Discuss treatment options with a healthcare provider.",
                ],
            ),
            TrackingDomain::Pcos => (
                "Logging cycles and symptoms supports PCOS management conversations.",
                &[
                    "Keep a record of cycle length and irregularities.",
                    "Balanced meals and regular activity can support hormone balance.",
                    "Share your logs with your healthcare provider.",
                ],
            ),
            TrackingDomain::Endometriosis => (
                "Detailed pain and symptom logs help guide endometriosis care.",
                &[
                    "Rate pain levels and note when they occur in your cycle.",
                    "Track which relief strategies help.",
                    "Seek care promptly if pain disrupts daily life.",
                ],
            ),
        };

        Self {
            domain,
            analysis: json!({ "status": "unavailable", "summary": summary }),
            ai_insights: "AI insights are temporarily unavailable. Your data is saved and insights will return shortly."
                .to_string(),
            medical_alerts: Vec::new(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Serialize for InsightReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(&self.domain.analysis_key(), &self.analysis)?;
        map.serialize_entry("aiInsights", &self.ai_insights)?;
        map.serialize_entry("medicalAlerts", &self.medical_alerts)?;
        map.serialize_entry(self.domain.tips_key(), &self.tips)?;
        map.end()
    }
}
