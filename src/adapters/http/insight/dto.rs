//! HTTP DTOs for insight endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::{GenerateInsightsResult, InsightSource};
use crate::domain::insight::{InsightReport, TrackingDomain};

/// Optional request body; an empty body is treated like `{}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInsightsRequest {
    #[serde(default)]
    pub current_data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    pub domain: TrackingDomain,
    pub source: InsightSource,
    pub insights: InsightReport,
}

impl From<GenerateInsightsResult> for InsightsResponse {
    fn from(result: GenerateInsightsResult) -> Self {
        Self {
            domain: result.report.domain,
            source: result.source,
            insights: result.report,
        }
    }
}
