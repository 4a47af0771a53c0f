use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::insight::{InsightReport, InsightRequest};
use crate::ports::{InsightError, InsightService};

/// Insight service used when no AI provider is configured.
///
/// Every call fails with [`InsightError::NotConfigured`], which callers turn
/// into the static fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInsightService;

#[async_trait]
impl InsightService for DisabledInsightService {
    async fn generate(&self, _user: &UserId, _request: InsightRequest) -> Result<InsightReport, InsightError> {
        Err(InsightError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight::TrackingDomain;
    use crate::domain::profile::ProfileRecord;

    #[tokio::test]
    async fn always_not_configured() {
        let request = InsightRequest::new(TrackingDomain::Cycle, serde_json::json!({}), ProfileRecord::new());
        let result = DisabledInsightService
            .generate(&UserId::new("u").unwrap(), request)
            .await;
        assert!(matches!(result, Err(InsightError::NotConfigured)));
    }
}
