//! GenerateInsights - Command handler calling the insight service with a
//! static fallback.
//!
//! Insight failures never fail the request: provider errors, unparsable
//! replies and timeouts are logged and replaced by
//! [`InsightReport::fallback`]. Only generated reports are persisted, so a
//! fallback never overwrites earlier insights.

use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::CycleSnapshot;
use crate::application::handlers::cycle::load_history;
use crate::application::handlers::{typed_store, HandlerError};
use crate::domain::cycle::CycleStatsAggregator;
use crate::domain::foundation::UserId;
use crate::domain::insight::{InsightReport, InsightRequest, TrackingDomain};
use crate::domain::profile::ProfileRecord;
use crate::ports::{HealthStore, InsightError, InsightService, StoreKey};

#[derive(Debug, Clone)]
pub struct GenerateInsightsCommand {
    pub user_id: UserId,
    pub domain: TrackingDomain,
    /// Caller-supplied data; cycle domains fall back to a history snapshot.
    pub current_data: Option<Value>,
}

/// Where a returned report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct GenerateInsightsResult {
    pub report: InsightReport,
    pub source: InsightSource,
}

pub struct GenerateInsightsHandler {
    store: Arc<dyn HealthStore>,
    insights: Arc<dyn InsightService>,
    aggregator: CycleStatsAggregator,
    timeout: Duration,
}

impl GenerateInsightsHandler {
    pub fn new(
        store: Arc<dyn HealthStore>,
        insights: Arc<dyn InsightService>,
        aggregator: CycleStatsAggregator,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            insights,
            aggregator,
            timeout,
        }
    }

    pub async fn handle(&self, cmd: GenerateInsightsCommand) -> Result<GenerateInsightsResult, HandlerError> {
        let store = self.store.as_ref();
        let profile: ProfileRecord = typed_store::load(store, &cmd.user_id, StoreKey::Profile)
            .await?
            .unwrap_or_default();

        let current_data = match cmd.current_data {
            Some(data) => data,
            None => self.default_data(&cmd.user_id, cmd.domain).await?,
        };

        let request = InsightRequest::new(cmd.domain, current_data, profile);

        let outcome = match timeout(self.timeout, self.insights.generate(&cmd.user_id, request)).await {
            Ok(result) => result,
            Err(_) => Err(InsightError::Timeout(self.timeout.as_secs())),
        };

        match outcome {
            Ok(report) => {
                typed_store::save(store, &cmd.user_id, StoreKey::Insights(cmd.domain), &report).await?;
                debug!(user_id = %cmd.user_id, domain = %cmd.domain, "Insights generated");
                Ok(GenerateInsightsResult {
                    report,
                    source: InsightSource::Generated,
                })
            }
            Err(e) => {
                warn!(
                    user_id = %cmd.user_id,
                    domain = %cmd.domain,
                    error = %e,
                    "Insight generation failed, using fallback"
                );
                Ok(GenerateInsightsResult {
                    report: InsightReport::fallback(cmd.domain),
                    source: InsightSource::Fallback,
                })
            }
        }
    }

    async fn default_data(&self, user: &UserId, domain: TrackingDomain) -> Result<Value, HandlerError> {
        match domain {
            TrackingDomain::Cycle | TrackingDomain::Fertility => {
                let history = load_history(self.store.as_ref(), user).await?;
                let stats = self.aggregator.aggregate(&history);
                Ok(serde_json::to_value(CycleSnapshot::new(&history, stats)).unwrap_or_else(|_| json!({})))
            }
            TrackingDomain::Menopause | TrackingDomain::Pcos | TrackingDomain::Endometriosis => Ok(json!({})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::insight::{AIInsightService, DisabledInsightService};
    use crate::adapters::storage::InMemoryHealthStore;
    use crate::application::handlers::cycle::{LogCycleEntryCommand, LogCycleEntryHandler};
    use crate::application::handlers::UserLocks;
    use crate::domain::cycle::NewCycleEntry;

    fn user() -> UserId {
        UserId::new("alice").unwrap()
    }

    fn handler_with(
        store: Arc<InMemoryHealthStore>,
        provider: MockAIProvider,
        timeout: Duration,
    ) -> GenerateInsightsHandler {
        GenerateInsightsHandler::new(
            store,
            Arc::new(AIInsightService::new(Arc::new(provider))),
            CycleStatsAggregator::default(),
            timeout,
        )
    }

    fn cmd(domain: TrackingDomain, current_data: Option<Value>) -> GenerateInsightsCommand {
        GenerateInsightsCommand {
            user_id: user(),
            domain,
            current_data,
        }
    }

    fn good_reply() -> String {
        json!({
            "cycleAnalysis": { "trend": "steady" },
            "aiInsights": "All good.",
            "medicalAlerts": [],
            "personalizedTips": ["Keep logging"]
        })
        .to_string()
    }

    #[tokio::test]
    async fn generated_report_is_persisted() {
        let store = Arc::new(InMemoryHealthStore::new());
        let handler = handler_with(store.clone(), MockAIProvider::new().with_response(good_reply()), Duration::from_secs(5));

        let result = handler.handle(cmd(TrackingDomain::Cycle, None)).await.unwrap();

        assert_eq!(result.source, InsightSource::Generated);
        let stored = store.get(&user(), StoreKey::Insights(TrackingDomain::Cycle)).await.unwrap().unwrap();
        assert_eq!(stored["aiInsights"], "All good.");
        assert_eq!(stored["personalizedTips"][0], "Keep logging");
    }

    #[tokio::test]
    async fn provider_error_yields_fallback_without_persisting() {
        let store = Arc::new(InMemoryHealthStore::new());
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });
        let handler = handler_with(store.clone(), provider, Duration::from_secs(5));

        let result = handler.handle(cmd(TrackingDomain::Pcos, None)).await.unwrap();

        assert_eq!(result.source, InsightSource::Fallback);
        assert_eq!(result.report, InsightReport::fallback(TrackingDomain::Pcos));
        assert!(store.get(&user(), StoreKey::Insights(TrackingDomain::Pcos)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unparsable_reply_yields_fallback() {
        let store = Arc::new(InMemoryHealthStore::new());
        let handler = handler_with(store, MockAIProvider::new().with_response("no json here"), Duration::from_secs(5));

        let result = handler.handle(cmd(TrackingDomain::Cycle, None)).await.unwrap();
        assert_eq!(result.source, InsightSource::Fallback);
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_fallback() {
        let store = Arc::new(InMemoryHealthStore::new());
        let provider = MockAIProvider::new()
            .with_response(good_reply())
            .with_delay(Duration::from_millis(200));
        let handler = handler_with(store, provider, Duration::from_millis(20));

        let result = handler.handle(cmd(TrackingDomain::Cycle, None)).await.unwrap();
        assert_eq!(result.source, InsightSource::Fallback);
    }

    #[tokio::test]
    async fn disabled_service_yields_fallback() {
        let handler = GenerateInsightsHandler::new(
            Arc::new(InMemoryHealthStore::new()),
            Arc::new(DisabledInsightService),
            CycleStatsAggregator::default(),
            Duration::from_secs(1),
        );

        let result = handler.handle(cmd(TrackingDomain::Menopause, None)).await.unwrap();
        assert_eq!(result.source, InsightSource::Fallback);
    }

    #[tokio::test]
    async fn cycle_snapshot_is_sent_when_no_data_given() {
        let store = Arc::new(InMemoryHealthStore::new());
        LogCycleEntryHandler::new(store.clone(), CycleStatsAggregator::default(), UserLocks::new())
            .handle(LogCycleEntryCommand {
                user_id: user(),
                entry: NewCycleEntry::new().with_symptoms(["headache"]),
            })
            .await
            .unwrap();

        let provider = MockAIProvider::new().with_response(good_reply());
        let handler = handler_with(store, provider.clone(), Duration::from_secs(5));
        handler.handle(cmd(TrackingDomain::Cycle, None)).await.unwrap();

        let sent = &provider.get_calls()[0].messages[0].content;
        let body: Value = serde_json::from_str(sent).unwrap();
        assert_eq!(body["currentData"]["entryCount"], 1);
        assert_eq!(body["currentData"]["latestEntry"]["symptoms"][0], "headache");
    }

    #[tokio::test]
    async fn caller_data_is_forwarded_verbatim() {
        let provider = MockAIProvider::new().with_response(
            json!({ "menopauseAnalysis": {}, "aiInsights": "ok", "managementTips": [] }).to_string(),
        );
        let handler = handler_with(Arc::new(InMemoryHealthStore::new()), provider.clone(), Duration::from_secs(5));

        handler
            .handle(cmd(TrackingDomain::Menopause, Some(json!({ "hotFlashes": 4 }))))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&provider.get_calls()[0].messages[0].content).unwrap();
        assert_eq!(body["currentData"], json!({ "hotFlashes": 4 }));
    }
}
