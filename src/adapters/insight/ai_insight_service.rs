//! AI-backed insight service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::prompt;
use crate::domain::foundation::UserId;
use crate::domain::insight::{InsightReport, InsightRequest};
use crate::ports::{
    AIProvider, CompletionRequest, InsightError, InsightService, MessageRole, RequestMetadata,
};

const MAX_REPLY_TOKENS: u32 = 1200;
const TEMPERATURE: f32 = 0.4;

/// Generates insights by prompting a chat-completion provider.
pub struct AIInsightService {
    provider: Arc<dyn AIProvider>,
}

impl AIInsightService {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl InsightService for AIInsightService {
    async fn generate(&self, user: &UserId, request: InsightRequest) -> Result<InsightReport, InsightError> {
        let domain = request.domain;
        let user_message = prompt::user_message(&request)?;
        let trace_id = Uuid::new_v4().to_string();

        debug!(
            user_id = %user,
            domain = %domain,
            trace_id = %trace_id,
            estimated_tokens = self.provider.estimate_tokens(&user_message),
            provider = %self.provider.provider_info().name,
            "Requesting insights"
        );

        let completion = CompletionRequest::new(RequestMetadata::new(user.clone(), trace_id))
            .with_system_prompt(prompt::system_prompt(domain))
            .with_message(MessageRole::User, user_message)
            .with_max_tokens(MAX_REPLY_TOKENS)
            .with_temperature(TEMPERATURE)
            .with_json_output();

        let response = self
            .provider
            .complete(completion)
            .await
            .map_err(|e| InsightError::Provider(e.to_string()))?;

        prompt::parse_reply(domain, &response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::insight::TrackingDomain;
    use crate::domain::profile::ProfileRecord;
    use serde_json::json;

    fn request(domain: TrackingDomain) -> InsightRequest {
        InsightRequest::new(domain, json!({ "entryCount": 4 }), ProfileRecord::new().with_gender_identity("Woman"))
    }

    fn user() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[tokio::test]
    async fn sends_snapshot_and_parses_reply() {
        let provider = Arc::new(MockAIProvider::new().with_response(
            json!({
                "menopauseAnalysis": { "hotFlashes": "frequent" },
                "aiInsights": "Symptoms cluster in the evening.",
                "medicalAlerts": [],
                "managementTips": ["Keep a fan nearby"]
            })
            .to_string(),
        ));
        let service = AIInsightService::new(provider.clone());

        let report = service.generate(&user(), request(TrackingDomain::Menopause)).await.unwrap();

        assert_eq!(report.domain, TrackingDomain::Menopause);
        assert_eq!(report.tips, vec!["Keep a fan nearby".to_string()]);

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].json_output);
        assert!(calls[0].system_prompt.as_deref().unwrap().contains("menopauseAnalysis"));
        assert!(calls[0].messages[0].content.contains("\"currentData\""));
        assert!(calls[0].messages[0].content.contains("\"userProfile\""));
    }

    #[tokio::test]
    async fn provider_failure_becomes_insight_error() {
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::AuthenticationFailed));
        let service = AIInsightService::new(provider);

        let err = service.generate(&user(), request(TrackingDomain::Cycle)).await.unwrap_err();
        assert!(matches!(err, InsightError::Provider(_)));
    }

    #[tokio::test]
    async fn unparsable_reply_becomes_invalid_reply() {
        let provider = Arc::new(MockAIProvider::new().with_response("Sorry, I can't help with that."));
        let service = AIInsightService::new(provider);

        let err = service.generate(&user(), request(TrackingDomain::Cycle)).await.unwrap_err();
        assert!(matches!(err, InsightError::InvalidReply(_)));
    }
}
