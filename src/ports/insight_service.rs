//! Insight Service Port - External generator of free-form health insights.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::insight::{InsightReport, InsightRequest};

/// Errors from the insight service. Callers absorb all of them into the
/// static fallback report.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("insight service is not configured")]
    NotConfigured,

    #[error("insight provider failed: {0}")]
    Provider(String),

    #[error("insight reply could not be parsed: {0}")]
    InvalidReply(String),

    #[error("insight request timed out after {0}s")]
    Timeout(u64),
}

/// Port for generating insights from a data snapshot and a profile.
#[async_trait]
pub trait InsightService: Send + Sync {
    async fn generate(&self, user: &UserId, request: InsightRequest) -> Result<InsightReport, InsightError>;
}
