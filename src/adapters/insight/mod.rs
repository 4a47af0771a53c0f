//! Insight Service Adapters.
//!
//! - `AIInsightService` - Prompts an [`AIProvider`](crate::ports::AIProvider) and parses its JSON reply
//! - `DisabledInsightService` - Always reports `NotConfigured` (no API key)

mod ai_insight_service;
mod disabled;
mod prompt;

pub use ai_insight_service::AIInsightService;
pub use disabled::DisabledInsightService;
