//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HealthStore` - Per-user key/value persistence
//! - `InsightService` - Generates health insights from a data snapshot
//! - `AIProvider` - Chat-completion LLM backing the insight service

mod ai_provider;
mod health_store;
mod insight_service;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use health_store::{HealthStore, StoreError, StoreKey};
pub use insight_service::{InsightError, InsightService};
