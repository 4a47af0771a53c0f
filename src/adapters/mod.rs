//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat-completion providers (OpenAI-compatible, mock)
//! - `insight` - Insight services built on an AI provider
//! - `storage` - Health store backends (in-memory, JSON files)
//! - `http` - Axum REST API

pub mod ai;
pub mod http;
pub mod insight;
pub mod storage;
