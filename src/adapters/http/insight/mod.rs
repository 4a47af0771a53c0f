//! HTTP adapter for AI insights.
//!
//! - `POST /api/insights/:domain` - Generate insights, falling back to
//!   static guidance when the AI service is unavailable

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::insight_routes;
