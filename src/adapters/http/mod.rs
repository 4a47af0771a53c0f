//! HTTP adapters - REST API over the application handlers.
//!
//! Each endpoint group has its own module with DTOs, handlers and routes.
//! Caller identity comes from the `x-user-id` header.

pub mod common;
pub mod cycle;
pub mod data;
pub mod insight;
pub mod middleware;
pub mod profile;

mod router;

pub use common::{ApiError, AppState, AuthenticatedUser, ErrorResponse};
pub use middleware::cors_layer;
pub use router::app_router;
