//! HTTP middleware for axum.
//!
//! - `cors` - Cross-origin policy built from the configured origins

pub mod cors;

pub use cors::cors_layer;
