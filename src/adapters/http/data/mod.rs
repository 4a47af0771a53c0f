//! HTTP adapter for whole-account data operations.
//!
//! - `GET /api/export` - JSON dump of every stored key
//! - `DELETE /api/data` - Remove every stored key

pub mod handlers;
pub mod routes;

pub use routes::data_routes;
