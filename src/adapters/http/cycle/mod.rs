//! HTTP adapter for cycle tracking endpoints.
//!
//! - `GET /api/cycle/entries` - Full history, oldest first
//! - `POST /api/cycle/entries` - Log an entry and return fresh stats
//! - `GET /api/cycle/stats` - Stats recomputed from the history

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::cycle_routes;
