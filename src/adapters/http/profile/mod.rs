//! HTTP adapter for profile endpoints.
//!
//! - `GET /api/profile` - Stored profile with its classification
//! - `PUT /api/profile` - Replace the profile and classify it
//! - `GET /api/dashboard-config/:user_type` - Dashboard table lookup

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::profile_routes;
