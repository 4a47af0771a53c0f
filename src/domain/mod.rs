//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `profile` - Profile record and the user-type classifier
//! - `dashboard` - Declarative dashboard flags per user type
//! - `cycle` - Cycle entries and the statistics aggregator
//! - `insight` - Shapes exchanged with the AI insight service
//!
//! Everything here is pure: no I/O, no clocks except where a caller passes a
//! timestamp in.

pub mod cycle;
pub mod dashboard;
pub mod foundation;
pub mod insight;
pub mod profile;
