//! Cyclewise - inclusive health tracking backend
//!
//! Classifies a user's profile into a user type and dashboard, aggregates
//! cycle statistics from logged entries, and produces AI insights per
//! tracking domain with a static fallback when the AI is unavailable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
