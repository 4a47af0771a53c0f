//! Insight module - request/response shapes exchanged with the AI insight service.
//!
//! The core never validates insight content beyond these shapes. When the
//! service fails, [`InsightReport::fallback`] supplies a fixed static report.

mod report;
mod tracking_domain;

pub use report::{AlertPriority, InsightReport, InsightRequest, MedicalAlert};
pub use tracking_domain::TrackingDomain;
