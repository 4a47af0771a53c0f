//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! handler holds the ports it needs as `Arc<dyn Port>` and exposes a single
//! `handle` method.

pub mod cycle;
pub mod data;
pub mod insight;
pub mod profile;

mod error;
mod typed_store;
mod user_locks;

pub use error::HandlerError;
pub use user_locks::UserLocks;

pub use cycle::{
    GetCycleStatsHandler, GetCycleStatsQuery, ListEntriesHandler, ListEntriesQuery,
    LogCycleEntryCommand, LogCycleEntryHandler, LogCycleEntryResult,
};
pub use data::{
    DeleteUserDataCommand, DeleteUserDataHandler, ExportUserDataHandler, ExportUserDataQuery,
    UserDataExport,
};
pub use insight::{
    CycleSnapshot, GenerateInsightsCommand, GenerateInsightsHandler, GenerateInsightsResult,
    InsightSource,
};
pub use profile::{
    GetProfileHandler, GetProfileQuery, GetProfileResult, SaveProfileCommand, SaveProfileHandler,
    SaveProfileResult,
};
