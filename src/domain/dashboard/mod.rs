//! Dashboard module - declarative dashboard visibility per user type.

mod config;
mod table;

pub use config::{DashboardConfig, FeatureFlags, QuickActions, SharedSections};
pub use table::{flag_set, FlagSet, FALLBACK};
