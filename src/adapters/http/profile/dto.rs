//! HTTP DTOs for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::dashboard::DashboardConfig;
use crate::domain::profile::{Classification, ProfileRecord, UserType};

/// Profile together with its derived user type and dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: ProfileRecord,
    #[serde(flatten)]
    pub classification: Classification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfigResponse {
    pub user_type: String,
    /// False when the name was unknown and the fallback dashboard was used.
    pub recognized: bool,
    pub dashboard_config: DashboardConfig,
}

impl DashboardConfigResponse {
    pub fn lookup(user_type: &str) -> Self {
        Self {
            user_type: user_type.to_string(),
            recognized: user_type.parse::<UserType>().is_ok(),
            dashboard_config: DashboardConfig::for_type_name(user_type),
        }
    }
}
