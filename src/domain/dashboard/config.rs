//! Dashboard configuration view model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named boolean feature flags.
pub type FeatureFlags = BTreeMap<String, bool>;

/// Sections shown to every user type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSections {
    pub health_overview: bool,
    pub symptom_tracker: bool,
    pub mood_tracker: bool,
    pub sleep_tracker: bool,
    pub nutrition_tracker: bool,
    pub exercise_tracker: bool,
    pub medication_tracker: bool,
    pub ai_insights: bool,
    pub health_reports: bool,
}

impl SharedSections {
    /// The one shared-section set used by every dashboard.
    pub const ALL_ENABLED: SharedSections = SharedSections {
        health_overview: true,
        symptom_tracker: true,
        mood_tracker: true,
        sleep_tracker: true,
        nutrition_tracker: true,
        exercise_tracker: true,
        medication_tracker: true,
        ai_insights: true,
        health_reports: true,
    };
}

/// Quick actions: four fixed actions plus type-specific extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActions {
    pub log_symptoms: bool,
    pub log_mood: bool,
    pub view_insights: bool,
    pub export_data: bool,
    #[serde(flatten)]
    pub extra: FeatureFlags,
}

impl QuickActions {
    /// Fixed actions enabled, plus the given extra action.
    pub fn with_extra(action: &str) -> Self {
        let mut extra = FeatureFlags::new();
        extra.insert(action.to_string(), true);
        Self {
            log_symptoms: true,
            log_mood: true,
            view_insights: true,
            export_data: true,
            extra,
        }
    }
}

/// Declarative set of flags controlling which dashboard sections are visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub shared_sections: SharedSections,
    pub gender_specific_sections: FeatureFlags,
    pub quick_actions: QuickActions,
}

impl DashboardConfig {
    /// Returns true if the named gender-specific section is enabled.
    pub fn shows_section(&self, section: &str) -> bool {
        self.gender_specific_sections
            .get(section)
            .copied()
            .unwrap_or(false)
    }

    /// Returns true if the named type-specific quick action is enabled.
    pub fn has_quick_action(&self, action: &str) -> bool {
        self.quick_actions.extra.get(action).copied().unwrap_or(false)
    }
}
