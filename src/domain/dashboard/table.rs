//! Per-user-type dashboard flag table.
//!
//! One literal flag set per [`UserType`]. Completeness is enforced by the
//! exhaustive match in [`flag_set`]; adding a user type without a table entry
//! does not compile.

use super::config::{DashboardConfig, FeatureFlags, QuickActions, SharedSections};
use crate::domain::profile::UserType;

/// Literal flags for one user type.
#[derive(Debug)]
pub struct FlagSet {
    pub gender_specific: &'static [(&'static str, bool)],
    pub quick_action: &'static str,
}

const FEMALE_AFAB: FlagSet = FlagSet {
    gender_specific: &[
        ("menstrualCycle", true),
        ("fertilityTracking", true),
        ("pregnancyMode", true),
        ("menopauseTracking", true),
        ("pcosTracking", true),
        ("endometriosisTracking", true),
        ("breastHealth", true),
        ("pelvicHealth", true),
    ],
    quick_action: "logPeriod",
};

const MALE_AMAB: FlagSet = FlagSet {
    gender_specific: &[
        ("testosteroneTracking", true),
        ("prostateHealth", true),
        ("testicularHealth", true),
        ("sexualHealth", true),
        ("hairLossTracking", true),
        ("cardiovascularHealth", true),
    ],
    quick_action: "logTestosterone",
};

const TRANS_FEMALE: FlagSet = FlagSet {
    gender_specific: &[
        ("hormoneTherapy", true),
        ("menstrualCycle", true),
        ("genderAffirmingCare", true),
        ("mentalWellbeing", true),
        ("voiceTraining", true),
        ("breastHealth", true),
        ("pelvicHealth", true),
    ],
    quick_action: "logHormoneDose",
};

const TRANS_MALE: FlagSet = FlagSet {
    gender_specific: &[
        ("hormoneTherapy", true),
        ("testosteroneTracking", true),
        ("prostateHealth", true),
        ("genderAffirmingCare", true),
        ("mentalWellbeing", true),
        ("chestHealth", true),
        ("sexualHealth", true),
    ],
    quick_action: "logHormoneDose",
};

const TRANS_NON_BINARY: FlagSet = FlagSet {
    gender_specific: &[
        ("hormoneTherapy", true),
        ("genderAffirmingCare", true),
        ("mentalWellbeing", true),
        ("bodyChanges", true),
        ("inclusiveHealth", true),
        ("customTracking", true),
    ],
    quick_action: "logCustom",
};

const NON_BINARY: FlagSet = FlagSet {
    gender_specific: &[
        ("inclusiveHealth", true),
        ("customTracking", true),
        ("mentalWellbeing", true),
        ("bodyChanges", true),
        ("sexualHealth", true),
        ("menstrualCycle", false),
    ],
    quick_action: "logCustom",
};

const INTERSEX: FlagSet = FlagSet {
    gender_specific: &[
        ("intersexCare", true),
        ("hormoneTherapy", true),
        ("menstrualCycle", true),
        ("testosteroneTracking", true),
        ("inclusiveHealth", true),
        ("customTracking", true),
        ("mentalWellbeing", true),
        ("pelvicHealth", true),
    ],
    quick_action: "logCustom",
};

/// Used for type names that do not parse to a [`UserType`].
pub const FALLBACK: FlagSet = FlagSet {
    gender_specific: &[("inclusiveHealth", true), ("customTracking", true)],
    quick_action: "logCustom",
};

/// Returns the literal flag set for a user type.
pub fn flag_set(user_type: UserType) -> &'static FlagSet {
    match user_type {
        UserType::FemaleAfab => &FEMALE_AFAB,
        UserType::MaleAmab => &MALE_AMAB,
        UserType::TransFemale => &TRANS_FEMALE,
        UserType::TransMale => &TRANS_MALE,
        UserType::TransNonBinary => &TRANS_NON_BINARY,
        UserType::NonBinary => &NON_BINARY,
        UserType::Intersex => &INTERSEX,
    }
}

impl DashboardConfig {
    /// Looks up the dashboard for a user type.
    pub fn for_user_type(user_type: UserType) -> Self {
        Self::from_flag_set(flag_set(user_type))
    }

    /// Looks up the dashboard by wire name, falling back for unknown names.
    pub fn for_type_name(name: &str) -> Self {
        match name.parse::<UserType>() {
            Ok(user_type) => Self::for_user_type(user_type),
            Err(_) => Self::fallback(),
        }
    }

    /// The fallback dashboard (`inclusiveHealth`, `customTracking`).
    pub fn fallback() -> Self {
        Self::from_flag_set(&FALLBACK)
    }

    fn from_flag_set(flags: &FlagSet) -> Self {
        let gender_specific_sections: FeatureFlags = flags
            .gender_specific
            .iter()
            .map(|(name, enabled)| (name.to_string(), *enabled))
            .collect();

        Self {
            shared_sections: SharedSections::ALL_ENABLED,
            gender_specific_sections,
            quick_actions: QuickActions::with_extra(flags.quick_action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_sections_identical_across_user_types() {
        let reference = serde_json::to_vec(&DashboardConfig::for_user_type(UserType::FemaleAfab).shared_sections)
            .unwrap();
        for user_type in UserType::ALL {
            let bytes = serde_json::to_vec(&DashboardConfig::for_user_type(user_type).shared_sections)
                .unwrap();
            assert_eq!(bytes, reference, "shared sections differ for {}", user_type);
        }
    }

    #[test]
    fn every_user_type_has_sections_and_one_extra_action() {
        for user_type in UserType::ALL {
            let config = DashboardConfig::for_user_type(user_type);
            let count = config.gender_specific_sections.len();
            assert!((6..=10).contains(&count), "{} has {} sections", user_type, count);
            assert_eq!(config.quick_actions.extra.len(), 1);
        }
    }

    #[test]
    fn female_afab_shows_menstrual_tracking() {
        let config = DashboardConfig::for_user_type(UserType::FemaleAfab);
        assert!(config.shows_section("menstrualCycle"));
        assert!(config.has_quick_action("logPeriod"));
        assert!(!config.shows_section("prostateHealth"));
    }

    #[test]
    fn non_binary_lists_menstrual_cycle_as_disabled() {
        let config = DashboardConfig::for_user_type(UserType::NonBinary);
        assert_eq!(config.gender_specific_sections.get("menstrualCycle"), Some(&false));
        assert!(!config.shows_section("menstrualCycle"));
    }

    #[test]
    fn type_name_lookup_matches_enum_lookup() {
        for user_type in UserType::ALL {
            assert_eq!(
                DashboardConfig::for_type_name(user_type.as_str()),
                DashboardConfig::for_user_type(user_type)
            );
        }
    }

    #[test]
    fn unknown_type_name_gets_fallback() {
        let config = DashboardConfig::for_type_name("something_else");
        assert_eq!(config, DashboardConfig::fallback());
        assert_eq!(config.gender_specific_sections.len(), 2);
        assert!(config.shows_section("inclusiveHealth"));
        assert!(config.shows_section("customTracking"));
        assert_eq!(config.shared_sections, SharedSections::ALL_ENABLED);
    }

    #[test]
    fn dashboard_serializes_section_keys() {
        let value = serde_json::to_value(DashboardConfig::for_user_type(UserType::Intersex)).unwrap();
        assert!(value["sharedSections"]["aiInsights"].as_bool().unwrap());
        assert!(value["genderSpecificSections"]["intersexCare"].as_bool().unwrap());
        assert!(value["quickActions"]["logCustom"].as_bool().unwrap());
    }
}
