//! Profile Classifier - maps a profile to a user type and dashboard config.

use serde::{Deserialize, Serialize};

use super::record::{
    HormoneTherapy, ProfileRecord, SexAssignedAtBirth, PENIS, PROSTATE, TESTES,
    UTERUS_AND_OVARIES, VAGINA,
};
use super::user_type::UserType;
use crate::domain::dashboard::DashboardConfig;

/// Gender identity fragments (lower-case) that mark a trans or gender-diverse identity.
pub const TRANS_IDENTITY_MARKERS: &[&str] = &["trans", "non-binary", "gender diverse"];

/// Result of classifying a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub user_type: UserType,
    pub dashboard_config: DashboardConfig,
}

/// Stateless classifier over [`ProfileRecord`]s.
pub struct ProfileClassifier;

impl ProfileClassifier {
    /// Classifies a profile into its user type and dashboard configuration.
    pub fn classify(profile: &ProfileRecord) -> Classification {
        let user_type = Self::user_type(profile);
        Classification {
            user_type,
            dashboard_config: DashboardConfig::for_user_type(user_type),
        }
    }

    /// Derives the user type.
    ///
    /// First matching rule wins: identity and hormone status take precedence
    /// over anatomy, which takes precedence over sex assigned at birth.
    pub fn user_type(profile: &ProfileRecord) -> UserType {
        let has_uterus = Self::has_uterus(profile);
        let has_penis = Self::has_penis(profile);

        if Self::is_trans(profile) || Self::is_on_hormones(profile) {
            return match (has_uterus, has_penis) {
                (true, true) => UserType::Intersex,
                (true, false) => UserType::TransFemale,
                (false, true) => UserType::TransMale,
                (false, false) => UserType::TransNonBinary,
            };
        }

        if has_uterus {
            UserType::FemaleAfab
        } else if has_penis {
            UserType::MaleAmab
        } else {
            match profile.sex_assigned_at_birth {
                SexAssignedAtBirth::Female => UserType::FemaleAfab,
                SexAssignedAtBirth::Male => UserType::MaleAmab,
                SexAssignedAtBirth::Intersex | SexAssignedAtBirth::Unknown => UserType::NonBinary,
            }
        }
    }

    /// Case-insensitive substring match against [`TRANS_IDENTITY_MARKERS`].
    pub fn is_trans(profile: &ProfileRecord) -> bool {
        let identity = profile.gender_identity.to_lowercase();
        TRANS_IDENTITY_MARKERS
            .iter()
            .any(|marker| identity.contains(marker))
    }

    pub fn is_on_hormones(profile: &ProfileRecord) -> bool {
        profile.hormone_therapy == HormoneTherapy::Yes
    }

    pub fn has_uterus(profile: &ProfileRecord) -> bool {
        profile.has_anatomy(UTERUS_AND_OVARIES) || profile.has_anatomy(VAGINA)
    }

    pub fn has_penis(profile: &ProfileRecord) -> bool {
        profile.has_anatomy(PENIS) || profile.has_anatomy(TESTES) || profile.has_anatomy(PROSTATE)
    }
}
