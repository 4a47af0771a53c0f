//! ProfileRecord - self-reported attributes collected by the profile form.
//!
//! Every field is optional on the wire. Missing, `null` or unrecognised values
//! fall back to their defaults so that classification never fails.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::lenient::{lenient_u8, null_as_default};

/// Anatomy tag for uterus and ovaries.
pub const UTERUS_AND_OVARIES: &str = "Uterus & ovaries";
/// Anatomy tag for vagina.
pub const VAGINA: &str = "Vagina";
/// Anatomy tag for penis.
pub const PENIS: &str = "Penis";
/// Anatomy tag for testes.
pub const TESTES: &str = "Testes";
/// Anatomy tag for prostate.
pub const PROSTATE: &str = "Prostate";

/// Sex assigned at birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum SexAssignedAtBirth {
    Female,
    Male,
    Intersex,
    #[default]
    Unknown,
}

impl SexAssignedAtBirth {
    /// Parses the form value; anything unrecognised is `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "Female" => Self::Female,
            "Male" => Self::Male,
            "Intersex" => Self::Intersex,
            _ => Self::Unknown,
        }
    }
}

impl From<Option<String>> for SexAssignedAtBirth {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

/// Whether the person is currently on hormone therapy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum HormoneTherapy {
    Yes,
    #[default]
    No,
}

impl HormoneTherapy {
    /// Only the literal `"Yes"` counts as being on hormones.
    pub fn parse(value: &str) -> Self {
        if value == "Yes" {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl From<Option<String>> for HormoneTherapy {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

/// Flat record of self-reported profile attributes.
///
/// Only `gender_identity`, `sex_assigned_at_birth`, `reproductive_anatomy` and
/// `hormone_therapy` take part in classification. The remaining fields are
/// carried along for insight requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "lenient_u8")]
    pub age: Option<u8>,

    #[serde(deserialize_with = "null_as_default")]
    pub gender_identity: String,

    pub sex_assigned_at_birth: SexAssignedAtBirth,

    #[serde(deserialize_with = "null_as_default")]
    pub reproductive_anatomy: BTreeSet<String>,

    pub hormone_therapy: HormoneTherapy,

    #[serde(deserialize_with = "null_as_default")]
    pub health_conditions: BTreeSet<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub life_stage: String,
}

impl ProfileRecord {
    /// Creates an empty profile (every field at its default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gender identity text.
    pub fn with_gender_identity(mut self, identity: impl Into<String>) -> Self {
        self.gender_identity = identity.into();
        self
    }

    /// Sets the sex assigned at birth.
    pub fn with_sex_assigned_at_birth(mut self, sex: SexAssignedAtBirth) -> Self {
        self.sex_assigned_at_birth = sex;
        self
    }

    /// Adds an anatomy tag.
    pub fn with_anatomy(mut self, tag: impl Into<String>) -> Self {
        self.reproductive_anatomy.insert(tag.into());
        self
    }

    /// Sets the hormone therapy status.
    pub fn with_hormone_therapy(mut self, therapy: HormoneTherapy) -> Self {
        self.hormone_therapy = therapy;
        self
    }

    /// Returns true if the anatomy set contains the given tag.
    pub fn has_anatomy(&self, tag: &str) -> bool {
        self.reproductive_anatomy.contains(tag)
    }
}
