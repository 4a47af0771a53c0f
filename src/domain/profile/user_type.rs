//! UserType - coarse category derived from a profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Discrete user category driving dashboard visibility.
///
/// Always derived from a [`ProfileRecord`](super::ProfileRecord); never
/// stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    FemaleAfab,
    MaleAmab,
    TransFemale,
    TransMale,
    TransNonBinary,
    NonBinary,
    Intersex,
}

impl UserType {
    /// Every user type, in declaration order.
    pub const ALL: [UserType; 7] = [
        UserType::FemaleAfab,
        UserType::MaleAmab,
        UserType::TransFemale,
        UserType::TransMale,
        UserType::TransNonBinary,
        UserType::NonBinary,
        UserType::Intersex,
    ];

    /// Returns the wire name (`female_afab`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::FemaleAfab => "female_afab",
            UserType::MaleAmab => "male_amab",
            UserType::TransFemale => "trans_female",
            UserType::TransMale => "trans_male",
            UserType::TransNonBinary => "trans_non_binary",
            UserType::NonBinary => "non_binary",
            UserType::Intersex => "intersex",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("user_type", format!("unknown user type '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for user_type in UserType::ALL {
            let json = serde_json::to_string(&user_type).unwrap();
            assert_eq!(json, format!("\"{}\"", user_type.as_str()));
        }
    }

    #[test]
    fn parses_every_wire_name() {
        for user_type in UserType::ALL {
            assert_eq!(user_type.as_str().parse::<UserType>().unwrap(), user_type);
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert!("agender".parse::<UserType>().is_err());
    }
}
