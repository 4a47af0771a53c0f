//! Profile module - self-reported profile data and its classification.
//!
//! # Components
//!
//! - `ProfileRecord` - raw, defaultable form input
//! - `UserType` - coarse category derived from a profile
//! - `ProfileClassifier` - strict priority cascade from profile to user type
//!
//! Classification is pure and recomputed on every read; the user type is
//! never persisted on its own.

mod classifier;
mod record;
mod user_type;

pub use classifier::{Classification, ProfileClassifier, TRANS_IDENTITY_MARKERS};
pub use record::{
    HormoneTherapy, ProfileRecord, SexAssignedAtBirth, PENIS, PROSTATE, TESTES,
    UTERUS_AND_OVARIES, VAGINA,
};
pub use user_type::UserType;
