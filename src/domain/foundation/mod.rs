//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Cyclewise domain.

mod errors;
mod ids;
pub(crate) mod lenient;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{EntryId, UserId};
pub use timestamp::Timestamp;
