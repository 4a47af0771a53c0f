//! Shared HTTP plumbing: error responses, identity extraction, app state.

mod error;
mod extract;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use extract::{parse_optional_json, AuthenticatedUser, USER_ID_HEADER};
pub use state::AppState;
