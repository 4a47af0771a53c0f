//! Profile handlers.

mod get_profile;
mod save_profile;

pub use get_profile::{GetProfileHandler, GetProfileQuery, GetProfileResult};
pub use save_profile::{SaveProfileCommand, SaveProfileHandler, SaveProfileResult};
