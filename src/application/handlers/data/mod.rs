//! Whole-account data handlers.

mod delete_user_data;
mod export_user_data;

pub use delete_user_data::{DeleteUserDataCommand, DeleteUserDataHandler};
pub use export_user_data::{ExportUserDataHandler, ExportUserDataQuery, UserDataExport};
