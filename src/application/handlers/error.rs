//! HandlerError - failures surfaced by application handlers.

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl HandlerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            HandlerError::Validation(_) => ErrorCode::ValidationFailed,
            HandlerError::Storage(e) if e.is_retryable() => ErrorCode::StorageUnavailable,
            HandlerError::Storage(_) => ErrorCode::InternalError,
        }
    }

    /// True when the user can simply try again later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HandlerError::Storage(e) if e.is_retryable())
    }
}
