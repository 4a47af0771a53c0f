//! Request extractors.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::domain::foundation::UserId;

/// Header carrying the caller's identity, taken verbatim.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity extracted from the `x-user-id` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| UserId::new(s.trim()).ok())
            .ok_or_else(|| ApiError::Unauthorized(format!("Missing {} header", USER_ID_HEADER)))?;

        Ok(AuthenticatedUser { user_id })
    }
}

/// Parses an optional JSON body: empty means `None`, malformed is a 400.
pub fn parse_optional_json<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn empty_body_is_none() {
        assert!(parse_optional_json::<Value>(b"").unwrap().is_none());
        assert!(parse_optional_json::<Value>(b"  \n").unwrap().is_none());
    }

    #[test]
    fn malformed_body_is_bad_request() {
        assert!(matches!(
            parse_optional_json::<Value>(b"{oops"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
