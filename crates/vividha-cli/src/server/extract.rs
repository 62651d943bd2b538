//! Session-id extraction from request headers.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the client's session id.
pub const SESSION_HEADER: &str = "x-vividha-session";
/// Id used when the client does not send one.
pub const DEFAULT_SESSION: &str = "local";

/// Client session id, taken from the `x-vividha-session` header.
pub struct SessionId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SESSION);
        Ok(SessionId(id.to_string()))
    }
}
