use axum::http::{HeaderMap, header::AUTHORIZATION};
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum BearerTokenError {
    #[error("missing bearer token")]
    Missing,

    #[error("malformed authorization header")]
    Malformed,
}

/// Reads `Authorization: Bearer <token>`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, BearerTokenError> {
    let authorization = headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| BearerTokenError::Malformed))
        .transpose()?
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(BearerTokenError::Missing)?;

    let (scheme, token) = authorization
        .split_once(' ')
        .ok_or(BearerTokenError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerTokenError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerTokenError::Malformed);
    }

    Ok(token.to_string())
}
