use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("access token is empty")]
pub struct EmptyAccessToken;

/// Google access token held only for the duration of a request.
///
/// Not serializable and redacted in `Debug`, so it can reach neither a
/// response body nor a log line.
#[derive(Clone, Eq, PartialEq)]
pub struct ThirdPartyAccessToken(String);

impl ThirdPartyAccessToken {
    pub fn new(value: String) -> Result<Self, EmptyAccessToken> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmptyAccessToken);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ThirdPartyAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ThirdPartyAccessToken(***)")
    }
}
