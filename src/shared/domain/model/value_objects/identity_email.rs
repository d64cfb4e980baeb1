use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email pattern");
}

#[derive(Debug, Error)]
#[error("email address is invalid")]
pub struct InvalidIdentityEmail;

/// Normalized (trimmed, lower-cased) email used as the stable identity key.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct IdentityEmail(String);

impl IdentityEmail {
    pub fn new(value: String) -> Result<Self, InvalidIdentityEmail> {
        let normalized = value.trim().to_lowercase();
        if normalized.len() > 254 || !EMAIL_SHAPE.is_match(&normalized) {
            return Err(InvalidIdentityEmail);
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
