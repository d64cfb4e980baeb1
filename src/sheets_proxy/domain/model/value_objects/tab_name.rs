use crate::sheets_proxy::domain::model::enums::sheets_proxy_domain_error::SheetsProxyDomainError;

const MAX_TAB_NAME_LENGTH: usize = 100;
const FORBIDDEN_CHARACTERS: &[char] = &['\'', '!', '[', ']', '*', '?', '/', '\\', ':'];

/// Sheet tab title, restricted so it can be embedded in an A1 range.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TabName(String);

impl TabName {
    pub fn new(value: String) -> Result<Self, SheetsProxyDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed.chars().count() > MAX_TAB_NAME_LENGTH
            || trimmed.contains(FORBIDDEN_CHARACTERS)
        {
            return Err(SheetsProxyDomainError::InvalidTabName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Tab titles are unique ignoring case.
    pub fn refers_to(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}
