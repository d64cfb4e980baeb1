use crate::iam::domain::model::enums::iam_domain_error::IamDomainError;

#[derive(Clone, Debug)]
pub struct AuthenticateSessionQuery {
    session_credential: String,
}

impl AuthenticateSessionQuery {
    pub fn new(session_credential: String) -> Result<Self, IamDomainError> {
        let trimmed = session_credential.trim();
        if trimmed.is_empty() {
            return Err(IamDomainError::InvalidSessionCredential);
        }
        Ok(Self {
            session_credential: trimmed.to_string(),
        })
    }

    pub fn session_credential(&self) -> &str {
        &self.session_credential
    }
}
