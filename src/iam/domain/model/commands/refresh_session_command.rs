use std::time::Duration;

use crate::{
    iam::domain::model::{
        commands::issue_session_command::parse_expires_in,
        enums::iam_domain_error::IamDomainError,
    },
    shared::domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken,
};

#[derive(Clone, Debug)]
pub struct RefreshSessionCommand {
    session_credential: String,
    access_token: ThirdPartyAccessToken,
    expires_in: Option<Duration>,
}

impl RefreshSessionCommand {
    pub fn new(
        session_credential: String,
        access_token: String,
        expires_in_seconds: Option<u64>,
    ) -> Result<Self, IamDomainError> {
        let session_credential = session_credential.trim().to_string();
        if session_credential.is_empty() {
            return Err(IamDomainError::InvalidSessionCredential);
        }

        Ok(Self {
            session_credential,
            access_token: ThirdPartyAccessToken::new(access_token)
                .map_err(|e| IamDomainError::InvalidRequest(e.to_string()))?,
            expires_in: parse_expires_in(expires_in_seconds)?,
        })
    }

    pub fn session_credential(&self) -> &str {
        &self.session_credential
    }
    pub fn access_token(&self) -> &ThirdPartyAccessToken {
        &self.access_token
    }
    pub fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }
}
