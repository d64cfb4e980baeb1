use std::time::Duration;

use crate::{
    iam::domain::model::enums::iam_domain_error::IamDomainError,
    shared::domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken,
};

pub const MAX_THIRD_PARTY_TOKEN_LIFETIME_SECONDS: u64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct IssueSessionCommand {
    access_token: ThirdPartyAccessToken,
    expires_in: Option<Duration>,
}

impl IssueSessionCommand {
    pub fn new(
        access_token: String,
        expires_in_seconds: Option<u64>,
    ) -> Result<Self, IamDomainError> {
        Ok(Self {
            access_token: ThirdPartyAccessToken::new(access_token)
                .map_err(|e| IamDomainError::InvalidRequest(e.to_string()))?,
            expires_in: parse_expires_in(expires_in_seconds)?,
        })
    }

    pub fn access_token(&self) -> &ThirdPartyAccessToken {
        &self.access_token
    }
    pub fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }
}

pub(crate) fn parse_expires_in(
    expires_in_seconds: Option<u64>,
) -> Result<Option<Duration>, IamDomainError> {
    match expires_in_seconds {
        Some(0) => Err(IamDomainError::InvalidRequest(
            "expires_in_seconds must be positive".to_string(),
        )),
        Some(seconds) if seconds > MAX_THIRD_PARTY_TOKEN_LIFETIME_SECONDS => {
            Err(IamDomainError::InvalidRequest(format!(
                "expires_in_seconds must not exceed {MAX_THIRD_PARTY_TOKEN_LIFETIME_SECONDS}"
            )))
        }
        Some(seconds) => Ok(Some(Duration::from_secs(seconds))),
        None => Ok(None),
    }
}
