use async_trait::async_trait;
use thiserror::Error;

use crate::shared::domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IdentityProfile {
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("identity provider rejected the token ({status})")]
    Rejected { status: u16 },

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IdentityProviderRepository: Send + Sync {
    async fn fetch_profile(
        &self,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<IdentityProfile, IdentityProviderError>;
}
