use async_trait::async_trait;
use thiserror::Error;

use crate::shared::domain::model::{
    enums::user_role::UserRole,
    value_objects::{
        identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken,
    },
};

#[derive(Debug, Error)]
pub enum RoleDirectoryError {
    #[error("role directory unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the role an identity is entitled to. `None` means the identity
/// is not authorized at all. The caller's own token is the capability used
/// to consult any external roster.
#[async_trait]
pub trait RoleDirectoryFacade: Send + Sync {
    async fn resolve_role(
        &self,
        email: &IdentityEmail,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<Option<UserRole>, RoleDirectoryError>;
}
